//! On-disk candidate artifacts.
//!
//! Layout: `<root>/<task_id>/iterations/<n>_<kind>.toml`, where `<kind>` is
//! `hypothesis-set` or `transformation`.

use hypolab_types::{CandidateId, IterationKind};
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub const ITERATIONS_DIR: &str = "iterations";
pub const ARTIFACT_EXTENSION: &str = "toml";

fn file_name_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^([1-9]\d*)_(hypothesis-set|transformation)\.toml$").ok())
        .as_ref()
}

/// Parse an artifact file name into its identity.
///
/// Returns `None` for names that do not follow the convention, including a
/// zero, zero-padded or overflowing iteration number. The file name must be
/// exactly what [`artifact_path`] rebuilds from the identity.
pub fn parse_file_name(task_id: &str, file_name: &str) -> Option<CandidateId> {
    let caps = file_name_pattern()?.captures(file_name)?;
    let iteration: u32 = caps[1].parse().ok().filter(|n| *n > 0)?;
    let kind: IterationKind = caps[2].parse().ok()?;
    Some(CandidateId::new(task_id, iteration, kind))
}

/// Directory holding a task's artifacts.
pub fn iterations_dir(root: &Path, task_id: &str) -> PathBuf {
    root.join(task_id).join(ITERATIONS_DIR)
}

/// Path of the artifact for `id` under `root`.
pub fn artifact_path(root: &Path, id: &CandidateId) -> PathBuf {
    iterations_dir(root, &id.task_id).join(format!("{}.{}", id.file_stem(), ARTIFACT_EXTENSION))
}

/// `<n>_hypothesis-set.toml`: hypotheses to evaluate, in order.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HypothesisManifest {
    #[serde(default)]
    pub hypotheses: Vec<String>,
}

/// `<n>_transformation.toml`: the single transform entry point.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransformationManifest {
    pub transform: Option<String>,
}
