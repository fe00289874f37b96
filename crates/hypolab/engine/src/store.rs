//! Result document persistence.
//!
//! One JSON document per iteration, under `<root>/<task>/results/`. Writes
//! are atomic (write to `.tmp`, then rename) so a reader never sees a
//! partial document. Re-running an iteration overwrites its document.

use crate::error::StoreError;
use crate::report::{HypothesisReport, TransformationReport};
use hypolab_types::{CandidateId, IterationKind};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

pub const RESULTS_DIR: &str = "results";

/// Writes result documents next to the candidate artifacts.
#[derive(Debug, Clone)]
pub struct ResultStore {
    root: PathBuf,
}

impl ResultStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// e.g. `<root>/6150a2bd/results/2_transformation_results.json`
    pub fn results_path(&self, id: &CandidateId) -> PathBuf {
        self.root
            .join(&id.task_id)
            .join(RESULTS_DIR)
            .join(format!("{}_results.json", id.file_stem()))
    }

    pub fn save_hypotheses(&self, report: &HypothesisReport) -> Result<PathBuf, StoreError> {
        self.write(&report.candidate_id(), report)
    }

    pub fn save_transformation(&self, report: &TransformationReport) -> Result<PathBuf, StoreError> {
        self.write(&report.candidate_id(), report)
    }

    /// Read back a stored hypothesis document, if one exists.
    pub fn load_hypotheses(
        &self,
        task_id: &str,
        iteration: u32,
    ) -> Result<Option<HypothesisReport>, StoreError> {
        self.read(&CandidateId::new(task_id, iteration, IterationKind::HypothesisSet))
    }

    /// Read back a stored transformation document, if one exists.
    pub fn load_transformation(
        &self,
        task_id: &str,
        iteration: u32,
    ) -> Result<Option<TransformationReport>, StoreError> {
        self.read(&CandidateId::new(task_id, iteration, IterationKind::Transformation))
    }

    fn write<T: Serialize>(&self, id: &CandidateId, document: &T) -> Result<PathBuf, StoreError> {
        let path = self.results_path(id);
        let json = serde_json::to_string_pretty(document)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json).map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;
        std::fs::rename(&tmp_path, &path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        info!(candidate = %id, path = %path.display(), "results saved");
        Ok(path)
    }

    fn read<T: DeserializeOwned>(&self, id: &CandidateId) -> Result<Option<T>, StoreError> {
        let path = self.results_path(id);
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(Some(serde_json::from_str(&contents)?))
    }
}
