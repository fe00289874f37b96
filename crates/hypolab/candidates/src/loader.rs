use crate::artifact::{artifact_path, HypothesisManifest, TransformationManifest};
use crate::error::LoaderError;
use crate::registry::CandidateRegistry;
use crate::traits::{Hypothesis, Transformation};
use hypolab_types::{CandidateId, IterationKind};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, warn};

/// An ordered, name-unique set of hypotheses.
#[derive(Clone, Default)]
pub struct HypothesisSet {
    entries: Vec<(String, Arc<dyn Hypothesis>)>,
}

impl HypothesisSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hypothesis. Returns `false` (and keeps the set unchanged)
    /// when the name is already taken.
    pub fn insert(&mut self, name: impl Into<String>, hypothesis: Arc<dyn Hypothesis>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.entries.push((name, hypothesis));
        true
    }

    pub fn with(mut self, name: impl Into<String>, hypothesis: impl Hypothesis + 'static) -> Self {
        self.insert(name, Arc::new(hypothesis));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Hypothesis)> {
        self.entries.iter().map(|(n, h)| (n.as_str(), h.as_ref()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }
}

impl std::fmt::Debug for HypothesisSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// A resolved transformation entry point.
#[derive(Clone)]
pub struct LoadedTransformation {
    pub name: String,
    pub transform: Arc<dyn Transformation>,
}

impl std::fmt::Debug for LoadedTransformation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedTransformation")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Resolves versioned artifacts against a registry.
///
/// Nothing is cached: each call re-reads the manifest.
#[derive(Debug, Clone)]
pub struct CandidateLoader {
    root: PathBuf,
    registry: Arc<CandidateRegistry>,
}

impl CandidateLoader {
    pub fn new(root: impl Into<PathBuf>, registry: Arc<CandidateRegistry>) -> Self {
        Self {
            root: root.into(),
            registry,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn registry(&self) -> &CandidateRegistry {
        &self.registry
    }

    /// Load the hypothesis set for an iteration.
    ///
    /// Fails only when the artifact does not exist. Any other load-time
    /// fault is logged and degrades to an empty set.
    pub fn load_hypotheses(
        &self,
        task_id: &str,
        iteration: u32,
    ) -> Result<HypothesisSet, LoaderError> {
        let id = CandidateId::new(task_id, iteration, IterationKind::HypothesisSet);
        match self.resolve_hypotheses(&id) {
            Ok(set) => {
                if set.is_empty() {
                    warn!(candidate = %id, "hypothesis set is empty");
                }
                Ok(set)
            }
            Err(e @ LoaderError::ArtifactNotFound(_)) => Err(e),
            Err(e) => {
                error!(candidate = %id, error = %e, "failed to load hypothesis set");
                Ok(HypothesisSet::new())
            }
        }
    }

    /// Load the transform entry point for an iteration.
    pub fn load_transformation(
        &self,
        task_id: &str,
        iteration: u32,
    ) -> Result<LoadedTransformation, LoaderError> {
        let id = CandidateId::new(task_id, iteration, IterationKind::Transformation);
        let path = artifact_path(&self.root, &id);
        let manifest: TransformationManifest = read_manifest(&path)?;
        let name = manifest
            .transform
            .ok_or_else(|| LoaderError::EntryPointMissing {
                path: path.clone(),
                reason: "no `transform` entry".into(),
            })?;
        let transform =
            self.registry
                .transformation(&name)
                .ok_or_else(|| LoaderError::EntryPointMissing {
                    path: path.clone(),
                    reason: format!("transformation '{}' is not registered", name),
                })?;
        Ok(LoadedTransformation { name, transform })
    }

    fn resolve_hypotheses(&self, id: &CandidateId) -> Result<HypothesisSet, LoaderError> {
        let path = artifact_path(&self.root, id);
        let manifest: HypothesisManifest = read_manifest(&path)?;
        let mut set = HypothesisSet::new();
        for name in manifest.hypotheses {
            let hypothesis =
                self.registry
                    .hypothesis(&name)
                    .ok_or_else(|| LoaderError::EntryPointMissing {
                        path: path.clone(),
                        reason: format!("hypothesis '{}' is not registered", name),
                    })?;
            if !set.insert(name.clone(), hypothesis) {
                return Err(LoaderError::Malformed {
                    path,
                    reason: format!("hypothesis '{}' listed twice", name),
                });
            }
        }
        Ok(set)
    }
}

fn read_manifest<T: DeserializeOwned>(path: &Path) -> Result<T, LoaderError> {
    if !path.is_file() {
        return Err(LoaderError::ArtifactNotFound(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|e| LoaderError::Malformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
