use std::path::PathBuf;

/// Errors from locating or resolving a candidate artifact.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("candidate artifact not found: {0}")]
    ArtifactNotFound(PathBuf),
    #[error("entry point missing in {path}: {reason}")]
    EntryPointMissing { path: PathBuf, reason: String },
    #[error("malformed candidate artifact {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoaderError {
    /// Short classification used in run reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ArtifactNotFound(_) => "artifact_not_found",
            Self::EntryPointMissing { .. } => "entry_point_missing",
            Self::Malformed { .. } => "malformed_artifact",
            Self::Io { .. } => "io",
        }
    }
}
