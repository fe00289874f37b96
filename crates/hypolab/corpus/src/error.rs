use std::path::PathBuf;

/// Errors from loading a task corpus.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("no task record for '{task_id}' (searched: {searched})")]
    NotFound { task_id: String, searched: String },
    #[error("malformed task record '{task_id}': {reason}")]
    Malformed { task_id: String, reason: String },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CorpusError {
    /// Short classification used in run reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "corpus_not_found",
            Self::Malformed { .. } => "malformed_corpus",
            Self::Io { .. } => "io",
        }
    }

    pub(crate) fn malformed(task_id: &str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            task_id: task_id.to_string(),
            reason: reason.into(),
        }
    }
}
