use std::path::PathBuf;

/// Errors from persisting result documents.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors reported by rendering sinks.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("render io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("render failed: {0}")]
    Sink(String),
}
