//! CLI error types

use std::path::PathBuf;
use thiserror::Error;

/// Configuration could not be assembled.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Failures of the orchestrator's own control flow. Corpus, artifact and
/// candidate faults never surface here; they become report rows.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("hypotheses root {0} is not a directory")]
    MissingRoot(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
