//! Harness configuration.
//!
//! Built once at startup and handed to the orchestrator by value. Sources
//! layer as defaults, then an optional TOML file, then `HYPOLAB_*`
//! environment variables (`HYPOLAB_LOGGING__LEVEL=debug`).

use crate::error::{CliError, CliResult, ConfigError};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Root holding `<task>/iterations/` and `<task>/results/`
    #[serde(default = "default_hypotheses_root")]
    pub hypotheses_root: PathBuf,

    /// Corpus directories, searched in order
    #[serde(default = "default_corpus_dirs")]
    pub corpus_dirs: Vec<PathBuf>,

    /// Hand transformation comparisons to the render sink
    #[serde(default = "default_true")]
    pub render: bool,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            hypotheses_root: default_hypotheses_root(),
            corpus_dirs: default_corpus_dirs(),
            render: true,
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON log lines
    #[serde(default)]
    pub json: bool,

    /// Also append plain log lines to this file, e.g. `logs/execution.log`
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Open the configured log file for appending, creating its directory.
    pub fn open_file(&self) -> CliResult<Option<File>> {
        let Some(path) = &self.file else {
            return Ok(None);
        };
        let io_error = |source| CliError::Io {
            path: path.clone(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(io_error)?;
        Ok(Some(file))
    }
}

fn default_hypotheses_root() -> PathBuf {
    PathBuf::from("model_hypotheses")
}

fn default_corpus_dirs() -> Vec<PathBuf> {
    vec![
        PathBuf::from("data/training"),
        PathBuf::from("data/evaluation"),
    ]
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl HarnessConfig {
    /// Load configuration. An explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&HarnessConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("HYPOLAB")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("corpus_dirs"),
        );

        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn with_hypotheses_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.hypotheses_root = root.into();
        self
    }

    pub fn with_corpus_dirs(mut self, dirs: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.corpus_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_render(mut self, render: bool) -> Self {
        self.render = render;
        self
    }
}
