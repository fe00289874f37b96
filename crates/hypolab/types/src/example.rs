use crate::grid::Grid;
use serde::{Deserialize, Serialize};

/// Which partition of a task an example belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Test,
}

impl Split {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Test => "test",
        }
    }

    /// Label used in reports and render titles.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Train => "Training",
            Self::Test => "Test",
        }
    }
}

impl std::fmt::Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Split {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "train" => Ok(Self::Train),
            "test" => Ok(Self::Test),
            other => Err(format!("unknown split '{}' (expected train or test)", other)),
        }
    }
}

/// One input / expected-output pair.
///
/// `output` is absent only for test examples without ground truth.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub input: Grid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Grid>,
}

impl Example {
    pub fn new(input: Grid, output: Grid) -> Self {
        Self {
            input,
            output: Some(output),
        }
    }

    pub fn without_output(input: Grid) -> Self {
        Self {
            input,
            output: None,
        }
    }
}

/// A task's stored examples, read fresh for every run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskCorpus {
    pub task_id: String,
    pub train: Vec<Example>,
    pub test: Vec<Example>,
    /// Content digest of the backing record.
    pub digest: String,
}

impl TaskCorpus {
    pub fn new(task_id: impl Into<String>, train: Vec<Example>, test: Vec<Example>) -> Self {
        Self {
            task_id: task_id.into(),
            train,
            test,
            digest: String::new(),
        }
    }

    pub fn with_digest(mut self, digest: impl Into<String>) -> Self {
        self.digest = digest.into();
        self
    }

    pub fn split(&self, split: Split) -> &[Example] {
        match split {
            Split::Train => &self.train,
            Split::Test => &self.test,
        }
    }
}
