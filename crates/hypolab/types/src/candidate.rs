use serde::{Deserialize, Serialize};

/// The two shapes a candidate artifact can take.
///
/// Ordering places hypothesis sets before transformations so iterations that
/// share a number run in a stable order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IterationKind {
    HypothesisSet,
    Transformation,
}

impl IterationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HypothesisSet => "hypothesis-set",
            Self::Transformation => "transformation",
        }
    }
}

impl std::fmt::Display for IterationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IterationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hypothesis-set" => Ok(Self::HypothesisSet),
            "transformation" => Ok(Self::Transformation),
            other => Err(format!("unknown iteration kind '{}'", other)),
        }
    }
}

/// Identity of one versioned candidate artifact.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId {
    pub task_id: String,
    /// Positive iteration number.
    pub iteration: u32,
    pub kind: IterationKind,
}

impl CandidateId {
    pub fn new(task_id: impl Into<String>, iteration: u32, kind: IterationKind) -> Self {
        Self {
            task_id: task_id.into(),
            iteration,
            kind,
        }
    }

    /// File stem of the artifact, e.g. `3_transformation`.
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.iteration, self.kind)
    }
}

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{} ({})", self.task_id, self.iteration, self.kind)
    }
}
