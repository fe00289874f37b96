use serde::{Deserialize, Serialize};

/// Normalized return value of a hypothesis.
///
/// Hypotheses may answer with a bare boolean or a boolean plus explanation;
/// both collapse into this shape right after invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Check {
    pub holds: bool,
    pub explanation: Option<String>,
}

impl Check {
    pub fn holds() -> Self {
        Self {
            holds: true,
            explanation: None,
        }
    }

    pub fn fails(explanation: impl Into<String>) -> Self {
        Self {
            holds: false,
            explanation: Some(explanation.into()),
        }
    }
}

impl From<bool> for Check {
    fn from(holds: bool) -> Self {
        Self {
            holds,
            explanation: None,
        }
    }
}

impl From<(bool, String)> for Check {
    fn from((holds, explanation): (bool, String)) -> Self {
        Self {
            holds,
            explanation: Some(explanation),
        }
    }
}

impl From<(bool, &str)> for Check {
    fn from((holds, explanation): (bool, &str)) -> Self {
        Self::from((holds, explanation.to_string()))
    }
}

/// Outcome of one hypothesis on one example.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PredicateOutcome {
    Pass,
    Fail { explanation: String },
    /// The hypothesis itself faulted; captured rather than propagated.
    Error { message: String },
}

impl PredicateOutcome {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl From<Check> for PredicateOutcome {
    /// Explanations are kept only on failure.
    fn from(check: Check) -> Self {
        if check.holds {
            Self::Pass
        } else {
            Self::Fail {
                explanation: check.explanation.unwrap_or_default(),
            }
        }
    }
}
