//! Transformation validation engine.
//!
//! State machine:
//!
//! ```text
//! RunningTrain ─┬─> AllTrainPassed ──> RunningTest ──> Done
//!               └─> TrainFailed ─────────────────────> Done
//! ```
//!
//! The test split is only touched once every train example is an exact
//! match. Skipping it is an expected outcome, not an error.

use crate::compare::compare_example;
use crate::isolate::isolate;
use crate::report::{ExampleRecord, ExampleResult};
use hypolab_candidates::Transformation;
use hypolab_types::{describe_cell, Comparison, ComparisonVerdict, Split, TaskCorpus};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Terminal train-split gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    AllTrainPassed,
    TrainFailed,
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AllTrainPassed => write!(f, "all train passed"),
            Self::TrainFailed => write!(f, "train failed"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    RunningTrain,
    AllTrainPassed,
    TrainFailed,
    RunningTest,
    Done,
}

/// Accumulated records plus the gate, emitted on reaching `Done`.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationRun {
    pub gate: Gate,
    /// Train records, then test records if the gate opened.
    pub examples: Vec<ExampleRecord>,
}

impl ValidationRun {
    pub fn all_train_passed(&self) -> bool {
        self.gate == Gate::AllTrainPassed
    }

    pub fn records(&self, split: Split) -> impl Iterator<Item = &ExampleRecord> {
        self.examples.iter().filter(move |e| e.split == split)
    }
}

/// Validate `transform` against the corpus, gating the test split on the
/// train split.
pub fn validate_transformation(transform: &dyn Transformation, corpus: &TaskCorpus) -> ValidationRun {
    let mut examples = Vec::new();
    let mut gate = Gate::TrainFailed;
    let mut phase = Phase::RunningTrain;

    while phase != Phase::Done {
        phase = match phase {
            Phase::RunningTrain => {
                if run_split(transform, corpus, Split::Train, &mut examples) {
                    Phase::AllTrainPassed
                } else {
                    Phase::TrainFailed
                }
            }
            Phase::AllTrainPassed => {
                gate = Gate::AllTrainPassed;
                info!(task_id = %corpus.task_id, "all training examples passed, proceeding to test examples");
                Phase::RunningTest
            }
            Phase::TrainFailed => {
                gate = Gate::TrainFailed;
                info!(task_id = %corpus.task_id, "not all training examples passed, skipping test examples");
                Phase::Done
            }
            Phase::RunningTest => {
                run_split(transform, corpus, Split::Test, &mut examples);
                Phase::Done
            }
            Phase::Done => Phase::Done,
        };
    }

    ValidationRun { gate, examples }
}

/// Apply the transform to one split. Returns whether every example was an
/// exact match; a transform fault counts as a miss.
fn run_split(
    transform: &dyn Transformation,
    corpus: &TaskCorpus,
    split: Split,
    records: &mut Vec<ExampleRecord>,
) -> bool {
    let mut all_exact = true;
    for (index, example) in corpus.split(split).iter().enumerate() {
        let result = match isolate(|| transform.apply(&example.input)) {
            Ok(produced) => {
                let comparison = compare_example(&example.input, example.output.as_ref(), produced);
                log_comparison(&corpus.task_id, split, index, &comparison);
                ExampleResult::Compared(comparison)
            }
            Err(message) => {
                error!(
                    task_id = %corpus.task_id,
                    split = %split,
                    example = index,
                    error = %message,
                    "transformation faulted"
                );
                ExampleResult::TransformFault { message }
            }
        };
        let record = ExampleRecord {
            split,
            index,
            result,
        };
        all_exact &= record.is_exact_match();
        records.push(record);
    }
    all_exact
}

fn log_comparison(task_id: &str, split: Split, index: usize, comparison: &Comparison) {
    let label = split.label();
    match &comparison.verdict {
        ComparisonVerdict::NoExpectation => {
            info!(task_id, "{} example {}: no expected output provided", label, index);
        }
        ComparisonVerdict::ShapeMismatch { produced, expected } => {
            info!(
                task_id,
                "{} example {}: dimensions differ (transformed {}, expected {})",
                label,
                index,
                produced,
                expected
            );
        }
        ComparisonVerdict::CellMismatch {
            differences,
            match_percentage,
        } => {
            info!(
                task_id,
                "{} example {}: mismatch at {} cells, match {:.2}%",
                label,
                index,
                differences.len(),
                match_percentage
            );
            if let Some(expected) = &comparison.expected {
                for p in differences {
                    let produced = comparison.produced.get(p.row, p.col).unwrap_or_default();
                    let wanted = expected.get(p.row, p.col).unwrap_or_default();
                    debug!(
                        "  at {}: transformed = {}, expected = {}",
                        p,
                        describe_cell(produced),
                        describe_cell(wanted)
                    );
                }
            }
        }
        ComparisonVerdict::ExactMatch => {
            info!(task_id, "{} example {}: transformed correctly", label, index);
        }
    }
}
