//! Hypothesis evaluation engine.

use crate::isolate::isolate;
use crate::report::{HypothesisRecord, NamedOutcome};
use hypolab_candidates::HypothesisSet;
use hypolab_types::{Example, PredicateOutcome};
use tracing::error;

/// Apply every hypothesis to every example.
///
/// Records ascend by example index; within a record, outcomes follow the
/// set's order. A faulting hypothesis is recorded as `Error` for that cell
/// only and never stops the remaining evaluations.
pub fn evaluate_hypotheses(hypotheses: &HypothesisSet, examples: &[Example]) -> Vec<HypothesisRecord> {
    examples
        .iter()
        .enumerate()
        .map(|(example_index, example)| {
            let outcomes = hypotheses
                .iter()
                .map(|(name, hypothesis)| {
                    let outcome = match &example.output {
                        Some(output) => {
                            match isolate(|| hypothesis.check(&example.input, output)) {
                                Ok(check) => PredicateOutcome::from(check),
                                Err(message) => {
                                    error!(
                                        hypothesis = name,
                                        example = example_index,
                                        error = %message,
                                        "hypothesis faulted"
                                    );
                                    PredicateOutcome::Error { message }
                                }
                            }
                        }
                        None => PredicateOutcome::error("example has no expected output"),
                    };
                    NamedOutcome {
                        hypothesis: name.to_string(),
                        outcome,
                    }
                })
                .collect();
            HypothesisRecord {
                example_index,
                outcomes,
            }
        })
        .collect()
}
