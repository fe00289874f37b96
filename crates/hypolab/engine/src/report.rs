//! Result records produced by one engine invocation.
//!
//! Ordering is part of the contract: examples ascend by index and hypothesis
//! outcomes keep the set's order, so records use arrays rather than maps.

use crate::transformation::{Gate, ValidationRun};
use hypolab_types::{
    CandidateId, Comparison, IterationKind, PredicateOutcome, RenderableExample, Split,
};
use serde::{Deserialize, Serialize};

/// One hypothesis outcome within an example record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedOutcome {
    pub hypothesis: String,
    #[serde(flatten)]
    pub outcome: PredicateOutcome,
}

/// Outcomes of every hypothesis on one example.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HypothesisRecord {
    pub example_index: usize,
    pub outcomes: Vec<NamedOutcome>,
}

impl HypothesisRecord {
    pub fn outcome(&self, hypothesis: &str) -> Option<&PredicateOutcome> {
        self.outcomes
            .iter()
            .find(|o| o.hypothesis == hypothesis)
            .map(|o| &o.outcome)
    }
}

/// Persisted result of a hypothesis-set iteration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HypothesisReport {
    pub task_id: String,
    pub iteration: u32,
    pub corpus_digest: String,
    pub hypotheses: Vec<String>,
    pub examples: Vec<HypothesisRecord>,
}

impl HypothesisReport {
    pub fn new(
        task_id: impl Into<String>,
        iteration: u32,
        corpus_digest: impl Into<String>,
        hypotheses: Vec<String>,
        examples: Vec<HypothesisRecord>,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            iteration,
            corpus_digest: corpus_digest.into(),
            hypotheses,
            examples,
        }
    }

    pub fn candidate_id(&self) -> CandidateId {
        CandidateId::new(&self.task_id, self.iteration, IterationKind::HypothesisSet)
    }

    fn outcomes(&self) -> impl Iterator<Item = &PredicateOutcome> {
        self.examples
            .iter()
            .flat_map(|e| e.outcomes.iter().map(|o| &o.outcome))
    }

    pub fn pass_count(&self) -> usize {
        self.outcomes().filter(|o| o.is_pass()).count()
    }

    pub fn error_count(&self) -> usize {
        self.outcomes().filter(|o| o.is_error()).count()
    }

    /// Hypotheses that passed on every example.
    pub fn consistent_hypotheses(&self) -> Vec<&str> {
        self.hypotheses
            .iter()
            .filter(|h| {
                !self.examples.is_empty()
                    && self
                        .examples
                        .iter()
                        .all(|e| e.outcome(h).is_some_and(PredicateOutcome::is_pass))
            })
            .map(String::as_str)
            .collect()
    }
}

/// What happened to one example during transformation validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExampleResult {
    Compared(Comparison),
    /// The transform faulted on this example.
    TransformFault { message: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExampleRecord {
    pub split: Split,
    pub index: usize,
    pub result: ExampleResult,
}

impl ExampleRecord {
    pub fn comparison(&self) -> Option<&Comparison> {
        match &self.result {
            ExampleResult::Compared(c) => Some(c),
            ExampleResult::TransformFault { .. } => None,
        }
    }

    pub fn is_exact_match(&self) -> bool {
        self.comparison().is_some_and(|c| c.verdict.is_exact_match())
    }

    pub fn renderable(&self) -> Option<RenderableExample> {
        self.comparison()
            .map(|c| RenderableExample::from_comparison(c, self.split, self.index))
    }
}

/// Persisted result of a transformation iteration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformationReport {
    pub task_id: String,
    pub iteration: u32,
    pub corpus_digest: String,
    pub transform: String,
    pub gate: Gate,
    pub all_train_passed: bool,
    pub examples: Vec<ExampleRecord>,
}

impl TransformationReport {
    pub fn new(
        task_id: impl Into<String>,
        iteration: u32,
        corpus_digest: impl Into<String>,
        transform: impl Into<String>,
        run: ValidationRun,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            iteration,
            corpus_digest: corpus_digest.into(),
            transform: transform.into(),
            gate: run.gate,
            all_train_passed: run.gate == Gate::AllTrainPassed,
            examples: run.examples,
        }
    }

    pub fn candidate_id(&self) -> CandidateId {
        CandidateId::new(&self.task_id, self.iteration, IterationKind::Transformation)
    }

    pub fn records(&self, split: Split) -> impl Iterator<Item = &ExampleRecord> {
        self.examples.iter().filter(move |e| e.split == split)
    }

    /// Train examples that were not exact matches.
    pub fn failing_train(&self) -> usize {
        self.records(Split::Train)
            .filter(|e| !e.is_exact_match())
            .count()
    }

    pub fn renderables(&self) -> Vec<RenderableExample> {
        self.examples
            .iter()
            .filter_map(ExampleRecord::renderable)
            .collect()
    }
}
