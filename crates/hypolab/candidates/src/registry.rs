use crate::traits::{Hypothesis, Transformation};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Named, compiled-in candidate functions that artifacts can select.
#[derive(Clone, Default)]
pub struct CandidateRegistry {
    hypotheses: BTreeMap<String, Arc<dyn Hypothesis>>,
    transformations: BTreeMap<String, Arc<dyn Transformation>>,
}

impl CandidateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hypothesis. Replaces any previous entry of the same name.
    pub fn register_hypothesis(
        &mut self,
        name: impl Into<String>,
        hypothesis: impl Hypothesis + 'static,
    ) -> &mut Self {
        self.hypotheses.insert(name.into(), Arc::new(hypothesis));
        self
    }

    /// Register a transformation. Replaces any previous entry of the same name.
    pub fn register_transformation(
        &mut self,
        name: impl Into<String>,
        transformation: impl Transformation + 'static,
    ) -> &mut Self {
        self.transformations
            .insert(name.into(), Arc::new(transformation));
        self
    }

    pub fn with_hypothesis(
        mut self,
        name: impl Into<String>,
        hypothesis: impl Hypothesis + 'static,
    ) -> Self {
        self.register_hypothesis(name, hypothesis);
        self
    }

    pub fn with_transformation(
        mut self,
        name: impl Into<String>,
        transformation: impl Transformation + 'static,
    ) -> Self {
        self.register_transformation(name, transformation);
        self
    }

    pub fn hypothesis(&self, name: &str) -> Option<Arc<dyn Hypothesis>> {
        self.hypotheses.get(name).cloned()
    }

    pub fn transformation(&self, name: &str) -> Option<Arc<dyn Transformation>> {
        self.transformations.get(name).cloned()
    }

    pub fn hypothesis_names(&self) -> impl Iterator<Item = &str> {
        self.hypotheses.keys().map(String::as_str)
    }

    pub fn transformation_names(&self) -> impl Iterator<Item = &str> {
        self.transformations.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for CandidateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CandidateRegistry")
            .field("hypotheses", &self.hypotheses.keys().collect::<Vec<_>>())
            .field(
                "transformations",
                &self.transformations.keys().collect::<Vec<_>>(),
            )
            .finish()
    }
}
