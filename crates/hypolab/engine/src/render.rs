//! Visualization hand-off.
//!
//! The engine only produces [`RenderableExample`] records. Drawing them is
//! a collaborator's job, and a failing sink never changes a result.

use crate::error::RenderError;
use hypolab_types::RenderableExample;

/// Receives one batch per transformation iteration.
pub trait RenderSink {
    fn render(&mut self, examples: &[RenderableExample]) -> Result<(), RenderError>;
}

/// Keeps every batch in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub batches: Vec<Vec<RenderableExample>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }
}

impl RenderSink for CollectingSink {
    fn render(&mut self, examples: &[RenderableExample]) -> Result<(), RenderError> {
        self.batches.push(examples.to_vec());
        Ok(())
    }
}
