#![deny(unsafe_code)]
//! # hypolab-engine
//!
//! Runs candidates against a task corpus and classifies the results.
//!
//! ## Key Types
//!
//! - [`compare`] — Pure produced-vs-expected classification
//! - [`evaluate_hypotheses`] — Every hypothesis on every train example, faults isolated per cell
//! - [`validate_transformation`] — Train split first; the test split only runs once every
//!   train example is an exact match
//! - [`ResultStore`] — Atomic JSON result documents
//! - [`RenderSink`] — Hand-off point for external visualization

pub mod compare;
pub mod error;
pub mod hypothesis;
mod isolate;
pub mod render;
pub mod report;
pub mod store;
pub mod transformation;

pub use compare::{compare, compare_example};
pub use error::{RenderError, StoreError};
pub use hypothesis::evaluate_hypotheses;
pub use render::{CollectingSink, RenderSink};
pub use report::{
    ExampleRecord, ExampleResult, HypothesisRecord, HypothesisReport, NamedOutcome,
    TransformationReport,
};
pub use store::ResultStore;
pub use transformation::{validate_transformation, Gate, ValidationRun};
