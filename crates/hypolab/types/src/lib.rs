#![deny(unsafe_code)]
//! # hypolab-types
//!
//! Shared vocabulary for the hypothesis lab.
//!
//! ## Key Types
//!
//! - [`Grid`] — Immutable rectangular matrix of color codes (value identity)
//! - [`Example`] / [`TaskCorpus`] — Stored input/expected-output pairs, split into train and test
//! - [`CandidateId`] / [`IterationKind`] — Identity of a versioned candidate artifact
//! - [`PredicateOutcome`] — Normalized result of one hypothesis on one example
//! - [`ComparisonVerdict`] / [`Comparison`] — Produced-vs-expected classification
//! - [`RenderableExample`] — Record handed to external rendering sinks

pub mod candidate;
pub mod color;
pub mod error;
pub mod example;
pub mod grid;
pub mod outcome;
pub mod verdict;

pub use candidate::{CandidateId, IterationKind};
pub use color::{color_name, describe_cell, palette_rgb, MAX_COLOR, MISSING};
pub use error::GridError;
pub use example::{Example, Split, TaskCorpus};
pub use grid::{Grid, Position, Shape};
pub use outcome::{Check, PredicateOutcome};
pub use verdict::{Comparison, ComparisonVerdict, RenderableExample};
