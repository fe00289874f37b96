#![deny(unsafe_code)]
//! # hypolab-corpus
//!
//! Loads a task's stored examples from ARC-format JSON records.
//!
//! Every call re-reads the backing file; nothing is cached between runs.

pub mod accessor;
pub mod error;
mod record;

pub use accessor::CorpusAccessor;
pub use error::CorpusError;
