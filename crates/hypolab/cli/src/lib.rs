#![deny(unsafe_code)]
//! # hypolab-cli
//!
//! Sweeps the hypotheses root, dispatches every iteration to the engine and
//! reports what happened.
//!
//! ## Key Types
//!
//! - [`HarnessConfig`] — Layered configuration (defaults, file, environment)
//! - [`Orchestrator`] — Discovery, ordering, filtering and dispatch
//! - [`SweepReport`] — One [`IterationOutcome`] row per dispatched iteration
//! - [`TerminalSink`] — Colored side-by-side grid rendering

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod output;
pub mod terminal;

pub use config::{HarnessConfig, LoggingConfig};
pub use error::{CliError, CliResult, ConfigError};
pub use orchestrator::{IterationOutcome, IterationStatus, Orchestrator, SweepFilter, SweepReport};
pub use output::OutputFormat;
pub use terminal::TerminalSink;
