#![deny(unsafe_code)]
//! # hypolab-candidates
//!
//! Candidate functions are registered against explicit capability traits
//! instead of being discovered by reflection:
//!
//! - [`Hypothesis`] — predicate over an (input, output) pair
//! - [`Transformation`] — maps an input grid to a produced grid
//!
//! A [`CandidateRegistry`] holds the compiled-in candidates by name. The
//! versioned artifacts on disk are small TOML manifests selecting registered
//! names; [`CandidateLoader`] resolves them fresh on every load so edits take
//! effect on the next run.

pub mod artifact;
pub mod error;
pub mod loader;
pub mod registry;
pub mod traits;

pub use artifact::{
    artifact_path, iterations_dir, parse_file_name, HypothesisManifest, TransformationManifest,
    ARTIFACT_EXTENSION, ITERATIONS_DIR,
};
pub use error::LoaderError;
pub use loader::{CandidateLoader, HypothesisSet, LoadedTransformation};
pub use registry::CandidateRegistry;
pub use traits::{Hypothesis, IntoCheck, IntoGrid, Transformation};
