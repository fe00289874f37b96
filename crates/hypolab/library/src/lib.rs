#![deny(unsafe_code)]
//! # hypolab-library
//!
//! Built-in candidates for the bundled sample tasks, registered under the
//! names their manifests use.
//!
//! ## Key Functions
//!
//! - [`builtin_registry`] — Registry with every built-in candidate
//! - [`rotation`] — Task `6150a2bd` (half-turn rotation)
//! - [`segments`] — Task `29c11459` (segmented row reconstruction)

pub mod rotation;
pub mod segments;

use hypolab_candidates::CandidateRegistry;

/// Every built-in hypothesis and transformation.
pub fn builtin_registry() -> CandidateRegistry {
    let mut registry = CandidateRegistry::new();
    register_rotation(&mut registry);
    register_segments(&mut registry);
    registry
}

fn register_rotation(registry: &mut CandidateRegistry) {
    registry
        .register_hypothesis("grid_rotated_180", rotation::grid_rotated_180)
        .register_hypothesis("grid_mirrored_horizontally", rotation::grid_mirrored_horizontally)
        .register_hypothesis("grid_mirrored_vertically", rotation::grid_mirrored_vertically)
        .register_hypothesis("grid_transposed", rotation::grid_transposed)
        .register_hypothesis("grid_rotated_90_clockwise", rotation::grid_rotated_90_clockwise)
        .register_hypothesis(
            "background_positions_preserved",
            rotation::background_positions_preserved,
        )
        .register_transformation("rotate_180", rotation::rotate_180);
}

fn register_segments(registry: &mut CandidateRegistry) {
    registry
        .register_hypothesis(
            "segmented_row_reconstruction",
            segments::segmented_row_reconstruction,
        )
        .register_hypothesis("fixed_separator_position", segments::fixed_separator_position)
        .register_hypothesis("color_order_preserved", segments::color_order_preserved)
        .register_hypothesis("no_rotation_or_scaling", segments::no_rotation_or_scaling)
        .register_hypothesis("background_preserved", segments::background_preserved)
        .register_hypothesis(
            "single_separator_insertion",
            segments::single_separator_insertion,
        )
        .register_transformation("segmented_row_reconstruction", segments::reconstruct_rows);
}
