//! Persistence and render failures are logged only: the computed status
//! survives and the sweep carries on.

use crate::fixture::{rotation_task, Fixture};
use hypolab_cli::{IterationStatus, Orchestrator, SweepFilter};
use hypolab_engine::{RenderError, RenderSink};
use hypolab_library::builtin_registry;
use hypolab_types::RenderableExample;
use serde_json::json;
use std::sync::Arc;

/// Sink that refuses every batch but counts the attempts.
#[derive(Default)]
struct RefusingSink {
    attempts: usize,
}

impl RenderSink for RefusingSink {
    fn render(&mut self, _examples: &[RenderableExample]) -> Result<(), RenderError> {
        self.attempts += 1;
        Err(RenderError::Sink("display unavailable".into()))
    }
}

fn rotation_fixture() -> Fixture {
    let f = Fixture::new();
    f.task("6150a2bd", rotation_task(json!([[2, 0], [0, 1]])))
        .artifact(
            "6150a2bd",
            "1_hypothesis-set.toml",
            r#"hypotheses = ["grid_rotated_180"]"#,
        )
        .artifact("6150a2bd", "2_transformation.toml", r#"transform = "rotate_180""#);
    f
}

#[test]
fn unwritable_results_keep_the_computed_status() {
    let f = rotation_fixture();
    // A plain file where the results directory should go.
    std::fs::write(f.hypotheses_root().join("6150a2bd").join("results"), "").unwrap();

    let report = f
        .orchestrator(builtin_registry())
        .run(&SweepFilter::all())
        .unwrap();

    assert_eq!(report.outcomes.len(), 2);
    assert_eq!(
        report.outcomes[0].status,
        IterationStatus::HypothesesEvaluated {
            examples: 1,
            hypotheses: 1,
            errors: 0
        }
    );
    assert_eq!(
        report.outcomes[1].status,
        IterationStatus::TrainPassed { test_examples: 1 }
    );
    assert!(report.outcomes.iter().all(|o| o.results_path.is_none()));
    assert_eq!(report.failures().count(), 0);
}

#[test]
fn failing_render_sink_does_not_change_results() {
    let f = rotation_fixture();
    let mut orchestrator = Orchestrator::new(
        f.config(),
        Arc::new(builtin_registry()),
        RefusingSink::default(),
    );

    let report = orchestrator.run(&SweepFilter::all()).unwrap();

    assert_eq!(orchestrator.sink().attempts, 1);
    assert_eq!(
        report.outcomes[1].status,
        IterationStatus::TrainPassed { test_examples: 1 }
    );
    let path = f.results("6150a2bd", "2_transformation_results.json");
    assert_eq!(report.outcomes[1].results_path.as_deref(), Some(path.as_path()));
    assert_eq!(Fixture::read_json(&path)["gate"], "all_train_passed");
}
