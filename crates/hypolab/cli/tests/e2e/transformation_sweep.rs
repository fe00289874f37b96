//! End-to-end transformation sweeps: gate outcome, persisted documents and
//! render hand-off.

use crate::fixture::{rotation_task, Fixture};
use hypolab_cli::{IterationStatus, SweepFilter};
use hypolab_engine::{ExampleResult, Gate, ResultStore};
use hypolab_library::builtin_registry;
use hypolab_types::{ComparisonVerdict, Position, Split};
use serde_json::json;

#[test]
fn rotation_passes_train_and_evaluates_test() {
    let f = Fixture::new();
    f.task("6150a2bd", rotation_task(json!([[2, 0], [0, 1]])))
        .artifact("6150a2bd", "2_transformation.toml", r#"transform = "rotate_180""#);

    let mut orchestrator = f.orchestrator(builtin_registry());
    let report = orchestrator.run(&SweepFilter::all()).unwrap();

    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(
        report.outcomes[0].status,
        IterationStatus::TrainPassed { test_examples: 1 }
    );

    let stored = ResultStore::new(f.hypotheses_root())
        .load_transformation("6150a2bd", 2)
        .unwrap()
        .unwrap();
    assert_eq!(stored.gate, Gate::AllTrainPassed);
    assert!(stored.all_train_passed);
    assert_eq!(stored.transform, "rotate_180");
    let test: Vec<_> = stored.records(Split::Test).collect();
    assert_eq!(test.len(), 1);
    assert!(test[0].is_exact_match());

    let sink = orchestrator.into_sink();
    assert_eq!(sink.batches.len(), 1);
    assert_eq!(sink.total(), 2);
}

#[test]
fn wrong_expectation_fails_train_and_skips_test() {
    let f = Fixture::new();
    f.task("6150a2bd", rotation_task(json!([[9, 0], [0, 1]])))
        .artifact("6150a2bd", "2_transformation.toml", r#"transform = "rotate_180""#);

    let report = f
        .orchestrator(builtin_registry())
        .run(&SweepFilter::all())
        .unwrap();
    assert_eq!(
        report.outcomes[0].status,
        IterationStatus::TrainFailed { failing: 1 }
    );

    let stored = ResultStore::new(f.hypotheses_root())
        .load_transformation("6150a2bd", 2)
        .unwrap()
        .unwrap();
    assert_eq!(stored.gate, Gate::TrainFailed);
    assert_eq!(stored.records(Split::Test).count(), 0);
    match &stored.examples[0].result {
        ExampleResult::Compared(c) => match &c.verdict {
            ComparisonVerdict::CellMismatch {
                differences,
                match_percentage,
            } => {
                assert_eq!(differences, &vec![Position::new(0, 0)]);
                assert_eq!(*match_percentage, 75.0);
            }
            other => panic!("unexpected verdict {other:?}"),
        },
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn faulting_transform_forces_train_failure() {
    let f = Fixture::new();
    f.task(
        "29c11459",
        json!({
            "train": [
                { "input": [[1, 0, 2]], "output": [[1, 1, 1, 1, 1, 5, 2, 2, 2, 2, 2]] },
                { "input": [[1, 2, 3]], "output": [[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]] }
            ],
            "test": [ { "input": [[4, 0, 6]] } ]
        }),
    )
    .artifact(
        "29c11459",
        "3_transformation.toml",
        r#"transform = "segmented_row_reconstruction""#,
    );

    let report = f
        .orchestrator(builtin_registry())
        .run(&SweepFilter::all())
        .unwrap();
    assert_eq!(
        report.outcomes[0].status,
        IterationStatus::TrainFailed { failing: 1 }
    );

    let doc = Fixture::read_json(&f.results("29c11459", "3_transformation_results.json"));
    assert_eq!(doc["gate"], "train_failed");
    assert_eq!(doc["examples"].as_array().unwrap().len(), 2);
    assert_eq!(doc["examples"][0]["result"]["verdict"]["verdict"], "exact_match");
    assert_eq!(doc["examples"][1]["result"]["kind"], "transform_fault");
    assert_eq!(
        doc["examples"][1]["result"]["message"],
        "Row 0: unsupported number of non-background colors (3)"
    );
}

#[test]
fn unregistered_entry_point_aborts_before_any_example() {
    let f = Fixture::new();
    f.task("6150a2bd", rotation_task(json!([[2, 0], [0, 1]])))
        .artifact("6150a2bd", "2_transformation.toml", r#"transform = "spin""#);

    let report = f
        .orchestrator(builtin_registry())
        .run(&SweepFilter::all())
        .unwrap();
    match &report.outcomes[0].status {
        IterationStatus::Failed { kind, message } => {
            assert_eq!(kind, "entry_point_missing");
            assert!(message.contains("spin"));
        }
        other => panic!("unexpected status {other:?}"),
    }
    assert!(report.outcomes[0].results_path.is_none());
    assert!(!f.results("6150a2bd", "2_transformation_results.json").exists());
}

#[test]
fn render_can_be_disabled() {
    let f = Fixture::new();
    f.task("6150a2bd", rotation_task(json!([[2, 0], [0, 1]])))
        .artifact("6150a2bd", "2_transformation.toml", r#"transform = "rotate_180""#);

    let mut orchestrator = hypolab_cli::Orchestrator::new(
        f.config().with_render(false),
        std::sync::Arc::new(builtin_registry()),
        hypolab_engine::CollectingSink::new(),
    );
    orchestrator.run(&SweepFilter::all()).unwrap();
    assert!(orchestrator.sink().batches.is_empty());
}
