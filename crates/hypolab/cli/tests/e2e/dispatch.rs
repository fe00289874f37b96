//! Discovery, ordering and filtering across a multi-task hypotheses root.

use crate::fixture::{rotation_task, Fixture};
use hypolab_cli::{IterationStatus, SweepFilter};
use hypolab_library::builtin_registry;
use hypolab_types::IterationKind;
use serde_json::json;

fn populated() -> Fixture {
    let f = Fixture::new();
    f.task("6150a2bd", rotation_task(json!([[2, 0], [0, 1]])))
        .artifact("6150a2bd", "2_transformation.toml", r#"transform = "rotate_180""#)
        .artifact(
            "6150a2bd",
            "2_hypothesis-set.toml",
            r#"hypotheses = ["grid_rotated_180"]"#,
        )
        .artifact(
            "6150a2bd",
            "1_hypothesis-set.toml",
            r#"hypotheses = ["grid_mirrored_vertically", "grid_rotated_180"]"#,
        )
        .artifact("6150a2bd", "scratch.toml", "")
        .artifact("6150a2bd", "02_transformation.toml", r#"transform = "rotate_180""#)
        .artifact("6150a2bd", "4_hypotheses.py", "");
    // No corpus record for this task.
    f.artifact("00000000", "1_transformation.toml", r#"transform = "rotate_180""#);
    std::fs::create_dir_all(f.hypotheses_root().join("shared")).unwrap();
    f
}

fn rows(report: &hypolab_cli::SweepReport) -> Vec<(String, u32, IterationKind)> {
    report
        .outcomes
        .iter()
        .map(|o| (o.task_id.clone(), o.iteration, o.kind))
        .collect()
}

#[test]
fn sweep_orders_tasks_and_iterations() {
    let f = populated();
    let report = f
        .orchestrator(builtin_registry())
        .run(&SweepFilter::all())
        .unwrap();

    assert_eq!(
        rows(&report),
        vec![
            ("00000000".to_string(), 1, IterationKind::Transformation),
            ("6150a2bd".to_string(), 1, IterationKind::HypothesisSet),
            ("6150a2bd".to_string(), 2, IterationKind::HypothesisSet),
            ("6150a2bd".to_string(), 2, IterationKind::Transformation),
        ]
    );
    assert_eq!(report.skipped_tasks, vec!["shared"]);
}

#[test]
fn corpus_failure_does_not_stop_the_sweep() {
    let f = populated();
    let report = f
        .orchestrator(builtin_registry())
        .run(&SweepFilter::all())
        .unwrap();

    match &report.outcomes[0].status {
        IterationStatus::Failed { kind, .. } => assert_eq!(kind, "corpus_not_found"),
        other => panic!("unexpected status {other:?}"),
    }
    assert_eq!(report.failures().count(), 1);
    assert_eq!(
        report.outcomes[3].status,
        IterationStatus::TrainPassed { test_examples: 1 }
    );
}

#[test]
fn filters_restrict_dispatch() {
    let f = populated();

    let by_task = f
        .orchestrator(builtin_registry())
        .run(&SweepFilter::all().task("6150a2bd"))
        .unwrap();
    assert_eq!(by_task.outcomes.len(), 3);
    assert!(by_task.skipped_tasks.is_empty());

    let by_iteration = f
        .orchestrator(builtin_registry())
        .run(&SweepFilter::all().iteration(2))
        .unwrap();
    assert_eq!(
        rows(&by_iteration),
        vec![
            ("6150a2bd".to_string(), 2, IterationKind::HypothesisSet),
            ("6150a2bd".to_string(), 2, IterationKind::Transformation),
        ]
    );

    let both = f
        .orchestrator(builtin_registry())
        .run(&SweepFilter::all().task("6150a2bd").iteration(1))
        .unwrap();
    assert_eq!(
        rows(&both),
        vec![("6150a2bd".to_string(), 1, IterationKind::HypothesisSet)]
    );

    let unknown = f
        .orchestrator(builtin_registry())
        .run(&SweepFilter::all().task("ffffffff"))
        .unwrap();
    assert!(unknown.outcomes.is_empty());
}

#[test]
fn each_run_writes_its_own_document() {
    let f = populated();
    f.orchestrator(builtin_registry())
        .run(&SweepFilter::all())
        .unwrap();
    for name in [
        "1_hypothesis-set_results.json",
        "2_hypothesis-set_results.json",
        "2_transformation_results.json",
    ] {
        assert!(f.results("6150a2bd", name).is_file(), "{name} missing");
    }
    assert!(!f.hypotheses_root().join("00000000/results").exists());
}

#[test]
fn unlistable_iterations_do_not_stop_later_tasks() {
    let f = populated();
    // An `iterations` entry that is not a directory cannot be listed.
    let broken = f.hypotheses_root().join("00000001");
    std::fs::create_dir_all(&broken).unwrap();
    std::fs::write(broken.join("iterations"), "").unwrap();

    let report = f
        .orchestrator(builtin_registry())
        .run(&SweepFilter::all())
        .unwrap();
    assert_eq!(report.skipped_tasks, vec!["00000001", "shared"]);
    assert_eq!(report.outcomes.len(), 4);
    assert_eq!(
        report.outcomes[3].status,
        IterationStatus::TrainPassed { test_examples: 1 }
    );
}
