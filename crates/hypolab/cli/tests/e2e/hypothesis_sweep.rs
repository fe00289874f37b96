//! End-to-end hypothesis sweeps: fault isolation, ordering and load-fault
//! degradation.

use crate::fixture::Fixture;
use hypolab_candidates::CandidateRegistry;
use hypolab_cli::{IterationStatus, SweepFilter};
use hypolab_engine::ResultStore;
use hypolab_library::builtin_registry;
use hypolab_types::{Grid, PredicateOutcome};
use serde_json::json;

fn indexed_corpus() -> serde_json::Value {
    let pairs: Vec<_> = (0..5)
        .map(|i| json!({ "input": [[i, 0]], "output": [[0, i]] }))
        .collect();
    json!({ "train": pairs, "test": [] })
}

fn registry() -> CandidateRegistry {
    CandidateRegistry::new()
        .with_hypothesis("mirrored", |i: &Grid, o: &Grid| i.flip_horizontal() == *o)
        .with_hypothesis("explodes_on_two", |i: &Grid, _o: &Grid| {
            if i.get(0, 0) == Some(2) {
                panic!("cannot handle color 2");
            }
            true
        })
        .with_hypothesis("same_shape", |i: &Grid, o: &Grid| {
            (i.shape() == o.shape(), "shapes differ")
        })
}

#[test]
fn faulting_hypothesis_only_affects_its_cell() {
    let f = Fixture::new();
    f.task("t", indexed_corpus()).artifact(
        "t",
        "1_hypothesis-set.toml",
        r#"hypotheses = ["mirrored", "explodes_on_two", "same_shape"]"#,
    );

    let report = f.orchestrator(registry()).run(&SweepFilter::all()).unwrap();
    assert_eq!(
        report.outcomes[0].status,
        IterationStatus::HypothesesEvaluated {
            examples: 5,
            hypotheses: 3,
            errors: 1
        }
    );

    let stored = ResultStore::new(f.hypotheses_root())
        .load_hypotheses("t", 1)
        .unwrap()
        .unwrap();
    for record in &stored.examples {
        let names: Vec<_> = record.outcomes.iter().map(|o| o.hypothesis.as_str()).collect();
        assert_eq!(names, vec!["mirrored", "explodes_on_two", "same_shape"]);
        assert_eq!(record.outcome("mirrored"), Some(&PredicateOutcome::Pass));
        assert_eq!(record.outcome("same_shape"), Some(&PredicateOutcome::Pass));
        let exploding = record.outcome("explodes_on_two").unwrap();
        if record.example_index == 2 {
            assert_eq!(
                exploding,
                &PredicateOutcome::error("panicked: cannot handle color 2")
            );
        } else {
            assert_eq!(exploding, &PredicateOutcome::Pass);
        }
    }
}

#[test]
fn repeated_runs_write_identical_documents() {
    let f = Fixture::new();
    f.task("t", indexed_corpus()).artifact(
        "t",
        "1_hypothesis-set.toml",
        r#"hypotheses = ["same_shape", "mirrored", "explodes_on_two"]"#,
    );
    let path = f.results("t", "1_hypothesis-set_results.json");

    f.orchestrator(registry()).run(&SweepFilter::all()).unwrap();
    let first = std::fs::read(&path).unwrap();
    f.orchestrator(registry()).run(&SweepFilter::all()).unwrap();
    let second = std::fs::read(&path).unwrap();
    assert_eq!(first, second);

    let doc = Fixture::read_json(&path);
    let indices: Vec<_> = doc["examples"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["example_index"].as_u64().unwrap())
        .collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    assert_eq!(doc["examples"][0]["outcomes"][0]["hypothesis"], "same_shape");
}

#[test]
fn broken_manifest_degrades_to_empty_results() {
    let f = Fixture::new();
    f.task("t", indexed_corpus()).artifact(
        "t",
        "1_hypothesis-set.toml",
        r#"hypotheses = ["mirrored", "not_registered"]"#,
    );

    let report = f.orchestrator(registry()).run(&SweepFilter::all()).unwrap();
    assert_eq!(
        report.outcomes[0].status,
        IterationStatus::HypothesesEvaluated {
            examples: 5,
            hypotheses: 0,
            errors: 0
        }
    );
    let doc = Fixture::read_json(&f.results("t", "1_hypothesis-set_results.json"));
    assert!(doc["examples"]
        .as_array()
        .unwrap()
        .iter()
        .all(|e| e["outcomes"].as_array().unwrap().is_empty()));
}

#[test]
fn builtin_segment_hypotheses_on_sample_pair() {
    let f = Fixture::new();
    let mut input = vec![vec![0; 11]; 3];
    input[1][0] = 1;
    input[1][10] = 2;
    let mut output = input.clone();
    output[1] = vec![1, 1, 1, 1, 1, 5, 2, 2, 2, 2, 2];
    f.task(
        "29c11459",
        json!({ "train": [ { "input": input, "output": output } ], "test": [] }),
    )
    .artifact(
        "29c11459",
        "1_hypothesis-set.toml",
        r#"hypotheses = [
    "segmented_row_reconstruction",
    "fixed_separator_position",
    "background_preserved",
]"#,
    );

    f.orchestrator(builtin_registry())
        .run(&SweepFilter::all())
        .unwrap();
    let stored = ResultStore::new(f.hypotheses_root())
        .load_hypotheses("29c11459", 1)
        .unwrap()
        .unwrap();
    let record = &stored.examples[0];
    assert!(record.outcome("segmented_row_reconstruction").unwrap().is_pass());
    assert!(record.outcome("fixed_separator_position").unwrap().is_pass());
    assert_eq!(
        record.outcome("background_preserved"),
        Some(&PredicateOutcome::Fail {
            explanation: "Row 1, column 1: background altered".into()
        })
    );
    assert_eq!(
        stored.consistent_hypotheses(),
        vec!["segmented_row_reconstruction", "fixed_separator_position"]
    );
}
