//! Temporary hypotheses root plus corpus directory.

use hypolab_candidates::{iterations_dir, CandidateRegistry};
use hypolab_cli::{HarnessConfig, Orchestrator};
use hypolab_engine::CollectingSink;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct Fixture {
    dir: tempfile::TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("model_hypotheses")).unwrap();
        std::fs::create_dir_all(dir.path().join("data/training")).unwrap();
        Self { dir }
    }

    pub fn hypotheses_root(&self) -> PathBuf {
        self.dir.path().join("model_hypotheses")
    }

    pub fn corpus_dir(&self) -> PathBuf {
        self.dir.path().join("data/training")
    }

    pub fn config(&self) -> HarnessConfig {
        HarnessConfig::default()
            .with_hypotheses_root(self.hypotheses_root())
            .with_corpus_dirs([self.corpus_dir()])
    }

    /// Write an ARC task record.
    pub fn task(&self, task_id: &str, record: serde_json::Value) -> &Self {
        std::fs::write(
            self.corpus_dir().join(format!("{}.json", task_id)),
            serde_json::to_vec_pretty(&record).unwrap(),
        )
        .unwrap();
        self
    }

    /// Write a candidate manifest under `<task>/iterations/`.
    pub fn artifact(&self, task_id: &str, file_name: &str, body: &str) -> &Self {
        let dir = iterations_dir(&self.hypotheses_root(), task_id);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(file_name), body).unwrap();
        self
    }

    pub fn orchestrator(&self, registry: CandidateRegistry) -> Orchestrator<CollectingSink> {
        Orchestrator::new(self.config(), Arc::new(registry), CollectingSink::new())
    }

    pub fn results(&self, task_id: &str, file_name: &str) -> PathBuf {
        self.hypotheses_root()
            .join(task_id)
            .join("results")
            .join(file_name)
    }

    pub fn read_json(path: &Path) -> serde_json::Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }
}

/// Task `6150a2bd` reduced to one train and one test pair.
pub fn rotation_task(train_expected: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "train": [
            { "input": [[1, 0], [0, 2]], "output": train_expected }
        ],
        "test": [
            { "input": [[3, 0], [0, 4]], "output": [[4, 0], [0, 3]] }
        ]
    })
}
