//! Iteration discovery and dispatch.
//!
//! Walks `<hypotheses_root>/<task>/iterations/`, orders candidates by
//! iteration number (hypothesis sets before transformations on ties) and
//! runs each one. Every failure below this level becomes an
//! [`IterationStatus::Failed`] row; only an unreadable hypotheses root stops
//! the sweep.

use crate::config::HarnessConfig;
use crate::error::{CliError, CliResult};
use hypolab_candidates::{iterations_dir, parse_file_name, CandidateLoader, CandidateRegistry};
use hypolab_corpus::CorpusAccessor;
use hypolab_engine::{
    evaluate_hypotheses, validate_transformation, HypothesisReport, RenderSink, ResultStore,
    StoreError, TransformationReport,
};
use hypolab_types::{CandidateId, IterationKind, Split, TaskCorpus};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Optional restrictions applied before dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepFilter {
    pub task_id: Option<String>,
    pub iteration: Option<u32>,
}

impl SweepFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn task(mut self, task_id: impl Into<String>) -> Self {
        self.task_id = Some(task_id.into());
        self
    }

    pub fn iteration(mut self, iteration: u32) -> Self {
        self.iteration = Some(iteration);
        self
    }

    fn admits_task(&self, task_id: &str) -> bool {
        self.task_id.as_deref().map_or(true, |t| t == task_id)
    }

    fn admits_iteration(&self, iteration: u32) -> bool {
        self.iteration.map_or(true, |n| n == iteration)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IterationStatus {
    HypothesesEvaluated {
        examples: usize,
        hypotheses: usize,
        errors: usize,
    },
    TrainPassed {
        test_examples: usize,
    },
    TrainFailed {
        failing: usize,
    },
    /// The iteration could not run; `kind` classifies the failure.
    Failed {
        #[serde(rename = "failure_kind")]
        kind: String,
        message: String,
    },
}

impl IterationStatus {
    fn failed(kind: &str, message: impl std::fmt::Display) -> Self {
        Self::Failed {
            kind: kind.to_string(),
            message: message.to_string(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// One dispatched iteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationOutcome {
    pub task_id: String,
    pub iteration: u32,
    pub kind: IterationKind,
    #[serde(flatten)]
    pub status: IterationStatus,
    /// Where the result document landed, when it was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepReport {
    pub outcomes: Vec<IterationOutcome>,
    /// Tasks without a readable iterations directory.
    pub skipped_tasks: Vec<String>,
}

impl SweepReport {
    pub fn failures(&self) -> impl Iterator<Item = &IterationOutcome> {
        self.outcomes.iter().filter(|o| o.status.is_failed())
    }
}

/// Runs candidates found under the hypotheses root.
pub struct Orchestrator<S> {
    config: HarnessConfig,
    loader: CandidateLoader,
    accessor: CorpusAccessor,
    store: ResultStore,
    sink: S,
}

impl<S: RenderSink> Orchestrator<S> {
    pub fn new(config: HarnessConfig, registry: Arc<CandidateRegistry>, sink: S) -> Self {
        let loader = CandidateLoader::new(&config.hypotheses_root, registry);
        let accessor = CorpusAccessor::new(config.corpus_dirs.iter().cloned());
        let store = ResultStore::new(&config.hypotheses_root);
        Self {
            config,
            loader,
            accessor,
            store,
            sink,
        }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Task directories under the hypotheses root, sorted by name.
    ///
    /// Entries that cannot be inspected or whose names are not UTF-8 are
    /// logged and left out.
    pub fn task_ids(&self) -> CliResult<Vec<String>> {
        let root = &self.config.hypotheses_root;
        if !root.is_dir() {
            return Err(CliError::MissingRoot(root.clone()));
        }
        let entries = std::fs::read_dir(root).map_err(|source| CliError::Io {
            path: root.clone(),
            source,
        })?;
        let mut tasks = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(root = %root.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.path().is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => tasks.push(name),
                Err(raw) => warn!(name = ?raw, "skipping task directory with non-UTF-8 name"),
            }
        }
        tasks.sort();
        Ok(tasks)
    }

    /// Candidates of a task ordered by (iteration, kind). `None` when the
    /// task has no iterations directory.
    pub fn candidates(&self, task_id: &str) -> CliResult<Option<Vec<CandidateId>>> {
        let dir = iterations_dir(&self.config.hypotheses_root, task_id);
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(CliError::Io { path: dir, source }),
        };

        let mut candidates = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(task_id, error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.path().is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy().into_owned();
            match parse_file_name(task_id, &file_name) {
                Some(id) => candidates.push(id),
                None => warn!(task_id, file = %file_name, "skipping unrecognized file"),
            }
        }
        candidates.sort_by_key(|c| (c.iteration, c.kind));
        Ok(Some(candidates))
    }

    /// Run every admitted iteration of every admitted task.
    ///
    /// A task whose iterations cannot be listed is logged and skipped; the
    /// remaining tasks still run.
    pub fn run(&mut self, filter: &SweepFilter) -> CliResult<SweepReport> {
        let mut report = SweepReport::default();
        let mut matched_task = false;
        for task_id in self.task_ids()? {
            if !filter.admits_task(&task_id) {
                continue;
            }
            matched_task = true;
            let candidates = match self.candidates(&task_id) {
                Ok(Some(candidates)) => candidates,
                Ok(None) => {
                    warn!(task_id = %task_id, "no iterations directory, skipping");
                    report.skipped_tasks.push(task_id);
                    continue;
                }
                Err(e) => {
                    error!(task_id = %task_id, error = %e, "cannot list iterations, skipping");
                    report.skipped_tasks.push(task_id);
                    continue;
                }
            };
            for id in candidates {
                if filter.admits_iteration(id.iteration) {
                    report.outcomes.push(self.run_iteration(&id));
                }
            }
        }
        if let (false, Some(task_id)) = (matched_task, &filter.task_id) {
            warn!(
                task_id = %task_id,
                root = %self.config.hypotheses_root.display(),
                "no task directory matches the task filter"
            );
        }
        Ok(report)
    }

    /// Run a single iteration.
    pub fn run_iteration(&mut self, id: &CandidateId) -> IterationOutcome {
        info!(task_id = %id.task_id, iteration = id.iteration, kind = %id.kind, "processing iteration");
        let (status, results_path) = match id.kind {
            IterationKind::HypothesisSet => self.run_hypotheses(id),
            IterationKind::Transformation => self.run_transformation(id),
        };
        match &status {
            IterationStatus::Failed { kind, message } => {
                error!(candidate = %id, kind = %kind, "{}", message);
            }
            other => debug!(candidate = %id, status = ?other, "iteration finished"),
        }
        IterationOutcome {
            task_id: id.task_id.clone(),
            iteration: id.iteration,
            kind: id.kind,
            status,
            results_path,
        }
    }

    fn load_corpus(&self, id: &CandidateId) -> Result<TaskCorpus, IterationStatus> {
        self.accessor
            .load(&id.task_id)
            .map_err(|e| IterationStatus::failed(e.kind(), e))
    }

    fn run_hypotheses(&mut self, id: &CandidateId) -> (IterationStatus, Option<PathBuf>) {
        let corpus = match self.load_corpus(id) {
            Ok(corpus) => corpus,
            Err(status) => return (status, None),
        };
        let set = match self.loader.load_hypotheses(&id.task_id, id.iteration) {
            Ok(set) => set,
            Err(e) => return (IterationStatus::failed(e.kind(), e), None),
        };

        let records = evaluate_hypotheses(&set, &corpus.train);
        let report = HypothesisReport::new(
            &id.task_id,
            id.iteration,
            &corpus.digest,
            set.names().into_iter().map(String::from).collect(),
            records,
        );
        info!(
            candidate = %id,
            passes = report.pass_count(),
            errors = report.error_count(),
            consistent = ?report.consistent_hypotheses(),
            "hypotheses evaluated"
        );

        let status = IterationStatus::HypothesesEvaluated {
            examples: report.examples.len(),
            hypotheses: report.hypotheses.len(),
            errors: report.error_count(),
        };
        (status, self.persist(id, |store| store.save_hypotheses(&report)))
    }

    fn run_transformation(&mut self, id: &CandidateId) -> (IterationStatus, Option<PathBuf>) {
        let corpus = match self.load_corpus(id) {
            Ok(corpus) => corpus,
            Err(status) => return (status, None),
        };
        let loaded = match self.loader.load_transformation(&id.task_id, id.iteration) {
            Ok(loaded) => loaded,
            Err(e) => return (IterationStatus::failed(e.kind(), e), None),
        };

        let run = validate_transformation(loaded.transform.as_ref(), &corpus);
        let report =
            TransformationReport::new(&id.task_id, id.iteration, &corpus.digest, loaded.name, run);
        info!(candidate = %id, gate = %report.gate, "transformation validated");

        let status = if report.all_train_passed {
            IterationStatus::TrainPassed {
                test_examples: report.records(Split::Test).count(),
            }
        } else {
            IterationStatus::TrainFailed {
                failing: report.failing_train(),
            }
        };
        let path = self.persist(id, |store| store.save_transformation(&report));

        if self.config.render {
            if let Err(e) = self.sink.render(&report.renderables()) {
                error!(candidate = %id, error = %e, "render failed");
            }
        }
        (status, path)
    }

    fn persist(
        &self,
        id: &CandidateId,
        save: impl FnOnce(&ResultStore) -> Result<PathBuf, StoreError>,
    ) -> Option<PathBuf> {
        match save(&self.store) {
            Ok(path) => Some(path),
            Err(e) => {
                error!(candidate = %id, error = %e, "failed to save results");
                None
            }
        }
    }
}
