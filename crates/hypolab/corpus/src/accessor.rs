use crate::error::CorpusError;
use crate::record;
use hypolab_types::{Example, Split, TaskCorpus};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads task records from an ordered list of corpus directories.
///
/// A record is `<dir>/<task_id>.json`; the first directory holding it wins.
#[derive(Debug, Clone)]
pub struct CorpusAccessor {
    dirs: Vec<PathBuf>,
}

impl CorpusAccessor {
    pub fn new(dirs: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Path of the record backing `task_id`, if any.
    pub fn locate(&self, task_id: &str) -> Option<PathBuf> {
        self.dirs
            .iter()
            .map(|d| d.join(format!("{}.json", task_id)))
            .find(|p| p.is_file())
    }

    /// Load both splits of a task.
    pub fn load(&self, task_id: &str) -> Result<TaskCorpus, CorpusError> {
        let path = self.locate(task_id).ok_or_else(|| CorpusError::NotFound {
            task_id: task_id.to_string(),
            searched: self.searched(),
        })?;
        Self::load_from(task_id, &path)
    }

    /// Load a single split of a task.
    pub fn load_split(&self, task_id: &str, split: Split) -> Result<Vec<Example>, CorpusError> {
        let corpus = self.load(task_id)?;
        Ok(match split {
            Split::Train => corpus.train,
            Split::Test => corpus.test,
        })
    }

    fn load_from(task_id: &str, path: &Path) -> Result<TaskCorpus, CorpusError> {
        let bytes = std::fs::read(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let (train, test) = record::parse(task_id, &bytes)?;
        let digest = blake3::hash(&bytes).to_hex().to_string();
        debug!(
            task_id,
            path = %path.display(),
            train = train.len(),
            test = test.len(),
            "loaded task corpus"
        );
        Ok(TaskCorpus::new(task_id, train, test).with_digest(digest))
    }

    fn searched(&self) -> String {
        self.dirs
            .iter()
            .map(|d| d.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
