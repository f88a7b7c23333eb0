use crate::adapters::{ensure_unique_ids, stage_delete, stage_insert};
use crate::domain::model::{Job, JobId};
use crate::domain::ports::EntityStore;
use crate::utils::error::{JobError, Result};

/// Process-local store. Nothing survives the process, but staging and
/// commit behave the same as on disk.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    entity: String,
    committed: Vec<Job>,
    pending: Option<Vec<Job>>,
    fail_commits: bool,
}

impl MemoryStore {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            committed: Vec::new(),
            pending: None,
            fail_commits: false,
        }
    }

    pub fn with_records(entity: impl Into<String>, records: Vec<Job>) -> Result<Self> {
        ensure_unique_ids(&records)?;
        let mut store = Self::new(entity);
        store.committed = records;
        Ok(store)
    }

    /// While set, every `commit` fails with a storage error.
    pub fn fail_commits(&mut self, fail: bool) {
        self.fail_commits = fail;
    }

    pub fn has_pending_changes(&self) -> bool {
        self.pending.is_some()
    }

    fn pending_mut(&mut self) -> &mut Vec<Job> {
        let committed = &self.committed;
        self.pending.get_or_insert_with(|| committed.clone())
    }
}

impl EntityStore for MemoryStore {
    fn entity(&self) -> &str {
        &self.entity
    }

    fn fetch_all(&self) -> Result<Vec<Job>> {
        Ok(self.committed.clone())
    }

    fn insert(&mut self, job: &Job) -> Result<()> {
        stage_insert(self.pending_mut(), job)
    }

    fn delete(&mut self, id: &JobId) -> Result<()> {
        stage_delete(self.pending_mut(), id)
    }

    fn commit(&mut self) -> Result<()> {
        if self.fail_commits {
            return Err(JobError::storage(format!(
                "commit rejected for entity {}",
                self.entity
            )));
        }
        if let Some(records) = self.pending.take() {
            self.committed = records;
        }
        Ok(())
    }

    fn rollback(&mut self) {
        self.pending = None;
    }
}
