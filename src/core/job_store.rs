use crate::core::{EntityStore, Job};
use crate::utils::error::{JobError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_position};

/// Ordered list of jobs kept in step with its durable store.
///
/// Every mutation goes through the store first: the in-memory list only
/// changes after a successful commit, and a failed commit is rolled back in
/// the store, so memory and storage never disagree. Mutations are refused
/// until the persisted jobs have been loaded.
pub struct JobStore<S: EntityStore> {
    store: S,
    jobs: Vec<Job>,
    loaded: bool,
}

impl<S: EntityStore> JobStore<S> {
    /// Wraps `store` and loads its persisted jobs.
    pub fn open(store: S) -> Result<Self> {
        let mut job_store = Self::new(store);
        job_store.load_all()?;
        Ok(job_store)
    }

    /// Starts empty and unloaded. Reads work on the empty list, but `add`
    /// and `remove_at` fail until [`JobStore::load_all`] succeeds.
    pub fn new(store: S) -> Self {
        Self {
            store,
            jobs: Vec::new(),
            loaded: false,
        }
    }

    /// Replaces the in-memory list with the persisted one. On failure the
    /// current list is kept.
    pub fn load_all(&mut self) -> Result<&[Job]> {
        let jobs = self.store.fetch_all()?;
        tracing::debug!("Loaded {} {} record(s)", jobs.len(), self.store.entity());
        self.jobs = jobs;
        self.loaded = true;
        Ok(&self.jobs)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn ensure_loaded(&self) -> Result<()> {
        if !self.loaded {
            return Err(JobError::storage(format!(
                "{} records have not been loaded",
                self.store.entity()
            )));
        }
        Ok(())
    }

    pub fn add(&mut self, company_name: &str) -> Result<Job> {
        let company_name = validate_non_empty_string("company_name", company_name)?;
        self.ensure_loaded()?;
        let job = Job::new(company_name);

        if let Err(e) = self.store.insert(&job).and_then(|_| self.store.commit()) {
            tracing::warn!("⚠️ Rolling back add of '{}': {}", company_name, e);
            self.store.rollback();
            return Err(e);
        }

        tracing::info!("➕ Added '{}' at position {}", job.company_name(), self.jobs.len());
        self.jobs.push(job.clone());
        Ok(job)
    }

    /// Removes and returns the job at `position`; later jobs shift down by one.
    pub fn remove_at(&mut self, position: i64) -> Result<Job> {
        let index = validate_position(position, self.jobs.len())?;
        self.ensure_loaded()?;
        let id = self.jobs[index].id();

        if let Err(e) = self.store.delete(&id).and_then(|_| self.store.commit()) {
            tracing::warn!("⚠️ Rolling back removal at position {}: {}", index, e);
            self.store.rollback();
            return Err(e);
        }

        let job = self.jobs.remove(index);
        tracing::info!("➖ Removed '{}' from position {}", job.company_name(), index);
        Ok(job)
    }

    pub fn count(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn job_at(&self, position: i64) -> Result<&Job> {
        let index = validate_position(position, self.jobs.len())?;
        Ok(&self.jobs[index])
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;

    fn store_with(names: &[&str]) -> JobStore<MemoryStore> {
        let mut store = JobStore::open(MemoryStore::new(Job::ENTITY)).unwrap();
        for name in names {
            store.add(name).unwrap();
        }
        store
    }

    fn names(store: &JobStore<MemoryStore>) -> Vec<&str> {
        store.jobs().iter().map(|job| job.company_name()).collect()
    }

    #[test]
    fn test_add_appends_to_end() {
        let mut store = store_with(&["Acme"]);
        let job = store.add("Globex").unwrap();

        assert_eq!(store.count(), 2);
        assert_eq!(store.job_at(1).unwrap(), &job);
        assert_eq!(store.store().fetch_all().unwrap().len(), 2);
    }

    #[test]
    fn test_add_trims_company_name() {
        let mut store = store_with(&[]);
        store.add("  Initech \t").unwrap();
        assert_eq!(store.job_at(0).unwrap().company_name(), "Initech");
    }

    #[test]
    fn test_add_rejects_blank_names() {
        let mut store = store_with(&["Acme"]);
        for blank in ["", "   ", "\n\t"] {
            assert!(matches!(
                store.add(blank),
                Err(JobError::ValidationError { .. })
            ));
        }
        assert_eq!(store.count(), 1);
        assert!(!store.store().has_pending_changes());
    }

    #[test]
    fn test_remove_at_shifts_later_jobs() {
        let mut store = store_with(&["Acme", "Globex", "Initech", "Umbrella"]);
        let removed = store.remove_at(1).unwrap();

        assert_eq!(removed.company_name(), "Globex");
        assert_eq!(names(&store), vec!["Acme", "Initech", "Umbrella"]);
        assert_eq!(store.store().fetch_all().unwrap(), store.jobs());
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut store = store_with(&["Acme", "Globex"]);
        let len = store.count() as i64;

        for position in [len, -1, i64::MAX, i64::MIN] {
            assert!(matches!(
                store.remove_at(position),
                Err(JobError::IndexError { .. })
            ));
        }
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_job_at_out_of_range() {
        let store = store_with(&[]);
        assert!(matches!(
            store.job_at(0),
            Err(JobError::IndexError { position: 0, len: 0 })
        ));
    }

    #[test]
    fn test_failed_add_is_rolled_back() {
        let mut store = store_with(&["Acme"]);
        store.store_mut().fail_commits(true);

        assert!(store.add("Globex").unwrap_err().is_storage());
        assert_eq!(names(&store), vec!["Acme"]);
        assert!(!store.store().has_pending_changes());

        store.store_mut().fail_commits(false);
        store.add("Initech").unwrap();
        assert_eq!(store.store().fetch_all().unwrap(), store.jobs());
    }

    #[test]
    fn test_failed_remove_is_rolled_back() {
        let mut store = store_with(&["Acme", "Globex"]);
        store.store_mut().fail_commits(true);

        assert!(store.remove_at(0).unwrap_err().is_storage());
        assert_eq!(names(&store), vec!["Acme", "Globex"]);
        assert_eq!(store.store().fetch_all().unwrap().len(), 2);
        assert!(!store.store().has_pending_changes());
    }

    #[test]
    fn test_load_all_reads_committed_records() {
        let seeded = store_with(&["Acme", "Globex"]);
        let records = seeded.store().fetch_all().unwrap();

        let mut store = JobStore::new(MemoryStore::with_records(Job::ENTITY, records).unwrap());
        assert!(store.is_empty());
        assert!(!store.is_loaded());
        assert_eq!(store.load_all().unwrap().len(), 2);
        assert_eq!(names(&store), vec!["Acme", "Globex"]);
    }

    #[test]
    fn test_add_then_remove_scenario() {
        let mut store = store_with(&[]);
        store.add("Acme").unwrap();
        store.add("Globex").unwrap();
        assert_eq!(store.count(), 2);
        assert_eq!(store.job_at(0).unwrap().company_name(), "Acme");
        assert_eq!(store.job_at(1).unwrap().company_name(), "Globex");

        store.remove_at(0).unwrap();
        assert_eq!(store.count(), 1);
        assert_eq!(store.job_at(0).unwrap().company_name(), "Globex");
    }

    #[test]
    fn test_mutations_refused_until_loaded() {
        let seeded = store_with(&["Acme"]);
        let records = seeded.store().fetch_all().unwrap();

        let mut store = JobStore::new(MemoryStore::with_records(Job::ENTITY, records).unwrap());
        assert!(store.add("Globex").unwrap_err().is_storage());
        assert_eq!(store.store().fetch_all().unwrap().len(), 1);
        assert!(!store.store().has_pending_changes());

        store.load_all().unwrap();
        store.add("Globex").unwrap();
        assert_eq!(store.store().fetch_all().unwrap(), store.jobs());
    }
}
