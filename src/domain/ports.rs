use crate::domain::model::{Job, JobId};
use crate::utils::error::Result;

/// Durable storage for one entity's records.
///
/// `insert` and `delete` only stage changes; nothing is visible to
/// `fetch_all` or survives a restart until `commit` succeeds. `rollback`
/// drops whatever is staged.
pub trait EntityStore {
    fn entity(&self) -> &str;

    /// Committed records, in stored order.
    fn fetch_all(&self) -> Result<Vec<Job>>;

    fn insert(&mut self, job: &Job) -> Result<()>;

    /// Fails with a storage error if no staged record has this id.
    fn delete(&mut self, id: &JobId) -> Result<()>;

    fn commit(&mut self) -> Result<()>;

    fn rollback(&mut self);
}
