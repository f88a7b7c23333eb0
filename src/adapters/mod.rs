// Adapters layer: concrete EntityStore backends.

pub mod file_store;
pub mod memory_store;

pub use file_store::JsonFileStore;
pub use memory_store::MemoryStore;

use crate::domain::model::{Job, JobId};
use crate::utils::error::{JobError, Result};
use std::collections::HashSet;

pub(crate) fn stage_insert(records: &mut Vec<Job>, job: &Job) -> Result<()> {
    if records.iter().any(|existing| existing.id() == job.id()) {
        return Err(JobError::storage(format!(
            "record {} already exists",
            job.id()
        )));
    }
    records.push(job.clone());
    Ok(())
}

pub(crate) fn stage_delete(records: &mut Vec<Job>, id: &JobId) -> Result<()> {
    let index = records
        .iter()
        .position(|job| job.id() == *id)
        .ok_or_else(|| JobError::storage(format!("record {} not found", id)))?;
    records.remove(index);
    Ok(())
}

pub(crate) fn ensure_unique_ids(records: &[Job]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for job in records {
        if !seen.insert(job.id()) {
            return Err(JobError::storage(format!(
                "duplicate record id {}",
                job.id()
            )));
        }
    }
    Ok(())
}
