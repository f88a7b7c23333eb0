use crate::config::Command;
use crate::core::job_store::JobStore;
use crate::core::EntityStore;
use crate::utils::error::{JobError, Result};
use std::fmt;
use std::io::Write;

/// Loads persisted jobs before a command runs.
///
/// Read-only commands carry on with an empty list when loading fails and get
/// the error back as `Ok(Some(_))` to report. Mutating commands stop, so a
/// corrupt document is never overwritten.
pub fn prepare<S: EntityStore>(store: &mut JobStore<S>, command: &Command) -> Result<Option<JobError>> {
    match store.load_all() {
        Ok(jobs) => {
            tracing::debug!("Starting with {} job(s)", jobs.len());
            Ok(None)
        }
        Err(e) if command.is_mutating() => Err(e),
        Err(e) => {
            tracing::warn!("⚠️ Could not load saved jobs, starting empty: {}", e);
            Ok(Some(e))
        }
    }
}

// 輸出失敗與儲存失敗分開回報
fn emit<W: Write>(out: &mut W, line: fmt::Arguments<'_>) -> Result<()> {
    out.write_fmt(line)
        .and_then(|_| out.write_all(b"\n"))
        .map_err(JobError::OutputError)
}

pub fn execute<S: EntityStore, W: Write>(
    command: &Command,
    store: &mut JobStore<S>,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::List => {
            if store.is_empty() {
                emit(out, format_args!("No potential jobs yet."))?;
            }
            for (position, job) in store.jobs().iter().enumerate() {
                emit(out, format_args!("{}. {}", position, job.company_name()))?;
            }
        }
        Command::Add { company } => {
            let job = store.add(company)?;
            emit(out, format_args!("Added {}. {}", store.count() - 1, job.company_name()))?;
        }
        Command::Remove { position } => {
            let job = store.remove_at(*position)?;
            emit(out, format_args!("Removed {}", job.company_name()))?;
        }
        Command::Show { position } => {
            let job = store.job_at(*position)?;
            emit(out, format_args!("id:         {}", job.id()))?;
            emit(out, format_args!("company:    {}", job.company_name()))?;
            emit(out, format_args!("created_at: {}", job.created_at().to_rfc3339()))?;
        }
    }
    Ok(())
}
