pub mod job_store;

pub use crate::domain::model::{Job, JobId};
pub use crate::domain::ports::EntityStore;
pub use crate::utils::error::Result;
