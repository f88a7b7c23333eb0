pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{JsonFileStore, MemoryStore};
pub use config::toml_config::AppConfig;
pub use core::job_store::JobStore;
pub use domain::model::{Job, JobId};
pub use domain::ports::EntityStore;
pub use utils::error::{JobError, Result};
