use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier of a [`Job`], assigned once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A potential employer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    id: JobId,
    #[serde(rename = "name")]
    company_name: String,
    created_at: DateTime<Utc>,
}

impl Job {
    /// Entity name the durable store keys job records under.
    pub const ENTITY: &'static str = "Job";

    /// `company_name` must already be validated and trimmed.
    pub(crate) fn new(company_name: impl Into<String>) -> Self {
        Self {
            id: JobId::new(),
            company_name: company_name.into(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> JobId {
        self.id
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
