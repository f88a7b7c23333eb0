use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Index error: position {position} is out of range for {len} job(s)")]
    IndexError { position: i64, len: usize },

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Output error: {0}")]
    OutputError(#[source] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Index,
    Storage,
    Config,
    Output,
}

impl JobError {
    pub fn storage(message: impl Into<String>) -> Self {
        JobError::StorageError {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        JobError::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            JobError::ValidationError { .. } => ErrorCategory::Validation,
            JobError::IndexError { .. } => ErrorCategory::Index,
            JobError::StorageError { .. }
            | JobError::IoError(_)
            | JobError::SerializationError(_) => ErrorCategory::Storage,
            JobError::ConfigError { .. } => ErrorCategory::Config,
            JobError::OutputError(_) => ErrorCategory::Output,
        }
    }

    pub fn is_storage(&self) -> bool {
        self.category() == ErrorCategory::Storage
    }

    /// 給使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            JobError::ValidationError { message } => format!("Invalid input: {}", message),
            JobError::IndexError { position, len } if *len == 0 => {
                format!("No job at position {}: the list is empty", position)
            }
            JobError::IndexError { position, len } => format!(
                "No job at position {}: valid positions are 0 to {}",
                position,
                len - 1
            ),
            JobError::StorageError { .. }
            | JobError::IoError(_)
            | JobError::SerializationError(_) => {
                format!("Could not access saved jobs: {}", self)
            }
            JobError::ConfigError { message } => format!("Configuration problem: {}", message),
            JobError::OutputError(e) => format!(
                "Could not write the result (saved jobs are unaffected): {}",
                e
            ),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Enter a non-empty company name and try again",
            ErrorCategory::Index => "Run `list` to see the current positions",
            ErrorCategory::Storage => {
                "Check that the data directory exists, is writable and holds a valid Job.json"
            }
            ErrorCategory::Config => "Check the TOML configuration file and command line flags",
            ErrorCategory::Output => "Run `list` to confirm the current jobs",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Config => 1,
            ErrorCategory::Index => 2,
            ErrorCategory::Storage => 3,
            ErrorCategory::Output => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, JobError>;
