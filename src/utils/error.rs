use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Invalid record '{record}': {reason}")]
    InvalidFormat { record: String, reason: String },

    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Permission request failed: {message}")]
    PermissionError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    FileSystem,
    Platform,
    Configuration,
}

impl UtilsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            UtilsError::InvalidArgument { .. }
            | UtilsError::InvalidFormat { .. }
            | UtilsError::SerializationError(_) => ErrorCategory::Input,
            UtilsError::InvalidName { .. } | UtilsError::IoError(_) => ErrorCategory::FileSystem,
            UtilsError::PermissionError { .. } => ErrorCategory::Platform,
            UtilsError::ConfigError { .. } | UtilsError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// Short message meant for terminal output rather than logs.
    pub fn user_friendly_message(&self) -> String {
        match self {
            UtilsError::InvalidFormat { record, .. } => {
                format!("Record '{}' does not fit the selected sort mode", record)
            }
            UtilsError::InvalidName { name, .. } => {
                format!("'{}' cannot be used as a file or folder name", name)
            }
            UtilsError::IoError(e) => format!("File access failed: {}", e),
            other => other.to_string(),
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        UtilsError::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_format(record: &str, reason: impl Into<String>) -> Self {
        UtilsError::InvalidFormat {
            record: record.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, UtilsError>;
