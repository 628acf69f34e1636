use crate::model::ServiceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("Duplicated key `{key}` provided for {field}")]
    DuplicateKey { field: String, key: String },

    #[error("Invalid value for {field}: {reason} (got `{value}`)")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingFieldError { field: String },

    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Transport error: {message}")]
    TransportError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Unknown operation: {name}")]
    UnknownOperation { name: String },
}

/// Coarse grouping used by callers to pick a reaction (and by the CLI for
/// its exit code).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Misuse of the local API: duplicate map keys, unknown operations,
    /// undecodable documents.
    Client,
    /// A documented constraint failed the opt-in validation pass.
    Validation,
    /// The service (or the transport in front of it) rejected the call.
    Service,
    /// Configuration could not be read or is inconsistent.
    Config,
}

impl BackupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BackupError::DuplicateKey { .. }
            | BackupError::SerializationError(_)
            | BackupError::UnknownOperation { .. } => ErrorCategory::Client,
            BackupError::ValidationError { .. } | BackupError::MissingFieldError { .. } => {
                ErrorCategory::Validation
            }
            BackupError::Service(_) | BackupError::TransportError { .. } => ErrorCategory::Service,
            BackupError::IoError(_) | BackupError::ConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BackupError::DuplicateKey { .. } => {
                "Each key may be added once; use the map setter to replace the whole map"
            }
            BackupError::ValidationError { .. } | BackupError::MissingFieldError { .. } => {
                "Fix the request member named in the error, or disable validate_requests"
            }
            BackupError::Service(_) => "Check the service error code and message",
            BackupError::TransportError { .. } => "Check network access to the service endpoint",
            BackupError::SerializationError(_) => {
                "Check that the document is JSON with PascalCase member names"
            }
            BackupError::IoError(_) => "Check the file path and permissions",
            BackupError::ConfigError { .. } => "Check the TOML syntax of the configuration file",
            BackupError::UnknownOperation { .. } => {
                "Run the `operations` command to list valid names"
            }
        }
    }

    pub fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        BackupError::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BackupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_groups_local_and_remote_failures() {
        let duplicate = BackupError::DuplicateKey {
            field: "tags".to_string(),
            key: "env".to_string(),
        };
        assert_eq!(duplicate.category(), ErrorCategory::Client);

        let invalid = BackupError::invalid("max_results", 0, "Value must be between 1 and 1000");
        assert_eq!(invalid.category(), ErrorCategory::Validation);
        assert_eq!(
            invalid.to_string(),
            "Invalid value for max_results: Value must be between 1 and 1000 (got `0`)"
        );

        let transport = BackupError::TransportError {
            message: "connection reset".to_string(),
        };
        assert_eq!(transport.category(), ErrorCategory::Service);
    }
}
