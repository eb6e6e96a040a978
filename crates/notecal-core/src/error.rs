//! Error types and exit codes for notecal
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, generator transport)
//! - 2: Usage error (bad flags/args, invalid values)
//! - 3: Data error (missing daily note, unusable model response)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the notecal CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing note, invalid response (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors raised by the collaborators around the pure core.
///
/// The sanitizers, parser and cache operations never produce these; they
/// filter or return `None` instead.
#[derive(Error, Debug)]
pub enum NotecalError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("unusable model response: {0}")]
    InvalidResponse(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("generator request failed: {0}")]
    Generator(String),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl From<ureq::Error> for NotecalError {
    fn from(err: ureq::Error) -> Self {
        NotecalError::Generator(err.to_string())
    }
}

impl NotecalError {
    /// Create an error for an invalid value supplied by the user
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        NotecalError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        NotecalError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        NotecalError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NotecalError::UnknownFormat(_)
            | NotecalError::UsageError(_)
            | NotecalError::InvalidValue { .. } => ExitCode::Usage,

            NotecalError::NotFound { .. }
            | NotecalError::InvalidConfig { .. }
            | NotecalError::InvalidResponse(_) => ExitCode::Data,

            NotecalError::Io(_)
            | NotecalError::Json(_)
            | NotecalError::Generator(_)
            | NotecalError::FailedOperationWithTarget { .. }
            | NotecalError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            NotecalError::UnknownFormat(_) => "unknown_format",
            NotecalError::UsageError(_) => "usage_error",
            NotecalError::InvalidValue { .. } => "invalid_value",
            NotecalError::NotFound { .. } => "not_found",
            NotecalError::InvalidConfig { .. } => "invalid_config",
            NotecalError::InvalidResponse(_) => "invalid_response",
            NotecalError::Io(_) => "io_error",
            NotecalError::Json(_) => "json_error",
            NotecalError::Generator(_) => "generator_error",
            NotecalError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            NotecalError::Other(_) => "other",
        }
    }

    /// Render the error as a JSON envelope for `--format json`
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
        .to_string()
    }
}

/// Result type alias for notecal operations
pub type Result<T> = std::result::Result<T, NotecalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            NotecalError::invalid_value("color", "#12345").exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            NotecalError::not_found("daily note", "2025-12-15").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            NotecalError::InvalidResponse("no json".into()).exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            NotecalError::Generator("connection refused".into()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let err = NotecalError::not_found("daily note", "2025-12-15");
        let value: serde_json::Value = serde_json::from_str(&err.to_json()).unwrap();
        assert_eq!(value["error"]["code"], 3);
        assert_eq!(value["error"]["type"], "not_found");
        assert_eq!(
            value["error"]["message"],
            "daily note not found: 2025-12-15"
        );
    }
}
