//! Application error type

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the error type the floor engine hands to typed callers:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (table number, section, ...)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create an invalid table number error
    pub fn invalid_table(number: i64) -> Self {
        Self::with_message(
            ErrorCode::InvalidTableNumber,
            format!("Table {} is not a seatable table", number),
        )
        .with_detail("table_number", number)
    }

    /// Create an invalid server count error
    pub fn invalid_server_count(count: i64) -> Self {
        Self::with_message(
            ErrorCode::InvalidServerCount,
            format!("Active server count {} is outside 1..=7", count),
        )
        .with_detail("count", count)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigError, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::TableAlreadyOpen);
        assert_eq!(err.code, ErrorCode::TableAlreadyOpen);
        assert_eq!(err.message, "Table is already open");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Server name is blank")
            .with_detail("field", "server")
            .with_detail("reason", "required");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "server");
        assert_eq!(details.get("reason").unwrap(), "required");
    }

    #[test]
    fn test_convenience_constructors() {
        let err = AppError::invalid_table(30);
        assert_eq!(err.code, ErrorCode::InvalidTableNumber);
        assert_eq!(err.message, "Table 30 is not a seatable table");
        assert_eq!(err.details.unwrap().get("table_number").unwrap(), 30);

        let err = AppError::invalid_server_count(8);
        assert_eq!(err.code, ErrorCode::InvalidServerCount);

        let err = AppError::config("bad INITIAL_SERVER_COUNT");
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::TableAlreadySeated, "Table 4 is seated");
        assert_eq!(format!("{}", err), "Table 4 is seated");
    }
}
