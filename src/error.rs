//! Custom error types for cashflow-cli
//!
//! The forecasting engine itself never fails on well-formed input; these
//! errors cover validation of configuration mutations, persistence and
//! export.

use thiserror::Error;

/// The main error type for cashflow-cli operations
#[derive(Error, Debug)]
pub enum CashflowError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CashflowError {
    /// Create a "not found" error for income streams
    pub fn income_stream_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Income stream",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expense categories
    pub fn expense_category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for scenarios
    pub fn scenario_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Scenario",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for CashflowError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CashflowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for cashflow-cli operations
pub type CashflowResult<T> = Result<T, CashflowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CashflowError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = CashflowError::income_stream_not_found("Domestic Rewires");
        assert_eq!(err.to_string(), "Income stream not found: Domestic Rewires");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_duplicate_error() {
        let err = CashflowError::Duplicate {
            entity_type: "Expense category",
            identifier: "exp-1234abcd".into(),
        };
        assert_eq!(
            err.to_string(),
            "Expense category already exists: exp-1234abcd"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CashflowError = io_err.into();
        assert!(matches!(err, CashflowError::Io(_)));
    }
}
