//! Error types for the board library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all board operations.
///
/// Projections never produce these: malformed dates and dangling spec links
/// degrade the derived views instead. Errors come from rejected edits and
/// from the storage layer.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Process step not found for the given ID
    #[error("Process step with ID '{id}' not found")]
    StepNotFound { id: String },
    /// Spec not found for the given ID
    #[error("Spec with ID '{id}' not found")]
    SpecNotFound { id: String },
    /// Spec item key not present in the given spec
    #[error("Spec '{spec_id}' has no item named '{key}'")]
    SpecItemNotFound { spec_id: String, key: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> BoardError {
        BoardError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BoardError {
        BoardError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BoardError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Shorthand for a missing process step.
    pub fn step_not_found(id: impl Into<String>) -> Self {
        Self::StepNotFound { id: id.into() }
    }

    /// Shorthand for a missing spec.
    pub fn spec_not_found(id: impl Into<String>) -> Self {
        Self::SpecNotFound { id: id.into() }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| BoardError::database(message).with_source(e))
    }
}

/// Result type alias for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = BoardError::invalid_input("quantity").with_reason("must be a number");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'quantity': must be a number"
        );
    }

    #[test]
    fn test_json_errors_convert() {
        let source = serde_json::from_str::<u64>("twelve").unwrap_err();
        let err = BoardError::from(source);
        assert!(matches!(err, BoardError::Serialization { .. }));
        assert!(err.to_string().starts_with("Serialization error:"));
    }

    #[test]
    fn test_db_context_wraps_source() {
        let res: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = res.db_context("Failed to read snapshot").unwrap_err();
        assert!(matches!(err, BoardError::Database { .. }));
        assert!(err.to_string().contains("Failed to read snapshot"));
    }
}
