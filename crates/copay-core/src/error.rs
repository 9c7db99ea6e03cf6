//! Error types for the copay program store.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::ProgramId;

/// Comprehensive error type for all program store operations.
#[derive(Error, Debug)]
pub enum CopayError {
    /// The connection to the store could not be opened
    #[error("Failed to open connection to '{target}': {source}")]
    Connection {
        target: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A query or statement failed
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A write failed and the transaction could not be rolled back either.
    ///
    /// The on-disk state of the program is unknown and needs manual
    /// reconciliation.
    #[error("Rollback failed for program {program_id} after: {cause}")]
    RollbackFailed {
        program_id: ProgramId,
        cause: Box<CopayError>,
        #[source]
        source: rusqlite::Error,
    },
    /// No program exists with the given ID
    #[error("Program with ID {id} not found")]
    ProgramNotFound { id: ProgramId },
    /// A program with the given ID already exists
    #[error("Program with ID {id} already exists")]
    DuplicateProgram { id: ProgramId },
    /// The stored version differs from the one the caller replaced against
    #[error("Program {id} was modified concurrently: expected version {expected}, found {actual}")]
    VersionConflict {
        id: ProgramId,
        expected: u32,
        actual: u32,
    },
    /// Stored rows violate an invariant the schema does not enforce
    #[error("Data integrity error for program {program_id}: {reason}")]
    DataIntegrity {
        program_id: ProgramId,
        reason: String,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// The blocking worker running an operation panicked or was cancelled
    #[error("Task join error: {message}")]
    Task { message: String },
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
    pub fn with_source(self, source: rusqlite::Error) -> CopayError {
        CopayError::Database {
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
    pub fn with_reason(self, reason: impl Into<String>) -> CopayError {
        CopayError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CopayError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether this error means the requested program does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ProgramNotFound { .. })
    }

    /// Whether the store may now hold a partially written program.
    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Self::RollbackFailed { .. })
    }

    /// Message safe to show to untrusted callers.
    ///
    /// Driver text and connection targets never appear here; callers that
    /// need them log the full error instead.
    pub fn public_message(&self) -> String {
        match self {
            Self::ProgramNotFound { id } => format!("Program {id} not found"),
            Self::DuplicateProgram { id } => format!("Program {id} already exists"),
            Self::VersionConflict { id, .. } => {
                format!("Program {id} was modified by another writer; fetch it and retry")
            }
            Self::InvalidInput { field, reason } => format!("Invalid {field}: {reason}"),
            _ => "Operation failed".to_string(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CopayError::database(message).with_source(e))
    }
}

/// Result type alias for program store operations
pub type Result<T> = std::result::Result<T, CopayError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_failure() -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_IOERR),
            Some("disk I/O error at /var/lib/copay/copay.db".to_string()),
        )
    }

    #[test]
    fn test_not_found_public_message() {
        let err = CopayError::ProgramNotFound { id: 42 };
        assert!(err.is_not_found());
        assert_eq!(err.public_message(), "Program 42 not found");
    }

    #[test]
    fn test_public_message_hides_driver_detail() {
        let err = CopayError::database("Failed to insert form").with_source(sqlite_failure());
        let message = err.public_message();
        assert_eq!(message, "Operation failed");
        assert!(!message.contains("/var/lib"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_public_message_hides_connection_target() {
        let err = CopayError::Connection {
            target: "file:/secret/copay.db?mode=rw".to_string(),
            source: sqlite_failure(),
        };
        assert_eq!(err.public_message(), "Operation failed");
        assert!(err.to_string().contains("/secret/copay.db"));
    }

    #[test]
    fn test_rollback_failure_is_indeterminate() {
        let cause = CopayError::database("Failed to insert benefit").with_source(sqlite_failure());
        let err = CopayError::RollbackFailed {
            program_id: 7,
            cause: Box::new(cause),
            source: sqlite_failure(),
        };
        assert!(err.is_indeterminate());
        assert!(err.to_string().contains("Failed to insert benefit"));
        assert_eq!(err.public_message(), "Operation failed");
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = CopayError::invalid_input("program_name").with_reason("must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'program_name': must not be empty"
        );
    }
}
