//! Database operations and SQLite management for copay programs.
//!
//! [`Database`] is the connection provider: it owns exactly one
//! `rusqlite::Connection`, bootstraps the schema on open and releases the
//! connection when dropped. The aggregate operations live in
//! [`program_queries`]; the per-table readers and writers they orchestrate
//! live in [`children`].

use std::time::Duration;

use log::debug;
use rusqlite::Connection;

use crate::error::{CopayError, Result};

pub mod children;
pub mod program_queries;
mod schema;
mod transaction;

pub use children::ChildTable;

/// How long a connection waits on a locked database before failing.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Per-connection settings applied on open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionOptions {
    /// Time to wait for another writer's lock before a statement fails
    pub busy_timeout: Duration,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }
}

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens a connection with default options and initializes the schema.
    ///
    /// The connection string is a file path, `:memory:`, or a `file:` URI.
    pub fn open(connection_string: &str) -> Result<Self> {
        Self::open_with(connection_string, &ConnectionOptions::default())
    }

    /// Opens a connection with the given options and initializes the schema.
    ///
    /// # Errors
    ///
    /// Returns `CopayError::Connection` if the store cannot be reached, is
    /// not a SQLite database, or its schema cannot be created.
    pub fn open_with(connection_string: &str, options: &ConnectionOptions) -> Result<Self> {
        let connection_failed = |source| CopayError::Connection {
            target: connection_string.to_string(),
            source,
        };

        let connection = Connection::open(connection_string).map_err(connection_failed)?;
        connection
            .busy_timeout(options.busy_timeout)
            .map_err(connection_failed)?;

        debug!("Opened connection to {connection_string}");

        let db = Self { connection };
        db.initialize_schema().map_err(connection_failed)?;
        Ok(db)
    }
}
