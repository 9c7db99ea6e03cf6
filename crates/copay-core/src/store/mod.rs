//! Async program store API.
//!
//! [`ProgramStore`] is the entry point for in-process callers (the ingestion
//! and query sides). It holds no connection: every operation opens its own
//! [`Database`] on a blocking worker, runs one synchronous repository method
//! and drops the connection before the future resolves. Nothing is cached or
//! shared between calls, and concurrent writers are serialized only by the
//! store's own transaction locking plus the version check on replace.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  ProgramStore   │    │    Database     │    │  child tables   │
//! │ (async, tokio)  │───▶│ (one connection │───▶│  (accessors in  │
//! │                 │    │  per operation) │    │  db::children)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ```rust
//! use copay_core::{models::{Program, Requirement}, ProgramStoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = ProgramStoreBuilder::new()
//!     .with_database_path("/tmp/copay-example.db")
//!     .build()
//!     .await?;
//!
//! let mut program = Program::new(500, "Acme Savings Card", "Coupon");
//! program.requirements.push(Requirement::new("minimum_age", "18"));
//! store.insert(&program).await?;
//!
//! let mut loaded = store.fetch(500).await?.expect("program was just inserted");
//! loaded.requirements.push(Requirement::new("us_residency", "true"));
//! let version = store.replace(&loaded).await?;
//! assert_eq!(version, loaded.version + 1);
//! # Ok(())
//! # }
//! ```

use tokio::task;

use crate::{
    db::{ConnectionOptions, Database},
    error::{CopayError, Result},
};

pub mod builder;
pub mod program_ops;


pub use builder::ProgramStoreBuilder;

/// Main interface for persisting and loading programs.
#[derive(Debug, Clone)]
pub struct ProgramStore {
    pub(crate) connection_string: String,
    pub(crate) options: ConnectionOptions,
}

impl ProgramStore {
    /// Creates a store for an already validated connection string.
    pub(crate) fn new(connection_string: String, options: ConnectionOptions) -> Self {
        Self {
            connection_string,
            options,
        }
    }

    /// Connection string every operation opens.
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    /// Runs `operation` on a blocking worker with a fresh connection.
    pub(crate) async fn run<T, F>(&self, operation: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let connection_string = self.connection_string.clone();
        let options = self.options.clone();

        task::spawn_blocking(move || {
            let mut db = Database::open_with(&connection_string, &options)?;
            operation(&mut db)
        })
        .await
        .map_err(|e| CopayError::Task {
            message: e.to_string(),
        })?
    }
}
