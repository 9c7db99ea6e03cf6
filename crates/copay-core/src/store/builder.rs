//! Builder for creating and configuring ProgramStore instances.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use super::ProgramStore;
use crate::{
    db::ConnectionOptions,
    error::{CopayError, Result},
};

/// Builder for creating and configuring ProgramStore instances.
#[derive(Debug, Clone, Default)]
pub struct ProgramStoreBuilder {
    connection_string: Option<String>,
    options: ConnectionOptions,
}

impl ProgramStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the connection string: a file path or a `file:` URI.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/copay/copay.db` or `~/.local/share/copay/copay.db`
    pub fn with_connection_string<S: Into<String>>(mut self, connection_string: Option<S>) -> Self {
        if let Some(connection_string) = connection_string {
            self.connection_string = Some(connection_string.into());
        }
        self
    }

    /// Sets a database file path.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.connection_string = Some(path.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Sets how long each connection waits on a locked database.
    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.options.busy_timeout = busy_timeout;
        self
    }

    /// Builds the configured store and bootstraps the schema.
    ///
    /// # Errors
    ///
    /// Returns `CopayError::InvalidInput` for an empty or in-memory
    /// connection string, `CopayError::FileSystem` if the database directory
    /// cannot be created and `CopayError::Connection` or
    /// `CopayError::Database` if the first connection fails.
    pub async fn build(self) -> Result<ProgramStore> {
        let connection_string = match self.connection_string {
            Some(connection_string) => connection_string,
            None => Self::default_database_path()?
                .to_string_lossy()
                .into_owned(),
        };

        Self::validate(&connection_string)?;

        if !connection_string.starts_with("file:") {
            if let Some(parent) = Path::new(&connection_string).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| CopayError::FileSystem {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                }
            }
        }

        let store = ProgramStore::new(connection_string, self.options);
        store.run(|_db| Ok(())).await?;
        Ok(store)
    }

    fn validate(connection_string: &str) -> Result<()> {
        if connection_string.trim().is_empty() {
            return Err(CopayError::invalid_input("database")
                .with_reason("connection string must not be empty"));
        }

        // Each operation opens its own connection, so a private in-memory
        // database would start empty every time.
        if connection_string == ":memory:" || connection_string.contains("mode=memory") {
            return Err(CopayError::invalid_input("database")
                .with_reason("in-memory databases are not shared between operations"));
        }

        Ok(())
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("copay")
            .place_data_file("copay.db")
            .map_err(|e| CopayError::XdgDirectory(e.to_string()))
    }
}
