//! Database schema bootstrap.

impl super::Database {
    /// Creates any missing tables using the embedded SQL file.
    ///
    /// This is the first statement a new connection runs, so a file that is
    /// not a SQLite database fails here.
    pub(super) fn initialize_schema(&self) -> rusqlite::Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection.execute_batch(schema_sql)
    }
}
