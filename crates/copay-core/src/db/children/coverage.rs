//! Coverage eligibility labels.

use rusqlite::{params, Connection, Transaction};

use crate::{
    error::{DatabaseResultExt, Result},
    models::ProgramId,
};

const SELECT_COVERAGE_SQL: &str =
    "SELECT eligibility FROM coverage_eligibilities WHERE program_id = ?1 ORDER BY id";
const INSERT_COVERAGE_SQL: &str =
    "INSERT INTO coverage_eligibilities (program_id, eligibility) VALUES (?1, ?2)";

/// Reads a program's coverage labels in insertion order.
pub fn read(conn: &Connection, program_id: ProgramId) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare_cached(SELECT_COVERAGE_SQL)
        .db_context("Failed to prepare coverage query")?;

    let labels = stmt
        .query_map(params![program_id], |row| row.get(0))
        .db_context("Failed to query coverage eligibilities")?
        .collect::<rusqlite::Result<Vec<String>>>()
        .db_context("Failed to read coverage eligibility")?;

    Ok(labels)
}

/// Inserts one row per label. Duplicates are kept.
pub fn write(tx: &Transaction<'_>, program_id: ProgramId, labels: &[String]) -> Result<()> {
    let mut stmt = tx
        .prepare_cached(INSERT_COVERAGE_SQL)
        .db_context("Failed to prepare coverage insert")?;

    for label in labels {
        stmt.execute(params![program_id, label])
            .db_context("Failed to insert coverage eligibility")?;
    }

    Ok(())
}
