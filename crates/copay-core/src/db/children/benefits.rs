//! Benefit rows.

use rusqlite::{params, Connection, Transaction};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Benefit, ProgramId},
};

const SELECT_BENEFITS_SQL: &str =
    "SELECT name, value FROM benefits WHERE program_id = ?1 ORDER BY id";
const INSERT_BENEFIT_SQL: &str =
    "INSERT INTO benefits (program_id, name, value) VALUES (?1, ?2, ?3)";

pub fn read(conn: &Connection, program_id: ProgramId) -> Result<Vec<Benefit>> {
    let mut stmt = conn
        .prepare_cached(SELECT_BENEFITS_SQL)
        .db_context("Failed to prepare benefits query")?;

    let benefits = stmt
        .query_map(params![program_id], |row| {
            Ok(Benefit {
                name: row.get(0)?,
                value: row.get(1)?,
            })
        })
        .db_context("Failed to query benefits")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to read benefit")?;

    Ok(benefits)
}

/// Values are stored verbatim; currency formatting is the caller's concern.
pub fn write(tx: &Transaction<'_>, program_id: ProgramId, benefits: &[Benefit]) -> Result<()> {
    let mut stmt = tx
        .prepare_cached(INSERT_BENEFIT_SQL)
        .db_context("Failed to prepare benefit insert")?;

    for benefit in benefits {
        stmt.execute(params![program_id, benefit.name, benefit.value])
            .db_context("Failed to insert benefit")?;
    }

    Ok(())
}
