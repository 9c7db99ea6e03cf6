//! Eligibility requirement rows.

use rusqlite::{params, Connection, Transaction};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{ProgramId, Requirement},
};

const SELECT_REQUIREMENTS_SQL: &str =
    "SELECT name, value FROM requirements WHERE program_id = ?1 ORDER BY id";
const INSERT_REQUIREMENT_SQL: &str =
    "INSERT INTO requirements (program_id, name, value) VALUES (?1, ?2, ?3)";

pub fn read(conn: &Connection, program_id: ProgramId) -> Result<Vec<Requirement>> {
    let mut stmt = conn
        .prepare_cached(SELECT_REQUIREMENTS_SQL)
        .db_context("Failed to prepare requirements query")?;

    let requirements = stmt
        .query_map(params![program_id], |row| {
            Ok(Requirement {
                name: row.get(0)?,
                value: row.get(1)?,
            })
        })
        .db_context("Failed to query requirements")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to read requirement")?;

    Ok(requirements)
}

pub fn write(
    tx: &Transaction<'_>,
    program_id: ProgramId,
    requirements: &[Requirement],
) -> Result<()> {
    let mut stmt = tx
        .prepare_cached(INSERT_REQUIREMENT_SQL)
        .db_context("Failed to prepare requirement insert")?;

    for requirement in requirements {
        stmt.execute(params![program_id, requirement.name, requirement.value])
            .db_context("Failed to insert requirement")?;
    }

    Ok(())
}
