//! Narrative detail rows.

use rusqlite::{params, Connection, Transaction};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{ProgramDetail, ProgramId},
};

const SELECT_DETAILS_SQL: &str = "SELECT eligibility, program, renewal, income FROM program_details WHERE program_id = ?1 ORDER BY id";
const INSERT_DETAIL_SQL: &str = "INSERT INTO program_details (program_id, eligibility, program, renewal, income) VALUES (?1, ?2, ?3, ?4, ?5)";

pub fn read(conn: &Connection, program_id: ProgramId) -> Result<Vec<ProgramDetail>> {
    let mut stmt = conn
        .prepare_cached(SELECT_DETAILS_SQL)
        .db_context("Failed to prepare details query")?;

    let details = stmt
        .query_map(params![program_id], |row| {
            Ok(ProgramDetail {
                eligibility: row.get(0)?,
                program: row.get(1)?,
                renewal: row.get(2)?,
                income: row.get(3)?,
            })
        })
        .db_context("Failed to query program details")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to read program detail")?;

    Ok(details)
}

pub fn write(tx: &Transaction<'_>, program_id: ProgramId, details: &[ProgramDetail]) -> Result<()> {
    let mut stmt = tx
        .prepare_cached(INSERT_DETAIL_SQL)
        .db_context("Failed to prepare detail insert")?;

    for detail in details {
        stmt.execute(params![
            program_id,
            detail.eligibility,
            detail.program,
            detail.renewal,
            detail.income
        ])
        .db_context("Failed to insert program detail")?;
    }

    Ok(())
}
