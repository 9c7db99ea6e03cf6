//! Funding record, at most one per program.
//!
//! The schema does not enforce the cardinality, so a read that finds more
//! than one row reports `CopayError::DataIntegrity` instead of picking one.

use rusqlite::{params, types::Type, Connection, Transaction};

use crate::{
    error::{CopayError, DatabaseResultExt, Result},
    models::{Funding, ProgramId},
};

const SELECT_FUNDING_SQL: &str =
    "SELECT evergreen, current_funding_level FROM funding WHERE program_id = ?1 ORDER BY id";
const INSERT_FUNDING_SQL: &str =
    "INSERT INTO funding (program_id, evergreen, current_funding_level) VALUES (?1, ?2, ?3)";

/// Stored text for the evergreen flag.
fn encode_evergreen(evergreen: bool) -> &'static str {
    if evergreen {
        "true"
    } else {
        "false"
    }
}

fn decode_evergreen(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn build_funding_from_row(row: &rusqlite::Row) -> rusqlite::Result<Funding> {
    let evergreen_str: String = row.get(0)?;
    let evergreen = decode_evergreen(&evergreen_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            Type::Text,
            format!("Invalid evergreen flag: {evergreen_str}").into(),
        )
    })?;

    Ok(Funding {
        evergreen,
        current_funding_level: row.get(1)?,
    })
}

/// Reads the program's funding record, if any.
pub fn read(conn: &Connection, program_id: ProgramId) -> Result<Option<Funding>> {
    let mut stmt = conn
        .prepare_cached(SELECT_FUNDING_SQL)
        .db_context("Failed to prepare funding query")?;

    let mut records = stmt
        .query_map(params![program_id], build_funding_from_row)
        .db_context("Failed to query funding")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to read funding")?;

    if records.len() > 1 {
        return Err(CopayError::DataIntegrity {
            program_id,
            reason: format!("expected at most one funding row, found {}", records.len()),
        });
    }

    Ok(records.pop())
}

/// Inserts the funding record when present; absent funding writes nothing.
pub fn write(tx: &Transaction<'_>, program_id: ProgramId, funding: Option<&Funding>) -> Result<()> {
    let Some(funding) = funding else {
        return Ok(());
    };

    tx.prepare_cached(INSERT_FUNDING_SQL)
        .db_context("Failed to prepare funding insert")?
        .execute(params![
            program_id,
            encode_evergreen(funding.evergreen),
            funding.current_funding_level
        ])
        .db_context("Failed to insert funding")?;

    Ok(())
}
