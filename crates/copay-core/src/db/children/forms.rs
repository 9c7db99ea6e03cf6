//! Form rows.

use rusqlite::{params, Connection, Transaction};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Form, ProgramId},
};

const SELECT_FORMS_SQL: &str = "SELECT name, link FROM forms WHERE program_id = ?1 ORDER BY id";
const INSERT_FORM_SQL: &str = "INSERT INTO forms (program_id, name, link) VALUES (?1, ?2, ?3)";

pub fn read(conn: &Connection, program_id: ProgramId) -> Result<Vec<Form>> {
    let mut stmt = conn
        .prepare_cached(SELECT_FORMS_SQL)
        .db_context("Failed to prepare forms query")?;

    let forms = stmt
        .query_map(params![program_id], |row| {
            Ok(Form {
                name: row.get(0)?,
                link: row.get(1)?,
            })
        })
        .db_context("Failed to query forms")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to read form")?;

    Ok(forms)
}

pub fn write(tx: &Transaction<'_>, program_id: ProgramId, forms: &[Form]) -> Result<()> {
    let mut stmt = tx
        .prepare_cached(INSERT_FORM_SQL)
        .db_context("Failed to prepare form insert")?;

    for form in forms {
        stmt.execute(params![program_id, form.name, form.link])
            .db_context("Failed to insert form")?;
    }

    Ok(())
}
