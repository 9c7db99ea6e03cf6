//! Program aggregate operations and queries.
//!
//! A program spans `copay_programs` plus the six child tables. Reads load the
//! root row and then each child collection on the same connection; writes put
//! the root row and every child row in one transaction, so callers observe
//! either the whole aggregate or none of it.

use log::debug;
use rusqlite::{params, OptionalExtension, Transaction};

use super::children::{self, ChildTable};
use crate::{
    error::{CopayError, DatabaseResultExt, Result},
    models::{Program, ProgramId, ProgramSummary},
};

const SELECT_PROGRAM_SQL: &str = "SELECT program_id, program_name, program_type, version FROM copay_programs WHERE program_id = ?1";
const CHECK_PROGRAM_EXISTS_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM copay_programs WHERE program_id = ?1)";
const SELECT_PROGRAM_VERSION_SQL: &str =
    "SELECT version FROM copay_programs WHERE program_id = ?1";
const INSERT_PROGRAM_SQL: &str = "INSERT INTO copay_programs (program_id, program_name, program_type, version) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_PROGRAM_SQL: &str = "UPDATE copay_programs SET program_name = ?1, program_type = ?2, version = version + 1 WHERE program_id = ?3 AND version = ?4";
const DELETE_PROGRAM_SQL: &str = "DELETE FROM copay_programs WHERE program_id = ?1";
const LIST_PROGRAMS_SQL: &str = "SELECT p.program_id, p.program_name, p.program_type, p.version,
        (SELECT COUNT(*) FROM coverage_eligibilities c WHERE c.program_id = p.program_id),
        (SELECT COUNT(*) FROM requirements r WHERE r.program_id = p.program_id),
        (SELECT COUNT(*) FROM benefits b WHERE b.program_id = p.program_id),
        (SELECT COUNT(*) FROM forms f WHERE f.program_id = p.program_id),
        (SELECT COUNT(*) FROM funding u WHERE u.program_id = p.program_id),
        (SELECT COUNT(*) FROM program_details d WHERE d.program_id = p.program_id)
    FROM copay_programs p ORDER BY p.program_id";

impl super::Database {
    /// Retrieves a program and all of its child collections.
    ///
    /// Returns `Ok(None)` when no root row exists; a program that exists
    /// always comes back with every collection loaded, possibly empty.
    pub fn get_program(&self, id: ProgramId) -> Result<Option<Program>> {
        // One snapshot for the root row and all six collections
        let tx = self
            .connection
            .unchecked_transaction()
            .db_context("Failed to begin read transaction")?;

        let root = tx
            .query_row(SELECT_PROGRAM_SQL, params![id], |row| {
                Ok(Program {
                    program_id: row.get(0)?,
                    program_name: row.get(1)?,
                    program_type: row.get(2)?,
                    version: row.get(3)?,
                    ..Default::default()
                })
            })
            .optional()
            .db_context("Failed to query program")?;

        let Some(mut program) = root else {
            debug!("Program {id} not found");
            return Ok(None);
        };

        children::read_all(&tx, &mut program)?;

        tx.commit().db_context("Failed to end read transaction")?;

        debug!(
            "Loaded program {id} with {} child rows",
            program.child_row_count()
        );
        Ok(Some(program))
    }

    /// Inserts a new program with all of its child rows and returns its ID.
    ///
    /// The root row goes in before any child row. An ID that is already
    /// taken fails with `CopayError::DuplicateProgram` and writes nothing.
    pub fn insert_program(&mut self, program: &Program) -> Result<ProgramId> {
        let id = program.program_id;
        debug!(
            "Inserting program {id} with {} child rows",
            program.child_row_count()
        );

        self.write_transaction(id, "insert", |tx| {
            let exists: bool = tx
                .query_row(CHECK_PROGRAM_EXISTS_SQL, params![id], |row| row.get(0))
                .db_context("Failed to check program existence")?;

            if exists {
                return Err(CopayError::DuplicateProgram { id });
            }

            tx.execute(
                INSERT_PROGRAM_SQL,
                params![id, program.program_name, program.program_type, program.version],
            )
            .db_context("Failed to insert program")?;

            children::write_all(tx, program)?;

            Ok(id)
        })
    }

    /// Replaces a stored program with `program`, returning the new version.
    ///
    /// `program.version` must equal the stored version. The root row is
    /// updated, every child row of the program is deleted, then the current
    /// collections are inserted. Any failure leaves the previous state intact.
    ///
    /// # Errors
    ///
    /// Returns `CopayError::ProgramNotFound` if no root row exists and
    /// `CopayError::VersionConflict` if another writer replaced it first.
    pub fn replace_program(&mut self, program: &Program) -> Result<u32> {
        let id = program.program_id;
        let next_version = program.version.checked_add(1).ok_or_else(|| {
            CopayError::invalid_input("version").with_reason("version counter is exhausted")
        })?;

        debug!(
            "Replacing program {id} at version {} with {} child rows",
            program.version,
            program.child_row_count()
        );

        self.write_transaction(id, "replace", |tx| {
            let updated = tx
                .execute(
                    UPDATE_PROGRAM_SQL,
                    params![program.program_name, program.program_type, id, program.version],
                )
                .db_context("Failed to update program")?;

            if updated == 0 {
                let stored: Option<u32> = tx
                    .query_row(SELECT_PROGRAM_VERSION_SQL, params![id], |row| row.get(0))
                    .optional()
                    .db_context("Failed to read program version")?;

                return Err(match stored {
                    None => CopayError::ProgramNotFound { id },
                    Some(actual) => CopayError::VersionConflict {
                        id,
                        expected: program.version,
                        actual,
                    },
                });
            }

            // All deletes before any insert
            let removed = Self::delete_related_rows(tx, id)?;
            debug!("Removed {removed} child rows of program {id}");

            children::write_all(tx, program)?;

            Ok(next_version)
        })
    }

    /// Permanently deletes a program and all of its child rows.
    ///
    /// Returns whether a root row existed.
    pub fn delete_program(&mut self, id: ProgramId) -> Result<bool> {
        debug!("Deleting program {id}");

        self.write_transaction(id, "delete", |tx| {
            Self::delete_related_rows(tx, id)?;

            let deleted = tx
                .execute(DELETE_PROGRAM_SQL, params![id])
                .db_context("Failed to delete program")?;

            Ok(deleted > 0)
        })
    }

    /// Lists every stored program with its collection sizes, by ID.
    pub fn list_programs(&self) -> Result<Vec<ProgramSummary>> {
        let mut stmt = self
            .connection
            .prepare(LIST_PROGRAMS_SQL)
            .db_context("Failed to prepare query")?;

        let summaries = stmt
            .query_map([], |row| {
                Ok(ProgramSummary {
                    program_id: row.get(0)?,
                    program_name: row.get(1)?,
                    program_type: row.get(2)?,
                    version: row.get(3)?,
                    coverage_count: row.get(4)?,
                    requirement_count: row.get(5)?,
                    benefit_count: row.get(6)?,
                    form_count: row.get(7)?,
                    has_funding: row.get::<_, i64>(8)? > 0,
                    detail_count: row.get(9)?,
                })
            })
            .db_context("Failed to query programs")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read program summary")?;

        Ok(summaries)
    }

    /// Removes the rows of all six child tables for a program.
    fn delete_related_rows(tx: &Transaction<'_>, id: ProgramId) -> Result<usize> {
        let mut removed = 0;
        for table in ChildTable::ALL {
            removed += table.delete(tx, id)?;
        }
        Ok(removed)
    }
}
