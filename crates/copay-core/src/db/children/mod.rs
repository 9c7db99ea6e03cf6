//! Child-collection accessors.
//!
//! Each submodule reads one child table for a program through a borrowed
//! connection and writes a slice of rows through a borrowed transaction, one
//! INSERT per row. None of them opens, commits or rolls back anything: the
//! aggregate operations in [`super::program_queries`] own the transaction and
//! every statement failure is passed up unchanged.
//!
//! [`ChildTable::ALL`] fixes the order in which the six tables are deleted,
//! written and read.

use rusqlite::{params, Connection, Transaction};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Program, ProgramId},
};

pub mod benefits;
pub mod coverage;
pub mod details;
pub mod forms;
pub mod funding;
pub mod requirements;

const DELETE_COVERAGE_SQL: &str = "DELETE FROM coverage_eligibilities WHERE program_id = ?1";
const DELETE_REQUIREMENTS_SQL: &str = "DELETE FROM requirements WHERE program_id = ?1";
const DELETE_BENEFITS_SQL: &str = "DELETE FROM benefits WHERE program_id = ?1";
const DELETE_FORMS_SQL: &str = "DELETE FROM forms WHERE program_id = ?1";
const DELETE_FUNDING_SQL: &str = "DELETE FROM funding WHERE program_id = ?1";
const DELETE_DETAILS_SQL: &str = "DELETE FROM program_details WHERE program_id = ?1";

/// The six tables that hang off `copay_programs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildTable {
    CoverageEligibilities,
    Requirements,
    Benefits,
    Forms,
    Funding,
    ProgramDetails,
}

impl ChildTable {
    /// Canonical statement order for deletes, inserts and reads.
    pub const ALL: [ChildTable; 6] = [
        ChildTable::CoverageEligibilities,
        ChildTable::Requirements,
        ChildTable::Benefits,
        ChildTable::Forms,
        ChildTable::Funding,
        ChildTable::ProgramDetails,
    ];

    /// SQL name of the table.
    pub fn table_name(self) -> &'static str {
        match self {
            ChildTable::CoverageEligibilities => "coverage_eligibilities",
            ChildTable::Requirements => "requirements",
            ChildTable::Benefits => "benefits",
            ChildTable::Forms => "forms",
            ChildTable::Funding => "funding",
            ChildTable::ProgramDetails => "program_details",
        }
    }

    fn delete_sql(self) -> &'static str {
        match self {
            ChildTable::CoverageEligibilities => DELETE_COVERAGE_SQL,
            ChildTable::Requirements => DELETE_REQUIREMENTS_SQL,
            ChildTable::Benefits => DELETE_BENEFITS_SQL,
            ChildTable::Forms => DELETE_FORMS_SQL,
            ChildTable::Funding => DELETE_FUNDING_SQL,
            ChildTable::ProgramDetails => DELETE_DETAILS_SQL,
        }
    }

    /// Deletes this table's rows for a program, returning how many went.
    pub fn delete(self, tx: &Transaction<'_>, program_id: ProgramId) -> Result<usize> {
        tx.execute(self.delete_sql(), params![program_id])
            .db_context(&format!("Failed to delete {}", self.table_name()))
    }

    /// Inserts the program's rows for this table.
    pub fn write(self, tx: &Transaction<'_>, program: &Program) -> Result<()> {
        let id = program.program_id;
        match self {
            ChildTable::CoverageEligibilities => {
                coverage::write(tx, id, &program.coverage_eligibilities)
            }
            ChildTable::Requirements => requirements::write(tx, id, &program.requirements),
            ChildTable::Benefits => benefits::write(tx, id, &program.benefits),
            ChildTable::Forms => forms::write(tx, id, &program.forms),
            ChildTable::Funding => funding::write(tx, id, program.funding.as_ref()),
            ChildTable::ProgramDetails => details::write(tx, id, &program.details),
        }
    }

    /// Loads this table's rows into the matching field of `program`.
    pub fn read_into(self, conn: &Connection, program: &mut Program) -> Result<()> {
        let id = program.program_id;
        match self {
            ChildTable::CoverageEligibilities => {
                program.coverage_eligibilities = coverage::read(conn, id)?;
            }
            ChildTable::Requirements => program.requirements = requirements::read(conn, id)?,
            ChildTable::Benefits => program.benefits = benefits::read(conn, id)?,
            ChildTable::Forms => program.forms = forms::read(conn, id)?,
            ChildTable::Funding => program.funding = funding::read(conn, id)?,
            ChildTable::ProgramDetails => program.details = details::read(conn, id)?,
        }
        Ok(())
    }
}

/// Inserts every child collection of a program.
pub fn write_all(tx: &Transaction<'_>, program: &Program) -> Result<()> {
    for table in ChildTable::ALL {
        table.write(tx, program)?;
    }
    Ok(())
}

/// Attaches every child collection to a freshly loaded root.
pub fn read_all(conn: &Connection, program: &mut Program) -> Result<()> {
    for table in ChildTable::ALL {
        table.read_into(conn, program)?;
    }
    Ok(())
}
