#![allow(dead_code)]

use copay_core::{
    models::{Benefit, Form, Funding, Program, ProgramDetail, Requirement},
    ChildTable, Database,
};
use rusqlite::Connection;
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
pub fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let path = temp_file.path().to_str().expect("Temp path is not UTF-8");
    let db = Database::open(path).expect("Failed to create test database");
    (temp_file, db)
}

/// Second connection on the same file, for setting up fixtures the
/// repository itself would never write.
pub fn raw_connection(temp_file: &NamedTempFile) -> Connection {
    Connection::open(temp_file.path()).expect("Failed to open raw connection")
}

pub fn child_rows(conn: &Connection, table: ChildTable, program_id: i64) -> i64 {
    conn.query_row(
        &format!(
            "SELECT COUNT(*) FROM {} WHERE program_id = ?1",
            table.table_name()
        ),
        [program_id],
        |row| row.get(0),
    )
    .expect("Failed to count child rows")
}

pub fn total_child_rows(conn: &Connection, program_id: i64) -> i64 {
    ChildTable::ALL
        .into_iter()
        .map(|table| child_rows(conn, table, program_id))
        .sum()
}

/// Makes every insert into `forms` named `boom` fail.
pub fn install_form_failure(conn: &Connection) {
    conn.execute_batch(
        "CREATE TRIGGER fail_boom_form BEFORE INSERT ON forms
         WHEN NEW.name = 'boom'
         BEGIN SELECT RAISE(ABORT, 'injected form failure'); END;",
    )
    .expect("Failed to install failure trigger");
}

/// A fully populated program like the ones the ingestion side produces.
pub fn sample_program(id: i64) -> Program {
    Program {
        program_id: id,
        program_name: format!("Test Copay Program {id}"),
        program_type: "Coupon".to_string(),
        version: 0,
        coverage_eligibilities: vec!["Commercially insured".to_string()],
        requirements: vec![
            Requirement::new("us_residency", "true"),
            Requirement::new("minimum_age", "18"),
        ],
        benefits: vec![
            Benefit::new("max_annual_savings", "5000.00"),
            Benefit::new("min_out_of_pocket", "0.00"),
        ],
        forms: vec![Form::new("Enrollment Form", "https://example.com/form")],
        funding: Some(Funding::new(true, "Data Not Available")),
        details: vec![ProgramDetail {
            eligibility: "Patient must have commercial insurance".to_string(),
            program: "Patients may pay as little as $0".to_string(),
            renewal: "Automatically re-enrolled every January 1st".to_string(),
            income: "Not required".to_string(),
        }],
    }
}
