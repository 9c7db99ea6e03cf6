mod common;

use common::{child_rows, create_test_db, raw_connection, sample_program, total_child_rows};
use copay_core::{
    models::{Benefit, Form, Funding, Program, ProgramDetail, Requirement},
    ChildTable, CopayError, Database,
};

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();

    let raw = raw_connection(&temp_file);
    let tables: i64 = raw
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN
             ('copay_programs', 'coverage_eligibilities', 'requirements', 'benefits',
              'forms', 'funding', 'program_details')",
            [],
            |row| row.get(0),
        )
        .expect("Failed to inspect schema");
    assert_eq!(tables, 7);
}

#[test]
fn test_open_is_idempotent() {
    let (temp_file, mut db) = create_test_db();
    db.insert_program(&sample_program(1)).unwrap();
    drop(db);

    let reopened = Database::open(temp_file.path().to_str().unwrap()).unwrap();
    assert!(reopened.get_program(1).unwrap().is_some());
}

#[test]
fn test_open_unreachable_store_is_connection_error() {
    let err = Database::open("/nonexistent-copay-dir/nested/copay.db")
        .err()
        .expect("Opening inside a missing directory should fail");
    assert!(matches!(err, CopayError::Connection { .. }));
    assert_eq!(err.public_message(), "Operation failed");
}

#[test]
fn test_open_non_database_file_is_connection_error() {
    let temp_file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "not a sqlite database\n".repeat(64)).unwrap();

    let err = Database::open(temp_file.path().to_str().unwrap())
        .err()
        .expect("Opening a non-database file should fail");
    assert!(matches!(err, CopayError::Connection { .. }));
}

#[test]
fn test_insert_then_fetch_round_trip() {
    let (_temp_file, mut db) = create_test_db();
    let program = sample_program(123456);

    let id = db.insert_program(&program).expect("Failed to insert program");
    assert_eq!(id, 123456);

    let loaded = db
        .get_program(id)
        .expect("Failed to get program")
        .expect("Program should exist");
    assert_eq!(loaded, program);
}

#[test]
fn test_fetch_never_inserted_is_not_found() {
    let (_temp_file, db) = create_test_db();

    assert!(db.get_program(999999).expect("Failed to query").is_none());
}

#[test]
fn test_orphan_child_rows_do_not_make_a_program() {
    let (temp_file, db) = create_test_db();
    let raw = raw_connection(&temp_file);
    raw.execute(
        "INSERT INTO requirements (program_id, name, value) VALUES (77, 'minimum_age', '18')",
        [],
    )
    .unwrap();

    assert!(db.get_program(77).unwrap().is_none());
}

#[test]
fn test_program_500_collection_counts() {
    let (_temp_file, mut db) = create_test_db();

    let program = Program {
        program_id: 500,
        program_name: "Scenario 500".to_string(),
        program_type: "Coupon".to_string(),
        version: 0,
        coverage_eligibilities: vec![],
        requirements: vec![
            Requirement::new("minimum_age", "18"),
            Requirement::new("us_residency", "true"),
        ],
        benefits: vec![Benefit::new("max_annual_savings", "5000.00")],
        forms: vec![Form::new("Enrollment Form", "https://example.com/500")],
        funding: Some(Funding::new(true, "Data Not Available")),
        details: vec![ProgramDetail {
            eligibility: "Commercial insurance required".to_string(),
            program: "Pay as little as $0".to_string(),
            renewal: "Annual".to_string(),
            income: "Not required".to_string(),
        }],
    };
    db.insert_program(&program).unwrap();

    let loaded = db.get_program(500).unwrap().expect("Program should exist");
    assert!(loaded.coverage_eligibilities.is_empty());
    assert_eq!(loaded.requirements.len(), 2);
    assert_eq!(loaded.benefits.len(), 1);
    assert_eq!(loaded.forms.len(), 1);
    assert!(loaded.funding.is_some());
    assert_eq!(loaded.details.len(), 1);
}

#[test]
fn test_program_without_children_loads_empty_collections() {
    let (_temp_file, mut db) = create_test_db();
    let program = Program::new(42, "Bare Program", "Coupon");
    db.insert_program(&program).unwrap();

    let loaded = db.get_program(42).unwrap().expect("Program should exist");
    assert_eq!(loaded, program);
    assert!(loaded.funding.is_none());
}

#[test]
fn test_child_rows_keep_insertion_order_and_duplicates() {
    let (_temp_file, mut db) = create_test_db();
    let mut program = Program::new(9, "Ordering", "Coupon");
    program.coverage_eligibilities = vec![
        "Medicare Part D".to_string(),
        "Commercially insured".to_string(),
        "Medicare Part D".to_string(),
    ];
    program.requirements = vec![
        Requirement::new("minimum_age", "18"),
        Requirement::new("minimum_age", "21"),
    ];
    db.insert_program(&program).unwrap();

    let loaded = db.get_program(9).unwrap().unwrap();
    assert_eq!(loaded.coverage_eligibilities, program.coverage_eligibilities);
    assert_eq!(loaded.requirements, program.requirements);
}

#[test]
fn test_rows_of_other_programs_are_not_mixed_in() {
    let (_temp_file, mut db) = create_test_db();
    let first = sample_program(1);
    let mut second = sample_program(2);
    second.requirements = vec![Requirement::new("state", "CA")];

    db.insert_program(&first).unwrap();
    db.insert_program(&second).unwrap();

    assert_eq!(db.get_program(1).unwrap().unwrap(), first);
    assert_eq!(db.get_program(2).unwrap().unwrap(), second);
}

#[test]
fn test_duplicate_insert_is_rejected_and_keeps_original() {
    let (temp_file, mut db) = create_test_db();
    let original = sample_program(10);
    db.insert_program(&original).unwrap();

    let mut duplicate = sample_program(10);
    duplicate.program_name = "Impostor".to_string();
    duplicate.requirements.push(Requirement::new("extra", "row"));

    let err = db.insert_program(&duplicate).unwrap_err();
    assert!(matches!(err, CopayError::DuplicateProgram { id: 10 }));

    assert_eq!(db.get_program(10).unwrap().unwrap(), original);
    let raw = raw_connection(&temp_file);
    assert_eq!(child_rows(&raw, ChildTable::Requirements, 10), 2);
}

#[test]
fn test_replace_with_fewer_requirements_leaves_no_residue() {
    let (_temp_file, mut db) = create_test_db();
    let original = sample_program(20);
    db.insert_program(&original).unwrap();

    let mut replacement = original.clone();
    replacement.requirements = vec![Requirement::new("state", "NY")];

    let version = db.replace_program(&replacement).expect("Failed to replace");
    assert_eq!(version, 1);

    let loaded = db.get_program(20).unwrap().unwrap();
    assert_eq!(loaded.requirements, vec![Requirement::new("state", "NY")]);
    assert_eq!(loaded.benefits, original.benefits);
    assert_eq!(loaded.version, 1);
}

#[test]
fn test_replace_updates_root_and_all_collections() {
    let (_temp_file, mut db) = create_test_db();
    let mut program = sample_program(21);
    db.insert_program(&program).unwrap();

    program.program_name = "Updated Program Name".to_string();
    program.program_type = "Discount Card".to_string();
    program.coverage_eligibilities.push("Medicare Part D".to_string());
    program.requirements.push(Requirement::new("minimum_age", "21"));
    program.benefits.push(Benefit::new("min_out_of_pocket", "10.00"));
    program.forms.clear();
    program.funding = None;
    program.details.clear();

    db.replace_program(&program).unwrap();

    let loaded = db.get_program(21).unwrap().unwrap();
    program.version = 1;
    assert_eq!(loaded, program);
}

#[test]
fn test_replace_funding_level_keeps_single_record() {
    let (temp_file, mut db) = create_test_db();
    let mut program = sample_program(501);
    program.funding = Some(Funding::new(true, "Data Not Available"));
    db.insert_program(&program).unwrap();

    program.funding = Some(Funding::new(true, "5 million"));
    db.replace_program(&program).unwrap();

    let loaded = db.get_program(501).unwrap().unwrap();
    assert_eq!(
        loaded.funding.map(|f| f.current_funding_level),
        Some("5 million".to_string())
    );

    let raw = raw_connection(&temp_file);
    assert_eq!(child_rows(&raw, ChildTable::Funding, 501), 1);
}

#[test]
fn test_replace_missing_program_is_not_found_and_writes_nothing() {
    let (temp_file, mut db) = create_test_db();

    let err = db.replace_program(&sample_program(404)).unwrap_err();
    assert!(err.is_not_found());

    let raw = raw_connection(&temp_file);
    assert_eq!(total_child_rows(&raw, 404), 0);
    assert!(db.get_program(404).unwrap().is_none());
}

#[test]
fn test_replace_with_stale_version_conflicts() {
    let (_temp_file, mut db) = create_test_db();
    let program = sample_program(30);
    db.insert_program(&program).unwrap();

    let mut winner = program.clone();
    winner.program_name = "Winner".to_string();
    db.replace_program(&winner).unwrap();

    let mut stale = program.clone();
    stale.program_name = "Stale".to_string();
    stale.requirements.clear();

    let err = db.replace_program(&stale).unwrap_err();
    match err {
        CopayError::VersionConflict {
            id,
            expected,
            actual,
        } => {
            assert_eq!(id, 30);
            assert_eq!(expected, 0);
            assert_eq!(actual, 1);
        }
        other => panic!("expected VersionConflict, got {other:?}"),
    }

    let loaded = db.get_program(30).unwrap().unwrap();
    assert_eq!(loaded.program_name, "Winner");
    assert_eq!(loaded.requirements, program.requirements);
}

#[test]
fn test_replace_with_exhausted_version_is_rejected() {
    let (_temp_file, mut db) = create_test_db();
    let mut program = sample_program(31);
    program.version = u32::MAX;

    let err = db.replace_program(&program).unwrap_err();
    assert!(matches!(err, CopayError::InvalidInput { .. }));
}

#[test]
fn test_successive_replaces_increment_version() {
    let (_temp_file, mut db) = create_test_db();
    let mut program = sample_program(32);
    db.insert_program(&program).unwrap();

    for expected in 1..=3 {
        program.version = db.replace_program(&program).unwrap();
        assert_eq!(program.version, expected);
    }

    assert_eq!(db.get_program(32).unwrap().unwrap().version, 3);
}

#[test]
fn test_delete_program_removes_every_row() {
    let (temp_file, mut db) = create_test_db();
    db.insert_program(&sample_program(40)).unwrap();
    db.insert_program(&sample_program(41)).unwrap();

    assert!(db.delete_program(40).unwrap());
    assert!(db.get_program(40).unwrap().is_none());

    let raw = raw_connection(&temp_file);
    assert_eq!(total_child_rows(&raw, 40), 0);
    assert!(total_child_rows(&raw, 41) > 0);

    assert!(!db.delete_program(40).unwrap());
}

#[test]
fn test_multiple_funding_rows_are_an_integrity_error() {
    let (temp_file, mut db) = create_test_db();
    db.insert_program(&sample_program(50)).unwrap();

    let raw = raw_connection(&temp_file);
    raw.execute(
        "INSERT INTO funding (program_id, evergreen, current_funding_level) VALUES (50, 'false', 'Second')",
        [],
    )
    .unwrap();

    let err = db.get_program(50).unwrap_err();
    assert!(matches!(
        err,
        CopayError::DataIntegrity { program_id: 50, .. }
    ));
}

#[test]
fn test_unreadable_evergreen_flag_is_a_statement_failure() {
    let (temp_file, mut db) = create_test_db();
    let mut program = sample_program(51);
    program.funding = None;
    db.insert_program(&program).unwrap();

    let raw = raw_connection(&temp_file);
    raw.execute(
        "INSERT INTO funding (program_id, evergreen, current_funding_level) VALUES (51, 'maybe', 'Unknown')",
        [],
    )
    .unwrap();

    let err = db.get_program(51).unwrap_err();
    assert!(matches!(err, CopayError::Database { .. }));
}

#[test]
fn test_evergreen_stored_as_text() {
    let (temp_file, mut db) = create_test_db();
    let mut program = sample_program(52);
    program.funding = Some(Funding::new(false, "Limited"));
    db.insert_program(&program).unwrap();

    let raw = raw_connection(&temp_file);
    let stored: String = raw
        .query_row(
            "SELECT evergreen FROM funding WHERE program_id = 52",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(stored, "false");
}

#[test]
fn test_list_programs() {
    let (_temp_file, mut db) = create_test_db();
    assert!(db.list_programs().unwrap().is_empty());

    db.insert_program(&sample_program(3)).unwrap();
    db.insert_program(&Program::new(1, "Bare", "Coupon")).unwrap();

    let summaries = db.list_programs().unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].program_id, 1);
    assert_eq!(summaries[0].form_count, 0);
    assert_eq!(summaries[1].program_id, 3);
    assert_eq!(summaries[1].coverage_count, 1);
    assert_eq!(summaries[1].detail_count, 1);
    assert!(summaries[1].has_funding);
}
