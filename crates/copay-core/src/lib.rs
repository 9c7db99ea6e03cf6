//! Core library for the copay program store.
//!
//! This crate persists and reconstructs copay benefit programs: a root row
//! plus six child collections (coverage eligibilities, requirements,
//! benefits, forms, funding and narrative details) spread over seven SQLite
//! tables. Every write covers the whole aggregate inside one transaction, so
//! readers see either a complete program or no program at all.
//!
//! # Layers
//!
//! - [`db`]: synchronous connection provider, child-collection accessors and
//!   the aggregate repository operations
//! - [`store`]: async facade that runs each operation on its own connection
//! - [`models`]: the program aggregate and its row types
//! - [`display`]: markdown formatting for terminal output
//! - [`error`]: error taxonomy, including the caller-safe message mapping
//!
//! # Quick Start
//!
//! ```rust
//! use copay_core::{Database, models::{Funding, Program}};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut db = Database::open("copay.db")?;
//!
//! let mut program = Program::new(501, "Acme Savings Card", "Coupon");
//! program.funding = Some(Funding::new(true, "Data Not Available"));
//! db.insert_program(&program)?;
//!
//! let mut stored = db.get_program(501)?.expect("just inserted");
//! stored.funding = Some(Funding::new(true, "5 million"));
//! db.replace_program(&stored)?;
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use db::{ChildTable, ConnectionOptions, Database};
pub use display::{CreateResult, DeleteResult, ProgramSummaries, UpdateResult};
pub use error::{CopayError, Result};
pub use models::{
    Benefit, Form, Funding, Program, ProgramDetail, ProgramId, ProgramSummary, Requirement,
};
pub use store::{ProgramStore, ProgramStoreBuilder};
