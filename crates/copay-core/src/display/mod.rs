//! Display formatting for programs and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrapper types here add context for lists and for the outcome of
//! insert, replace and delete operations. All output is markdown so the CLI
//! can render it richly or print it as plain text.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (ProgramSummaries)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use copay_core::{display::CreateResult, models::Program};
//!
//! let program = Program::new(500, "Acme Savings Card", "Coupon");
//! let output = CreateResult::new(program).to_string();
//! assert!(output.contains("Inserted program with ID: 500"));
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::ProgramSummaries;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
