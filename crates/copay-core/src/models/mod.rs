//! Data models for copay programs.
//!
//! A [`Program`] is the aggregate root; it owns six child collections
//! (coverage eligibilities, [`Requirement`]s, [`Benefit`]s, [`Form`]s, an
//! optional [`Funding`] record and [`ProgramDetail`]s) that are only ever
//! stored, replaced and loaded together with it. Display implementations
//! for these models live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use copay_core::models::{Benefit, Funding, Program, Requirement};
//!
//! let mut program = Program::new(500, "Acme Savings Card", "Coupon");
//! program.coverage_eligibilities.push("Commercially insured".to_string());
//! program.requirements.push(Requirement::new("minimum_age", "18"));
//! program.benefits.push(Benefit::new("max_annual_savings", "5000.00"));
//! program.funding = Some(Funding::new(true, "Data Not Available"));
//!
//! assert_eq!(program.child_row_count(), 4);
//! println!("{}", program); // markdown
//! ```

pub mod children;
pub mod program;
pub mod summary;


pub use children::{Benefit, Form, Funding, ProgramDetail, Requirement};
pub use program::{Program, ProgramId};
pub use summary::ProgramSummary;
