//! Program aggregate root.

use serde::{Deserialize, Serialize};

use super::{Benefit, Form, Funding, ProgramDetail, Requirement};

/// Caller-assigned identifier of a program. The store never generates one.
pub type ProgramId = i64;

/// A copay benefit program together with all of its child collections.
///
/// Programs are persisted and reconstructed as a whole: there is no way to
/// load or save a single collection on its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Program {
    /// Identifier, immutable once assigned; join key for every child table
    pub program_id: ProgramId,

    /// Display name
    pub program_name: String,

    /// Free-form category tag, e.g. "Coupon"
    pub program_type: String,

    /// Concurrency token; a replace only succeeds against the stored version
    #[serde(default)]
    pub version: u32,

    /// Coverage labels such as "Commercially insured", in insertion order
    #[serde(default)]
    pub coverage_eligibilities: Vec<String>,

    /// Eligibility rules
    #[serde(default)]
    pub requirements: Vec<Requirement>,

    /// Monetary or policy benefits
    #[serde(default)]
    pub benefits: Vec<Benefit>,

    /// Documents such as enrollment forms
    #[serde(default)]
    pub forms: Vec<Form>,

    /// Funding record, at most one per program
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding: Option<Funding>,

    /// Narrative details
    #[serde(default)]
    pub details: Vec<ProgramDetail>,
}

impl Program {
    /// Creates a program with empty child collections.
    pub fn new(
        program_id: ProgramId,
        program_name: impl Into<String>,
        program_type: impl Into<String>,
    ) -> Self {
        Self {
            program_id,
            program_name: program_name.into(),
            program_type: program_type.into(),
            ..Default::default()
        }
    }

    /// Total number of child rows this program occupies across all tables.
    pub fn child_row_count(&self) -> usize {
        self.coverage_eligibilities.len()
            + self.requirements.len()
            + self.benefits.len()
            + self.forms.len()
            + usize::from(self.funding.is_some())
            + self.details.len()
    }
}
