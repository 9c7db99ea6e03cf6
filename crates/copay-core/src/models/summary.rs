//! Program summary types and functionality.

use serde::{Deserialize, Serialize};

use super::{Program, ProgramId};

/// Root row of a program with the size of each child collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgramSummary {
    /// Program ID
    pub program_id: ProgramId,
    /// Display name
    pub program_name: String,
    /// Category tag
    pub program_type: String,
    /// Stored concurrency token
    pub version: u32,
    /// Number of coverage eligibility labels
    pub coverage_count: u32,
    /// Number of requirements
    pub requirement_count: u32,
    /// Number of benefits
    pub benefit_count: u32,
    /// Number of forms
    pub form_count: u32,
    /// Whether a funding record exists
    pub has_funding: bool,
    /// Number of detail records
    pub detail_count: u32,
}

/// Collection size as stored in a summary, saturating at `u32::MAX`.
fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl From<&Program> for ProgramSummary {
    fn from(program: &Program) -> Self {
        Self {
            program_id: program.program_id,
            program_name: program.program_name.clone(),
            program_type: program.program_type.clone(),
            version: program.version,
            coverage_count: count(program.coverage_eligibilities.len()),
            requirement_count: count(program.requirements.len()),
            benefit_count: count(program.benefits.len()),
            form_count: count(program.forms.len()),
            has_funding: program.funding.is_some(),
            detail_count: count(program.details.len()),
        }
    }
}
