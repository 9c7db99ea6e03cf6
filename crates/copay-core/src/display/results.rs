//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Program, ProgramId};

/// Wrapper type for displaying the result of an insert.
///
/// # Examples
///
/// ```rust
/// use copay_core::{display::CreateResult, models::Program};
///
/// let result = CreateResult::new(Program::new(500, "Acme Savings Card", "Coupon"));
/// println!("{}", result);
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Program> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Inserted program with ID: {}", self.resource.program_id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of a replace.
///
/// Shows which child collections changed size compared to the previously
/// stored program, followed by the program as stored now.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl UpdateResult<Program> {
    /// Describes how `current` differs from `previous` at collection level.
    pub fn between(previous: &Program, current: Program) -> Self {
        let mut changes = Vec::new();

        if previous.program_name != current.program_name {
            changes.push(format!("Renamed to '{}'", current.program_name));
        }
        if previous.program_type != current.program_type {
            changes.push(format!("Type changed to '{}'", current.program_type));
        }

        let counts = [
            (
                "coverage eligibilities",
                previous.coverage_eligibilities.len(),
                current.coverage_eligibilities.len(),
            ),
            ("requirements", previous.requirements.len(), current.requirements.len()),
            ("benefits", previous.benefits.len(), current.benefits.len()),
            ("forms", previous.forms.len(), current.forms.len()),
            ("details", previous.details.len(), current.details.len()),
        ];
        for (label, before, after) in counts {
            if before != after {
                changes.push(format!("{label}: {before} -> {after}"));
            }
        }

        if previous.funding != current.funding {
            changes.push("Funding replaced".to_string());
        }

        Self::with_changes(current, changes)
    }
}

impl fmt::Display for UpdateResult<Program> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Replaced program with ID: {} (now version {})",
            self.resource.program_id, self.resource.version
        )?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of a delete.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<ProgramId> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted program with ID: {}", self.resource)
    }
}
