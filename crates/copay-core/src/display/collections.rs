//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::ProgramSummary;

/// Newtype wrapper for displaying collections of program summaries.
///
/// # Examples
///
/// ```rust
/// use copay_core::{display::ProgramSummaries, models::{Program, ProgramSummary}};
///
/// let program = Program::new(1, "My Program", "Coupon");
/// let summaries = ProgramSummaries(vec![ProgramSummary::from(&program)]);
/// assert!(summaries.to_string().contains("My Program"));
/// ```
pub struct ProgramSummaries(pub Vec<ProgramSummary>);

impl ProgramSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of program summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the program summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, ProgramSummary> {
        self.0.iter()
    }
}

impl Index<usize> for ProgramSummaries {
    type Output = ProgramSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Vec<ProgramSummary>> for ProgramSummaries {
    fn from(summaries: Vec<ProgramSummary>) -> Self {
        Self(summaries)
    }
}

impl fmt::Display for ProgramSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No programs found.");
        }

        for summary in self.iter() {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}
