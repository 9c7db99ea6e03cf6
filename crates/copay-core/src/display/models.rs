//! Display implementations for domain models.

use std::fmt;

use crate::models::{Program, ProgramSummary};

/// Writes a `## title` section, or a placeholder line when `items` is empty.
fn write_section<T>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    items: &[T],
    mut write_item: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    writeln!(f, "\n## {title}")?;
    writeln!(f)?;
    if items.is_empty() {
        writeln!(f, "None.")?;
    }
    for item in items {
        write_item(f, item)?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.program_id, self.program_name)?;
        writeln!(f)?;
        writeln!(f, "- Type: {}", self.program_type)?;
        writeln!(f, "- Version: {}", self.version)?;

        write_section(
            f,
            "Coverage Eligibilities",
            &self.coverage_eligibilities,
            |f, label| writeln!(f, "- {label}"),
        )?;
        write_section(f, "Requirements", &self.requirements, |f, r| {
            writeln!(f, "- {}: {}", r.name, r.value)
        })?;
        write_section(f, "Benefits", &self.benefits, |f, b| {
            writeln!(f, "- {}: {}", b.name, b.value)
        })?;
        write_section(f, "Forms", &self.forms, |f, form| {
            writeln!(f, "- {}: {}", form.name, form.link)
        })?;

        writeln!(f, "\n## Funding")?;
        writeln!(f)?;
        match &self.funding {
            Some(funding) => {
                let evergreen = if funding.evergreen { "yes" } else { "no" };
                writeln!(f, "- Evergreen: {evergreen}")?;
                writeln!(f, "- Current funding level: {}", funding.current_funding_level)?;
            }
            None => writeln!(f, "No funding record.")?,
        }

        write_section(f, "Details", &self.details, |f, detail| {
            writeln!(f, "### Eligibility\n\n{}\n", detail.eligibility)?;
            writeln!(f, "### Program\n\n{}\n", detail.program)?;
            writeln!(f, "### Renewal\n\n{}\n", detail.renewal)?;
            writeln!(f, "### Income\n\n{}", detail.income)
        })
    }
}

impl fmt::Display for ProgramSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}. {}** ({}, v{})",
            self.program_id, self.program_name, self.program_type, self.version
        )?;
        writeln!(
            f,
            "  {} requirements, {} benefits, {} forms, {} coverage labels, {} details{}",
            self.requirement_count,
            self.benefit_count,
            self.form_count,
            self.coverage_count,
            self.detail_count,
            if self.has_funding { ", funded" } else { "" }
        )
    }
}
