//! Row types owned by a program.

use serde::{de, Deserialize, Deserializer, Serialize};

/// One eligibility rule, e.g. `minimum_age` = `18`.
///
/// Names are not unique within a program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Requirement {
    pub name: String,
    pub value: String,
}

/// A monetary or policy benefit, e.g. `max_annual_savings` = `5000.00`.
///
/// Amounts are kept as text exactly as the ingestion side produced them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Benefit {
    pub name: String,
    pub value: String,
}

/// A named document link, typically an enrollment form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Form {
    pub name: String,
    pub link: String,
}

/// Funding state of a program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Funding {
    /// Whether the program's funding renews indefinitely (stored as "true"/"false")
    #[serde(deserialize_with = "deserialize_evergreen")]
    pub evergreen: bool,
    /// Free-text funding level, e.g. "Data Not Available"
    pub current_funding_level: String,
}

/// Narrative text describing a program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgramDetail {
    pub eligibility: String,
    pub program: String,
    pub renewal: String,
    pub income: String,
}

impl Requirement {
    /// Creates a requirement from its name and value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Benefit {
    /// Creates a benefit from its name and value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Form {
    /// Creates a form from its name and link.
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }
}

impl Funding {
    /// Creates a funding record.
    pub fn new(evergreen: bool, current_funding_level: impl Into<String>) -> Self {
        Self {
            evergreen,
            current_funding_level: current_funding_level.into(),
        }
    }
}

/// Accepts a JSON boolean or the text form ingestion produces ("true"/"false",
/// any case).
fn deserialize_evergreen<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Text(text) if text.eq_ignore_ascii_case("true") => Ok(true),
        Flag::Text(text) if text.eq_ignore_ascii_case("false") => Ok(false),
        Flag::Text(text) => Err(de::Error::custom(format!(
            "evergreen must be true or false, got {text:?}"
        ))),
    }
}
