//! Hiring status choices recorded against a company.

use std::fmt;
use std::str::FromStr;

/// Hiring posture currently recorded for a company.
///
/// The wire and storage representation is the variant name itself, e.g.
/// `"Hiring"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CompanyStatus {
    /// Actively recruiting.
    #[default]
    Hiring,
    /// Recently announced layoffs.
    Layoffs,
    /// No reliable signal either way.
    Unknown,
}

impl CompanyStatus {
    /// Canonical string used in storage and API payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hiring => "Hiring",
            Self::Layoffs => "Layoffs",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string does not name a known status choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCompanyStatusError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseCompanyStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown company status: {}", self.input)
    }
}

impl std::error::Error for ParseCompanyStatusError {}

impl FromStr for CompanyStatus {
    type Err = ParseCompanyStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hiring" => Ok(Self::Hiring),
            "Layoffs" => Ok(Self::Layoffs),
            "Unknown" => Ok(Self::Unknown),
            other => Err(ParseCompanyStatusError {
                input: other.to_owned(),
            }),
        }
    }
}
