//! Company aggregate: a tracked employer and its recorded hiring posture.
//!
//! Write payloads arrive as an unvalidated [`CompanyDraft`] and are promoted
//! to validated shapes before they touch a repository: [`CompanyAttributes`]
//! for full writes and [`CompanyPatch`] for partial ones. Validation
//! accumulates every field failure rather than stopping at the first, and the
//! messages match what long-lived API clients already parse.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::error::{Error, ValidationErrors};

pub mod service;
mod status;

pub use service::CompanyService;
pub use status::{CompanyStatus, ParseCompanyStatusError};

/// Maximum number of characters allowed in a company name.
pub const NAME_MAX_LENGTH: usize = 200;

/// Message attached to a field the client omitted from a full write.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Message attached to a field supplied as empty or whitespace only.
pub const BLANK_MESSAGE: &str = "This field may not be blank.";

/// Message attached to `name` when another company already uses it.
pub const DUPLICATE_NAME_MESSAGE: &str = "company with this name already exists.";

/// Message attached to `status` when the value names no known choice.
pub fn invalid_choice_message(value: &str) -> String {
    format!("\"{value}\" is not a valid choice.")
}

/// Message attached to `name` when it exceeds [`NAME_MAX_LENGTH`].
pub fn name_too_long_message() -> String {
    format!("Ensure this field has no more than {NAME_MAX_LENGTH} characters.")
}

/// Company display name.
///
/// Surrounding whitespace is stripped on construction. The stored value is
/// never blank and never longer than [`NAME_MAX_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompanyName(String);

impl CompanyName {
    /// Validate `raw` against the name rules.
    pub fn new(raw: impl Into<String>) -> Result<Self, CompanyNameError> {
        let trimmed = raw.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(CompanyNameError::Blank);
        }
        if trimmed.chars().count() > NAME_MAX_LENGTH {
            return Err(CompanyNameError::TooLong);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the validated name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the validated name.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CompanyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rejections raised by [`CompanyName::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyNameError {
    /// Empty once surrounding whitespace is removed.
    Blank,
    /// Longer than [`NAME_MAX_LENGTH`] characters.
    TooLong,
}

impl CompanyNameError {
    /// Client-facing message for this rejection.
    pub fn message(self) -> String {
        match self {
            Self::Blank => BLANK_MESSAGE.to_owned(),
            Self::TooLong => name_too_long_message(),
        }
    }
}

impl std::fmt::Display for CompanyNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CompanyNameError {}

/// A tracked company and the hiring posture recorded against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    /// Server-assigned identifier.
    pub id: Uuid,
    /// Unique display name.
    pub name: CompanyName,
    /// Current hiring posture.
    pub status: CompanyStatus,
    /// Free-form notes, empty by default.
    pub notes: String,
    /// Link to the company's application page, empty by default.
    pub application_link: String,
    /// When the record was last written. Server-assigned on every write.
    pub last_update: DateTime<Utc>,
}

impl Company {
    /// Merge validated partial updates, leaving absent fields untouched.
    pub fn apply_patch(&mut self, patch: CompanyPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(application_link) = patch.application_link {
            self.application_link = application_link;
        }
    }
}

/// Unvalidated company write payload, as parsed from a request body.
///
/// A `None` field is one the client omitted. What omission means is decided
/// by the promotion used: [`CompanyDraft::into_attributes`] substitutes
/// defaults for a full write, [`CompanyDraft::into_patch`] keeps the stored
/// value for a partial one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyDraft {
    /// Requested display name.
    pub name: Option<String>,
    /// Requested status choice, still in wire form.
    pub status: Option<String>,
    /// Requested notes text.
    pub notes: Option<String>,
    /// Requested application link.
    pub application_link: Option<String>,
}

impl CompanyDraft {
    /// Validate the draft as a full write.
    ///
    /// `name` is required; `status` falls back to [`CompanyStatus::Hiring`]
    /// and the text fields fall back to empty strings.
    pub fn into_attributes(self) -> Result<CompanyAttributes, Error> {
        let mut errors = ValidationErrors::new();
        let name = match self.name {
            Some(raw) => validate_name(raw, &mut errors),
            None => {
                errors.push("name", REQUIRED_MESSAGE);
                None
            }
        };
        let status = match self.status {
            Some(raw) => validate_status(&raw, &mut errors),
            None => Some(CompanyStatus::default()),
        };
        let notes = self.notes.unwrap_or_default();
        let application_link = self.application_link.unwrap_or_default();
        match (name, status) {
            (Some(name), Some(status)) => Ok(CompanyAttributes {
                name,
                status,
                notes,
                application_link,
            }),
            _ => Err(Error::Validation(errors)),
        }
    }

    /// Validate the draft as a partial write.
    ///
    /// Only fields the client supplied are checked. Whatever the client
    /// omitted stays untouched when the patch is applied.
    pub fn into_patch(self) -> Result<CompanyPatch, Error> {
        let mut errors = ValidationErrors::new();
        let name = self.name.and_then(|raw| validate_name(raw, &mut errors));
        let status = self
            .status
            .and_then(|raw| validate_status(&raw, &mut errors));
        let patch = CompanyPatch {
            name,
            status,
            notes: self.notes,
            application_link: self.application_link,
        };
        errors.into_result().map(|()| patch)
    }
}

fn validate_name(raw: String, errors: &mut ValidationErrors) -> Option<CompanyName> {
    match CompanyName::new(raw) {
        Ok(name) => Some(name),
        Err(err) => {
            errors.push("name", err.message());
            None
        }
    }
}

fn validate_status(raw: &str, errors: &mut ValidationErrors) -> Option<CompanyStatus> {
    match raw.parse() {
        Ok(status) => Some(status),
        Err(ParseCompanyStatusError { .. }) => {
            errors.push("status", invalid_choice_message(raw));
            None
        }
    }
}

/// Validated company attributes for a full write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyAttributes {
    /// Validated display name.
    pub name: CompanyName,
    /// Resolved status choice.
    pub status: CompanyStatus,
    /// Notes text, defaulted to empty when omitted.
    pub notes: String,
    /// Application link, defaulted to empty when omitted.
    pub application_link: String,
}

/// Validated field updates for a partial write. `None` keeps the stored
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyPatch {
    /// Replacement display name, when supplied.
    pub name: Option<CompanyName>,
    /// Replacement status, when supplied.
    pub status: Option<CompanyStatus>,
    /// Replacement notes, when supplied.
    pub notes: Option<String>,
    /// Replacement application link, when supplied.
    pub application_link: Option<String>,
}
