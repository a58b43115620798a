//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter in
//! `inbound::http::error` maps them to status codes and response bodies.

use std::collections::BTreeMap;

use serde::Serialize;

/// Validation messages keyed by the field that failed.
///
/// Serialises transparently as a JSON object mapping each field name to the
/// list of messages recorded against it. `BTreeMap` keeps field order stable
/// across responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` against `field`, keeping earlier messages for the
    /// same field.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Collection holding a single message for a single field.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    /// True when no messages have been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Finish an accumulation pass: `Ok(())` when empty, otherwise the
    /// collected messages wrapped in [`Error::Validation`].
    pub fn into_result(self) -> Result<(), Error> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(self))
        }
    }
}

/// Failures surfaced by domain operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The request payload failed validation.
    #[error("validation failed")]
    Validation(ValidationErrors),
    /// The request body could not be parsed.
    #[error("{detail}")]
    Malformed {
        /// Client-facing description of the parse failure.
        detail: String,
    },
    /// The addressed resource does not exist.
    #[error("{detail}")]
    NotFound {
        /// Client-facing description of what was missing.
        detail: String,
    },
    /// A backing dependency is temporarily unable to serve requests.
    #[error("{message}")]
    Unavailable {
        /// Operator-facing description of the outage.
        message: String,
    },
    /// An unexpected failure inside the domain or an adapter.
    #[error("{message}")]
    Internal {
        /// Operator-facing description, never returned to clients.
        message: String,
    },
}

impl Error {
    /// Wrap accumulated validation messages.
    pub fn validation(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }

    /// Validation failure carrying a single message for a single field.
    pub fn field_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(ValidationErrors::single(field, message))
    }

    /// The request body could not be parsed.
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::Malformed {
            detail: detail.into(),
        }
    }

    /// The addressed resource does not exist.
    pub fn not_found() -> Self {
        Self::NotFound {
            detail: "Not found.".to_owned(),
        }
    }

    /// Missing resource with a caller-supplied detail message.
    pub fn not_found_detail(detail: impl Into<String>) -> Self {
        Self::NotFound {
            detail: detail.into(),
        }
    }

    /// A backing dependency is temporarily unreachable.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// An unexpected internal failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
