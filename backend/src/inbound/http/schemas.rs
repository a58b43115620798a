//! OpenAPI schema definitions for error response bodies.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.

use std::collections::BTreeMap;

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ValidationErrors`].
///
/// Validation failures serialise as a bare object mapping each rejected
/// field to the list of messages recorded against it.
#[derive(ToSchema)]
#[schema(as = crate::domain::ValidationErrors)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FieldErrorsSchema(BTreeMap<String, Vec<String>>);

/// OpenAPI schema for single-sentence error bodies.
///
/// Parse failures, missing resources, and redacted server errors all render
/// as `{"detail": "..."}`.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DetailSchema {
    /// Human-readable description of the failure.
    #[schema(example = "Not found.")]
    detail: String,
}
