//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (companies, health)
//! - **Schemas**: Company request/response bodies plus the error wrappers
//!   ([`FieldErrorsSchema`], [`DetailSchema`]) that provide OpenAPI
//!   definitions without coupling domain types to the utoipa framework
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::companies::{CompanyRequestBody, CompanyResponseBody};
use crate::inbound::http::schemas::{DetailSchema, FieldErrorsSchema};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hirewatch backend API",
        description = "HTTP interface for tracking companies and their hiring status.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::companies::list_companies,
        crate::inbound::http::companies::create_company,
        crate::inbound::http::companies::retrieve_company,
        crate::inbound::http::companies::update_company,
        crate::inbound::http::companies::partial_update_company,
        crate::inbound::http::companies::destroy_company,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(CompanyRequestBody, CompanyResponseBody, FieldErrorsSchema, DetailSchema)),
    tags(
        (name = "companies", description = "Operations on tracked companies"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
