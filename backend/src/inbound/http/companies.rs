//! Company collection HTTP handlers.
//!
//! ```text
//! GET    /companies/
//! POST   /companies/
//! GET    /companies/{id}/
//! PUT    /companies/{id}/
//! PATCH  /companies/{id}/
//! DELETE /companies/{id}/
//! ```
//!
//! Writes accept a JSON object of client-writable fields; `id` and
//! `last_update` are server-managed, so client-supplied values for them are
//! ignored along with any unrecognised fields. Listing serves a bare JSON
//! array unless page-number pagination is configured on
//! [`HttpState`](crate::inbound::http::state::HttpState), in which case the
//! collection is wrapped in a `count`/`next`/`previous`/`results` envelope.

use actix_web::{HttpRequest, HttpResponse, delete, get, patch, post, put, web};
use chrono::SecondsFormat;
use pagination::{PageNumber, PageNumberPaginator};
use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::Error;
use crate::domain::companies::CompanyDraft;
use crate::domain::ports::{
    CompanyPayload, CreateCompanyRequest, DeleteCompanyRequest, FetchCompanyRequest,
    PatchCompanyRequest, ReplaceCompanyRequest,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{DetailSchema, FieldErrorsSchema};
use crate::inbound::http::state::HttpState;

const INVALID_PAGE_DETAIL: &str = "Invalid page.";

/// Client-writable company fields.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CompanyRequestBody {
    /// Display name. Required on creation and full replacement.
    pub name: Option<String>,
    /// Hiring posture: `Hiring`, `Layoffs` or `Unknown`.
    #[schema(example = "Hiring")]
    pub status: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Link to the company's application page.
    pub application_link: Option<String>,
}

impl From<CompanyRequestBody> for CompanyDraft {
    fn from(body: CompanyRequestBody) -> Self {
        Self {
            name: body.name,
            status: body.status,
            notes: body.notes,
            application_link: body.application_link,
        }
    }
}

/// Wire representation of a stored company.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CompanyResponseBody {
    /// Server-assigned identifier.
    #[schema(format = "uuid")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Hiring posture.
    #[schema(example = "Hiring")]
    pub status: String,
    /// Free-form notes.
    pub notes: String,
    /// Link to the company's application page.
    pub application_link: String,
    /// Time of the last write, RFC 3339 with microsecond precision.
    #[schema(format = "date-time")]
    pub last_update: String,
}

impl From<CompanyPayload> for CompanyResponseBody {
    fn from(payload: CompanyPayload) -> Self {
        Self {
            id: payload.id.to_string(),
            name: payload.name,
            status: payload.status.as_str().to_owned(),
            notes: payload.notes,
            application_link: payload.application_link,
            last_update: payload
                .last_update
                .to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<String>,
}

/// Identifiers that do not parse as UUIDs address no stored company.
fn parse_company_id(raw: &str) -> Result<Uuid, Error> {
    Uuid::parse_str(raw).map_err(|_| Error::not_found())
}

/// Parse a request body into a write draft.
///
/// An empty body reads as an empty draft so that field validation reports
/// what is missing; anything else must be a JSON object.
fn parse_company_draft(body: &[u8]) -> Result<CompanyDraft, Error> {
    if body.is_empty() {
        return Ok(CompanyDraft::default());
    }
    let parsed: CompanyRequestBody = serde_json::from_slice(body)
        .map_err(|err| Error::malformed(format!("JSON parse error - {err}")))?;
    Ok(parsed.into())
}

fn request_base_url(request: &HttpRequest) -> Result<Url, Error> {
    let info = request.connection_info();
    let raw = format!("{}://{}{}", info.scheme(), info.host(), request.uri());
    Url::parse(&raw).map_err(|err| Error::internal(format!("request URL failed to parse: {err}")))
}

/// List companies, most recently updated first.
///
/// Serves a bare JSON array by default. When page-number pagination is
/// configured the collection is wrapped in a `count`/`next`/`previous`/
/// `results` envelope and `?page=N` selects a page.
#[utoipa::path(
    get,
    path = "/companies/",
    params(
        ("page" = Option<String>, Query, description = "Page number within the paginated collection")
    ),
    responses(
        (status = 200, description = "Companies ordered by most recent update", body = [CompanyResponseBody]),
        (status = 404, description = "Page out of range", body = DetailSchema),
        (status = 503, description = "Service unavailable", body = DetailSchema)
    ),
    tags = ["companies"],
    operation_id = "listCompanies"
)]
#[get("/")]
pub async fn list_companies(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
    request: HttpRequest,
) -> ApiResult<HttpResponse> {
    let companies = state.companies_query.list_companies().await?;
    let results: Vec<CompanyResponseBody> = companies
        .into_iter()
        .map(CompanyResponseBody::from)
        .collect();

    let Some(page_size) = state.page_size else {
        return Ok(HttpResponse::Ok().json(results));
    };

    let number = PageNumber::parse(query.page.as_deref())
        .map_err(|_| Error::not_found_detail(INVALID_PAGE_DETAIL))?;
    let base_url = request_base_url(&request)?;
    let page = PageNumberPaginator::new(page_size)
        .paginate(results, number, &base_url)
        .map_err(|_| Error::not_found_detail(INVALID_PAGE_DETAIL))?;

    Ok(HttpResponse::Ok().json(page))
}

/// Validate and store a new company.
#[utoipa::path(
    post,
    path = "/companies/",
    request_body = CompanyRequestBody,
    responses(
        (status = 201, description = "Company stored", body = CompanyResponseBody),
        (status = 400, description = "Validation failed", body = FieldErrorsSchema),
        (status = 503, description = "Service unavailable", body = DetailSchema)
    ),
    tags = ["companies"],
    operation_id = "createCompany"
)]
#[post("/")]
pub async fn create_company(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let draft = parse_company_draft(&body)?;
    let payload = state
        .companies
        .create_company(CreateCompanyRequest { draft })
        .await?;
    Ok(HttpResponse::Created().json(CompanyResponseBody::from(payload)))
}

/// Fetch a single company by identifier.
#[utoipa::path(
    get,
    path = "/companies/{id}/",
    params(("id" = String, Path, description = "Company identifier")),
    responses(
        (status = 200, description = "The stored company", body = CompanyResponseBody),
        (status = 404, description = "No such company", body = DetailSchema),
        (status = 503, description = "Service unavailable", body = DetailSchema)
    ),
    tags = ["companies"],
    operation_id = "retrieveCompany"
)]
#[get("/{id}/")]
pub async fn retrieve_company(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<CompanyResponseBody>> {
    let id = parse_company_id(&path.into_inner())?;
    let payload = state
        .companies_query
        .fetch_company(FetchCompanyRequest { id })
        .await?;
    Ok(web::Json(CompanyResponseBody::from(payload)))
}

/// Fully replace a stored company.
///
/// Omitted optional fields are reset to their defaults.
#[utoipa::path(
    put,
    path = "/companies/{id}/",
    params(("id" = String, Path, description = "Company identifier")),
    request_body = CompanyRequestBody,
    responses(
        (status = 200, description = "The replaced company", body = CompanyResponseBody),
        (status = 400, description = "Validation failed", body = FieldErrorsSchema),
        (status = 404, description = "No such company", body = DetailSchema),
        (status = 503, description = "Service unavailable", body = DetailSchema)
    ),
    tags = ["companies"],
    operation_id = "updateCompany"
)]
#[put("/{id}/")]
pub async fn update_company(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<web::Json<CompanyResponseBody>> {
    let id = parse_company_id(&path.into_inner())?;
    let draft = parse_company_draft(&body)?;
    let payload = state
        .companies
        .replace_company(ReplaceCompanyRequest { id, draft })
        .await?;
    Ok(web::Json(CompanyResponseBody::from(payload)))
}

/// Merge supplied fields into a stored company.
///
/// Omitted fields keep their stored values.
#[utoipa::path(
    patch,
    path = "/companies/{id}/",
    params(("id" = String, Path, description = "Company identifier")),
    request_body = CompanyRequestBody,
    responses(
        (status = 200, description = "The updated company", body = CompanyResponseBody),
        (status = 400, description = "Validation failed", body = FieldErrorsSchema),
        (status = 404, description = "No such company", body = DetailSchema),
        (status = 503, description = "Service unavailable", body = DetailSchema)
    ),
    tags = ["companies"],
    operation_id = "partialUpdateCompany"
)]
#[patch("/{id}/")]
pub async fn partial_update_company(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<web::Json<CompanyResponseBody>> {
    let id = parse_company_id(&path.into_inner())?;
    let draft = parse_company_draft(&body)?;
    let payload = state
        .companies
        .patch_company(PatchCompanyRequest { id, draft })
        .await?;
    Ok(web::Json(CompanyResponseBody::from(payload)))
}

/// Delete a stored company.
#[utoipa::path(
    delete,
    path = "/companies/{id}/",
    params(("id" = String, Path, description = "Company identifier")),
    responses(
        (status = 204, description = "Company deleted"),
        (status = 404, description = "No such company", body = DetailSchema),
        (status = 503, description = "Service unavailable", body = DetailSchema)
    ),
    tags = ["companies"],
    operation_id = "destroyCompany"
)]
#[delete("/{id}/")]
pub async fn destroy_company(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_company_id(&path.into_inner())?;
    state
        .companies
        .delete_company(DeleteCompanyRequest { id })
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "companies_tests.rs"]
mod tests;
