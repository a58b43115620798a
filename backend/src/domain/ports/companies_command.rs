//! Driving port for company writes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::companies::{Company, CompanyDraft, CompanyStatus};
use crate::domain::error::Error;

/// Company state handed back to inbound adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyPayload {
    /// Server-assigned identifier.
    pub id: Uuid,
    /// Validated display name.
    pub name: String,
    /// Current hiring posture.
    pub status: CompanyStatus,
    /// Free-form notes.
    pub notes: String,
    /// Link to the company's application page.
    pub application_link: String,
    /// When the record was last written.
    pub last_update: DateTime<Utc>,
}

impl From<Company> for CompanyPayload {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name.into_string(),
            status: company.status,
            notes: company.notes,
            application_link: company.application_link,
            last_update: company.last_update,
        }
    }
}

/// Create a company from an unvalidated draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateCompanyRequest {
    /// The write payload as parsed from the request body.
    pub draft: CompanyDraft,
}

/// Fully replace the company addressed by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceCompanyRequest {
    /// Identifier of the company to replace.
    pub id: Uuid,
    /// The write payload as parsed from the request body.
    pub draft: CompanyDraft,
}

/// Partially update the company addressed by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchCompanyRequest {
    /// Identifier of the company to update.
    pub id: Uuid,
    /// The write payload as parsed from the request body.
    pub draft: CompanyDraft,
}

/// Delete the company addressed by `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCompanyRequest {
    /// Identifier of the company to delete.
    pub id: Uuid,
}

/// Company write use cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompaniesCommand: Send + Sync {
    /// Validate and store a new company.
    async fn create_company(&self, request: CreateCompanyRequest)
    -> Result<CompanyPayload, Error>;

    /// Validate and fully replace a stored company, re-applying defaults for
    /// omitted fields.
    async fn replace_company(
        &self,
        request: ReplaceCompanyRequest,
    ) -> Result<CompanyPayload, Error>;

    /// Validate and merge supplied fields into a stored company.
    async fn patch_company(&self, request: PatchCompanyRequest) -> Result<CompanyPayload, Error>;

    /// Remove a stored company.
    async fn delete_company(&self, request: DeleteCompanyRequest) -> Result<(), Error>;
}

/// Command fixture for wiring paths that run without a database.
///
/// Creation validates and echoes the draft; everything addressing stored
/// state reports the record missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCompaniesCommand;

#[async_trait]
impl CompaniesCommand for FixtureCompaniesCommand {
    async fn create_company(
        &self,
        request: CreateCompanyRequest,
    ) -> Result<CompanyPayload, Error> {
        let attributes = request.draft.into_attributes()?;
        Ok(CompanyPayload {
            id: Uuid::new_v4(),
            name: attributes.name.into_string(),
            status: attributes.status,
            notes: attributes.notes,
            application_link: attributes.application_link,
            last_update: Utc::now(),
        })
    }

    async fn replace_company(
        &self,
        _request: ReplaceCompanyRequest,
    ) -> Result<CompanyPayload, Error> {
        Err(Error::not_found())
    }

    async fn patch_company(&self, _request: PatchCompanyRequest) -> Result<CompanyPayload, Error> {
        Err(Error::not_found())
    }

    async fn delete_company(&self, _request: DeleteCompanyRequest) -> Result<(), Error> {
        Err(Error::not_found())
    }
}
