//! Driving port for company reads.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::Error;
use crate::domain::ports::CompanyPayload;

/// Fetch a single company by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchCompanyRequest {
    /// Identifier of the company to fetch.
    pub id: Uuid,
}

/// Company read use cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompaniesQuery: Send + Sync {
    /// Every tracked company, most recently updated first.
    async fn list_companies(&self) -> Result<Vec<CompanyPayload>, Error>;

    /// A single company by identifier.
    async fn fetch_company(&self, request: FetchCompanyRequest) -> Result<CompanyPayload, Error>;
}

/// Empty-store query fixture for wiring paths that run without a database.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCompaniesQuery;

#[async_trait]
impl CompaniesQuery for FixtureCompaniesQuery {
    async fn list_companies(&self) -> Result<Vec<CompanyPayload>, Error> {
        Ok(Vec::new())
    }

    async fn fetch_company(&self, _request: FetchCompanyRequest) -> Result<CompanyPayload, Error> {
        Err(Error::not_found())
    }
}
