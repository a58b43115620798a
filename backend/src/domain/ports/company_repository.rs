//! Driven port for company persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::companies::Company;

/// Failures surfaced by company repositories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompanyRepositoryError {
    /// The backing store could not be reached or a connection checkout
    /// failed.
    #[error("company repository connection failed: {message}")]
    Connection {
        /// Operator-facing description of the connectivity failure.
        message: String,
    },
    /// A statement failed after a connection was established.
    #[error("company repository query failed: {message}")]
    Query {
        /// Operator-facing description of the statement failure.
        message: String,
    },
    /// An insert or update collided with the unique name index.
    #[error("company name already stored")]
    DuplicateName,
}

impl CompanyRepositoryError {
    /// Connectivity failure with an operator-facing message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Statement failure with an operator-facing message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence operations required by the company use cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Persist a new company.
    async fn insert(&self, company: &Company) -> Result<(), CompanyRepositoryError>;

    /// Fetch a company by identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, CompanyRepositoryError>;

    /// Fetch a company by exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Company>, CompanyRepositoryError>;

    /// Every stored company, most recently written first.
    async fn list_ordered(&self) -> Result<Vec<Company>, CompanyRepositoryError>;

    /// Overwrite a stored company. Returns `false` when the id is unknown.
    async fn update(&self, company: &Company) -> Result<bool, CompanyRepositoryError>;

    /// Delete by identifier. Returns `false` when the id is unknown.
    async fn delete(&self, id: Uuid) -> Result<bool, CompanyRepositoryError>;
}

/// No-op repository for wiring paths that run without a database.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCompanyRepository;

#[async_trait]
impl CompanyRepository for FixtureCompanyRepository {
    async fn insert(&self, _company: &Company) -> Result<(), CompanyRepositoryError> {
        Ok(())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Company>, CompanyRepositoryError> {
        Ok(None)
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Company>, CompanyRepositoryError> {
        Ok(None)
    }

    async fn list_ordered(&self) -> Result<Vec<Company>, CompanyRepositoryError> {
        Ok(Vec::new())
    }

    async fn update(&self, _company: &Company) -> Result<bool, CompanyRepositoryError> {
        Ok(false)
    }

    async fn delete(&self, _id: Uuid) -> Result<bool, CompanyRepositoryError> {
        Ok(false)
    }
}
