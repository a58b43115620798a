//! Company domain service implementing the command and query driving ports.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use uuid::Uuid;

use crate::domain::companies::{Company, CompanyName, DUPLICATE_NAME_MESSAGE};
use crate::domain::error::Error;
use crate::domain::ports::{
    CompaniesCommand, CompaniesQuery, CompanyPayload, CompanyRepository, CompanyRepositoryError,
    CreateCompanyRequest, DeleteCompanyRequest, FetchCompanyRequest, PatchCompanyRequest,
    ReplaceCompanyRequest,
};

/// Translate repository failures into the domain taxonomy.
///
/// Name collisions become the same validation error the pre-write uniqueness
/// check produces, so a race between the check and the write surfaces to
/// clients identically.
fn map_repository_error(err: CompanyRepositoryError) -> Error {
    match err {
        CompanyRepositoryError::Connection { message } => Error::unavailable(message),
        CompanyRepositoryError::Query { message } => Error::internal(message),
        CompanyRepositoryError::DuplicateName => duplicate_name_error(),
    }
}

fn duplicate_name_error() -> Error {
    Error::field_error("name", DUPLICATE_NAME_MESSAGE)
}

/// Company use cases backed by a repository and a clock.
///
/// `last_update` is stamped from the injected clock on every successful
/// write; client-supplied values never reach storage.
/// ```rust,no_run
/// # use std::sync::Arc;
/// # use hirewatch_backend::domain::companies::CompanyService;
/// # use hirewatch_backend::domain::ports::FixtureCompanyRepository;
/// # use mockable::DefaultClock;
/// let service = CompanyService::new(
///     Arc::new(FixtureCompanyRepository),
///     Arc::new(DefaultClock),
/// );
/// # drop(service);
/// ```
#[derive(Clone)]
pub struct CompanyService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> CompanyService<R> {
    /// Create a new service over `repository`, stamping writes from `clock`.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

impl<R> CompanyService<R>
where
    R: CompanyRepository,
{
    /// Reject `name` when another company already holds it.
    ///
    /// `current` carries the id of the record being rewritten so a company
    /// may keep its own name.
    async fn ensure_name_available(
        &self,
        name: &CompanyName,
        current: Option<Uuid>,
    ) -> Result<(), Error> {
        let existing = self
            .repository
            .find_by_name(name.as_str())
            .await
            .map_err(map_repository_error)?;
        match existing {
            Some(found) if current != Some(found.id) => Err(duplicate_name_error()),
            _ => Ok(()),
        }
    }

    async fn load_company(&self, id: Uuid) -> Result<Company, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(Error::not_found)
    }

    async fn store_rewrite(&self, company: Company) -> Result<CompanyPayload, Error> {
        let updated = self
            .repository
            .update(&company)
            .await
            .map_err(map_repository_error)?;
        if updated {
            Ok(CompanyPayload::from(company))
        } else {
            Err(Error::not_found())
        }
    }
}

#[async_trait]
impl<R> CompaniesCommand for CompanyService<R>
where
    R: CompanyRepository,
{
    async fn create_company(
        &self,
        request: CreateCompanyRequest,
    ) -> Result<CompanyPayload, Error> {
        let attributes = request.draft.into_attributes()?;
        self.ensure_name_available(&attributes.name, None).await?;
        let company = Company {
            id: Uuid::new_v4(),
            name: attributes.name,
            status: attributes.status,
            notes: attributes.notes,
            application_link: attributes.application_link,
            last_update: self.clock.utc(),
        };
        self.repository
            .insert(&company)
            .await
            .map_err(map_repository_error)?;
        Ok(CompanyPayload::from(company))
    }

    async fn replace_company(
        &self,
        request: ReplaceCompanyRequest,
    ) -> Result<CompanyPayload, Error> {
        let ReplaceCompanyRequest { id, draft } = request;
        let existing = self.load_company(id).await?;
        let attributes = draft.into_attributes()?;
        self.ensure_name_available(&attributes.name, Some(existing.id))
            .await?;
        let company = Company {
            id: existing.id,
            name: attributes.name,
            status: attributes.status,
            notes: attributes.notes,
            application_link: attributes.application_link,
            last_update: self.clock.utc(),
        };
        self.store_rewrite(company).await
    }

    async fn patch_company(&self, request: PatchCompanyRequest) -> Result<CompanyPayload, Error> {
        let PatchCompanyRequest { id, draft } = request;
        let mut company = self.load_company(id).await?;
        let patch = draft.into_patch()?;
        if let Some(name) = &patch.name {
            self.ensure_name_available(name, Some(company.id)).await?;
        }
        company.apply_patch(patch);
        company.last_update = self.clock.utc();
        self.store_rewrite(company).await
    }

    async fn delete_company(&self, request: DeleteCompanyRequest) -> Result<(), Error> {
        let deleted = self
            .repository
            .delete(request.id)
            .await
            .map_err(map_repository_error)?;
        if deleted { Ok(()) } else { Err(Error::not_found()) }
    }
}

#[async_trait]
impl<R> CompaniesQuery for CompanyService<R>
where
    R: CompanyRepository,
{
    async fn list_companies(&self) -> Result<Vec<CompanyPayload>, Error> {
        let companies = self
            .repository
            .list_ordered()
            .await
            .map_err(map_repository_error)?;
        Ok(companies.into_iter().map(CompanyPayload::from).collect())
    }

    async fn fetch_company(&self, request: FetchCompanyRequest) -> Result<CompanyPayload, Error> {
        self.load_company(request.id).await.map(CompanyPayload::from)
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
