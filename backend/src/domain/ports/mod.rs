//! Domain ports and supporting types for the hexagonal boundary.

mod companies_command;
mod companies_query;
mod company_repository;
#[cfg(test)]
mod tests;

#[cfg(test)]
pub use companies_command::MockCompaniesCommand;
pub use companies_command::{
    CompaniesCommand, CompanyPayload, CreateCompanyRequest, DeleteCompanyRequest,
    FixtureCompaniesCommand, PatchCompanyRequest, ReplaceCompanyRequest,
};
#[cfg(test)]
pub use companies_query::MockCompaniesQuery;
pub use companies_query::{CompaniesQuery, FetchCompanyRequest, FixtureCompaniesQuery};
#[cfg(test)]
pub use company_repository::MockCompanyRepository;
pub use company_repository::{CompanyRepository, CompanyRepositoryError, FixtureCompanyRepository};
