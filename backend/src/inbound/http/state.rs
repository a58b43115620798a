//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use cases) and remain testable without I/O.

use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::domain::ports::{
    CompaniesCommand, CompaniesQuery, FixtureCompaniesCommand, FixtureCompaniesQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Company write use cases.
    pub companies: Arc<dyn CompaniesCommand>,
    /// Company read use cases.
    pub companies_query: Arc<dyn CompaniesQuery>,
    /// Items per page for collection responses. `None` turns the pagination
    /// envelope off and collections render as bare arrays.
    pub page_size: Option<NonZeroUsize>,
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(
            Arc::new(FixtureCompaniesCommand),
            Arc::new(FixtureCompaniesQuery),
        )
    }
}

impl HttpState {
    /// Construct state over the company ports. Pagination starts disabled.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use hirewatch_backend::domain::ports::{FixtureCompaniesCommand, FixtureCompaniesQuery};
    /// use hirewatch_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureCompaniesCommand),
    ///     Arc::new(FixtureCompaniesQuery),
    /// );
    /// let _query = state.companies_query.clone();
    /// ```
    pub fn new(
        companies: Arc<dyn CompaniesCommand>,
        companies_query: Arc<dyn CompaniesQuery>,
    ) -> Self {
        Self {
            companies,
            companies_query,
            page_size: None,
        }
    }

    /// Select the collection page size. `None` keeps the envelope off.
    pub fn with_page_size(mut self, page_size: Option<NonZeroUsize>) -> Self {
        self.page_size = page_size;
        self
    }
}
