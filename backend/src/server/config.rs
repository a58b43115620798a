//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::num::NonZeroUsize;

use hirewatch_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) page_size: Option<NonZeroUsize>,
}

impl ServerConfig {
    /// Construct a configuration for a server listening on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            page_size: None,
        }
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// When provided, the server serves companies from the database-backed
    /// service; otherwise handlers run against fixtures.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Set the page size for the companies listing.
    ///
    /// `None` keeps pagination off and the listing serves bare arrays.
    #[must_use]
    pub fn with_page_size(mut self, page_size: Option<NonZeroUsize>) -> Self {
        self.page_size = page_size;
        self
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(
            dead_code,
            reason = "Exercised by unit tests; retained for fixture access"
        )
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
