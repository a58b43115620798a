//! Application settings sourced from the environment and CLI.
//!
//! Settings are resolved with `ortho_config`, so each field can come from a
//! command-line flag, a `HIREWATCH_`-prefixed environment variable, or a
//! configuration file, in that order of precedence. Every field is optional
//! and falls back to a sensible default through its accessor.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroUsize;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);
const DEFAULT_DATABASE_URL: &str = "hirewatch.db";

/// Runtime settings for the backend process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HIREWATCH")]
pub struct AppSettings {
    /// Socket address the HTTP server listens on.
    pub bind_addr: Option<SocketAddr>,
    /// SQLite database path or URL.
    pub database_url: Option<String>,
    /// Companies listing page size; zero or absent disables pagination.
    pub page_size: Option<usize>,
}

impl AppSettings {
    /// Address to bind the HTTP listener to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Database connection string for the SQLite pool.
    #[must_use]
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// Page size for the companies listing, if pagination is enabled.
    #[must_use]
    pub fn page_size(&self) -> Option<NonZeroUsize> {
        self.page_size.and_then(NonZeroUsize::new)
    }
}
