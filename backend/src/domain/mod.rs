//! Domain model, error taxonomy and the ports that adapters implement.
//!
//! Everything under this module is transport and storage agnostic: the HTTP
//! layer talks to the domain through the traits in [`ports`], and the
//! persistence layer implements them.

pub mod companies;
pub mod error;
pub mod ports;

pub use self::error::{Error, ValidationErrors};
