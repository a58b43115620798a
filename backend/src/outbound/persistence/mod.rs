//! SQLite persistence adapters using Diesel ORM.
//!
//! This module provides the concrete implementation of the company repository
//! port backed by SQLite via Diesel, with r2d2 connection pooling and the
//! blocking driver kept off the async runtime.
//!
//! # Architecture
//!
//! The persistence layer follows these principles:
//!
//! - **Thin adapters**: Repository implementations only translate between
//!   Diesel models and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are internal implementation details, never
//!   exposed to the domain layer.
//! - **Strongly typed errors**: All database errors are mapped to domain
//!   persistence error types.

mod diesel_company_repository;
mod models;
mod pool;
mod schema;

pub use diesel_company_repository::DieselCompanyRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
