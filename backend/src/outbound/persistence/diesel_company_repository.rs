//! SQLite-backed `CompanyRepository` implementation using Diesel ORM.
//!
//! This adapter translates between row structs and domain companies. The
//! unique index on `name` backstops the service-level duplicate check, so
//! unique violations surface as their own error variant.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use tracing::debug;
use uuid::Uuid;

use crate::domain::companies::{Company, CompanyName, CompanyStatus};
use crate::domain::ports::{CompanyRepository, CompanyRepositoryError};

use super::models::{CompanyChangeset, CompanyRow, NewCompanyRow};
use super::pool::{DbPool, PoolError};
use super::schema::companies;

/// Diesel-backed implementation of the company repository port.
#[derive(Clone)]
pub struct DieselCompanyRepository {
    pool: DbPool,
}

impl DieselCompanyRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> CompanyRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            CompanyRepositoryError::connection(message)
        }
        PoolError::Runtime { message } | PoolError::Migration { message } => {
            CompanyRepositoryError::query(message)
        }
    }
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> CompanyRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            CompanyRepositoryError::DuplicateName
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            CompanyRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => CompanyRepositoryError::query("database error"),
        DieselError::NotFound => CompanyRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => CompanyRepositoryError::query("database query error"),
        _ => CompanyRepositoryError::query("database error"),
    }
}

/// Owned row snapshot of a domain company.
fn company_to_row(company: &Company) -> CompanyRow {
    CompanyRow {
        id: company.id.to_string(),
        name: company.name.as_str().to_owned(),
        status: company.status.as_str().to_owned(),
        notes: company.notes.clone(),
        application_link: company.application_link.clone(),
        last_update: company.last_update.naive_utc(),
    }
}

/// Convert a database row into a validated domain company.
///
/// Rows written by this adapter always convert cleanly; a failure here means
/// the database was edited outside the application.
fn row_to_company(row: CompanyRow) -> Result<Company, CompanyRepositoryError> {
    let id = Uuid::parse_str(&row.id)
        .map_err(|err| CompanyRepositoryError::query(format!("corrupt company id: {err}")))?;
    let name = CompanyName::new(row.name).map_err(|err| {
        CompanyRepositoryError::query(format!("corrupt company name: {}", err.message()))
    })?;
    let status = row
        .status
        .parse::<CompanyStatus>()
        .map_err(|err| CompanyRepositoryError::query(err.to_string()))?;

    Ok(Company {
        id,
        name,
        status,
        notes: row.notes,
        application_link: row.application_link,
        last_update: DateTime::<Utc>::from_naive_utc_and_offset(row.last_update, Utc),
    })
}

#[async_trait]
impl CompanyRepository for DieselCompanyRepository {
    async fn insert(&self, company: &Company) -> Result<(), CompanyRepositoryError> {
        let row = company_to_row(company);

        self.pool
            .run(move |conn| {
                diesel::insert_into(companies::table)
                    .values(NewCompanyRow {
                        id: &row.id,
                        name: &row.name,
                        status: &row.status,
                        notes: &row.notes,
                        application_link: &row.application_link,
                        last_update: row.last_update,
                    })
                    .execute(conn)
            })
            .await
            .map_err(map_pool_error)?
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, CompanyRepositoryError> {
        let key = id.to_string();

        let row = self
            .pool
            .run(move |conn| {
                companies::table
                    .filter(companies::id.eq(key))
                    .select(CompanyRow::as_select())
                    .first::<CompanyRow>(conn)
                    .optional()
            })
            .await
            .map_err(map_pool_error)?
            .map_err(map_diesel_error)?;

        row.map(row_to_company).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Company>, CompanyRepositoryError> {
        let needle = name.to_owned();

        let row = self
            .pool
            .run(move |conn| {
                companies::table
                    .filter(companies::name.eq(needle))
                    .select(CompanyRow::as_select())
                    .first::<CompanyRow>(conn)
                    .optional()
            })
            .await
            .map_err(map_pool_error)?
            .map_err(map_diesel_error)?;

        row.map(row_to_company).transpose()
    }

    async fn list_ordered(&self) -> Result<Vec<Company>, CompanyRepositoryError> {
        let rows = self
            .pool
            .run(|conn| {
                companies::table
                    .order((companies::last_update.desc(), companies::id.asc()))
                    .select(CompanyRow::as_select())
                    .load::<CompanyRow>(conn)
            })
            .await
            .map_err(map_pool_error)?
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_company).collect()
    }

    async fn update(&self, company: &Company) -> Result<bool, CompanyRepositoryError> {
        let key = company.id.to_string();
        let row = company_to_row(company);

        let affected = self
            .pool
            .run(move |conn| {
                diesel::update(companies::table.filter(companies::id.eq(key)))
                    .set(CompanyChangeset {
                        name: &row.name,
                        status: &row.status,
                        notes: &row.notes,
                        application_link: &row.application_link,
                        last_update: row.last_update,
                    })
                    .execute(conn)
            })
            .await
            .map_err(map_pool_error)?
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, CompanyRepositoryError> {
        let key = id.to_string();

        let affected = self
            .pool
            .run(move |conn| {
                diesel::delete(companies::table.filter(companies::id.eq(key))).execute(conn)
            })
            .await
            .map_err(map_pool_error)?
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }
}
