//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::companies;

/// Row struct for reading from the companies table.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = companies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct CompanyRow {
    pub id: String,
    pub name: String,
    pub status: String,
    pub notes: String,
    pub application_link: String,
    pub last_update: NaiveDateTime,
}

/// Insertable struct for creating new company records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = companies)]
pub(crate) struct NewCompanyRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub status: &'a str,
    pub notes: &'a str,
    pub application_link: &'a str,
    pub last_update: NaiveDateTime,
}

/// Changeset struct for rewriting existing company records.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = companies)]
pub(crate) struct CompanyChangeset<'a> {
    pub name: &'a str,
    pub status: &'a str,
    pub notes: &'a str,
    pub application_link: &'a str,
    pub last_update: NaiveDateTime,
}
