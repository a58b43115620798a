//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the database migrations exactly. They are used
//! by Diesel for compile-time query validation and type-safe SQL generation.
//!
//! # Maintenance
//!
//! When migrations change the schema, this file should be regenerated or
//! manually updated to reflect those changes. The `diesel print-schema`
//! command can generate these definitions from a live database.

diesel::table! {
    /// Tracked companies table.
    ///
    /// One row per company being watched. The `id` column is the primary key
    /// (UUID v4 in canonical string form) and `name` carries a unique index.
    companies (id) {
        /// Primary key: UUID v4 as its canonical string.
        id -> Text,
        /// Unique display name.
        name -> Text,
        /// Hiring posture stored as its wire label.
        status -> Text,
        /// Free-form notes.
        notes -> Text,
        /// Link to the company's application page.
        application_link -> Text,
        /// Time of the last write, UTC without offset.
        last_update -> Timestamp,
    }
}
