//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{definitions, users};

/// Row struct for reading from the `user` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub username: String,
}

/// Insertable struct for creating or refreshing user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: i32,
    pub username: &'a str,
}

/// Row struct for reading from the `definitions` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = definitions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DefinitionRow {
    pub id: i32,
    pub word: String,
    pub definition: String,
    pub created: DateTime<Utc>,
    pub author_id: i32,
}

/// Insertable struct for new definitions; `id` and `created` come from
/// column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = definitions)]
pub(crate) struct NewDefinitionRow<'a> {
    pub word: &'a str,
    pub definition: &'a str,
    pub author_id: i32,
}

/// Changeset for the mutable columns of a definition.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = definitions)]
pub(crate) struct DefinitionUpdate<'a> {
    pub word: &'a str,
    pub definition: &'a str,
}
