//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match `backend/migrations` exactly.

diesel::table! {
    /// Accounts known to the service. `user` is reserved in PostgreSQL, so
    /// Diesel quotes the name.
    #[sql_name = "user"]
    users (id) {
        id -> Int4,
        username -> Text,
    }
}

diesel::table! {
    /// One row per word definition.
    definitions (id) {
        id -> Int4,
        word -> Text,
        definition -> Text,
        /// Set by the database on insert; never updated.
        created -> Timestamptz,
        author_id -> Int4,
    }
}

diesel::joinable!(definitions -> users (author_id));
diesel::allow_tables_to_appear_in_same_query!(definitions, users);
