//! Shared helpers for the PostgreSQL integration suites.
//!
//! Integration tests compile as separate crates under `backend/tests/`; this
//! module is their common home for embedded cluster setup.

pub mod cluster_skip;
pub mod embedded_postgres;

pub use cluster_skip::handle_cluster_setup_failure;
pub use embedded_postgres::{provision_template_database, shared_cluster_handle};
