//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module, and every database failure is mapped onto the
//! port's error type.
//!
//! ```ignore
//! use words::outbound::persistence::{DbPool, DieselDefinitionRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/words")).await?;
//! let repository = DieselDefinitionRepository::new(pool);
//! ```

mod diesel_definition_repository;
mod diesel_error_mapping;
mod diesel_login_service;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_definition_repository::DieselDefinitionRepository;
pub use diesel_login_service::DieselLoginService;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{
    MIGRATIONS, MigrationError, run_pending_migrations, run_pending_migrations_blocking,
};
pub use pool::{DbPool, PoolConfig, PoolError};
