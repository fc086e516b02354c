//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters; driving
//! ports (`*Query`, `*Command`, `LoginService`) are called by inbound ones.

mod macros;
pub(crate) use macros::define_port_error;

mod definition_repository;
mod definitions_command;
mod definitions_query;
mod login_service;
mod user_repository;

#[cfg(test)]
pub use definition_repository::MockDefinitionRepository;
pub use definition_repository::{
    DefinitionRepository, DefinitionRepositoryError, FixtureDefinitionRepository,
};
#[cfg(test)]
pub use definitions_command::MockDefinitionsCommand;
pub use definitions_command::DefinitionsCommand;
#[cfg(test)]
pub use definitions_query::MockDefinitionsQuery;
pub use definitions_query::DefinitionsQuery;
pub(crate) use login_service::authenticate_fixture;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{
    FixtureLoginService, INVALID_CREDENTIALS_MESSAGE, LoginService, fixture_users,
};
pub use user_repository::{UserPersistenceError, UserRepository};
