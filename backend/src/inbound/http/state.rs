//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{DefinitionsCommand, DefinitionsQuery, LoginService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub definitions_query: Arc<dyn DefinitionsQuery>,
    pub definitions_command: Arc<dyn DefinitionsCommand>,
}

impl HttpState {
    /// Construct state from port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use words::domain::DefinitionsService;
    /// use words::domain::ports::{FixtureDefinitionRepository, FixtureLoginService};
    /// use words::inbound::http::state::HttpState;
    ///
    /// let service = Arc::new(DefinitionsService::new(Arc::new(
    ///     FixtureDefinitionRepository::default(),
    /// )));
    /// let state = HttpState::new(Arc::new(FixtureLoginService), service.clone(), service);
    /// let _login = state.login.clone();
    /// ```
    pub fn new(
        login: Arc<dyn LoginService>,
        definitions_query: Arc<dyn DefinitionsQuery>,
        definitions_command: Arc<dyn DefinitionsCommand>,
    ) -> Self {
        Self {
            login,
            definitions_query,
            definitions_command,
        }
    }
}
