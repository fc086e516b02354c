//! Builds the HTTP state from either PostgreSQL adapters or in-memory
//! fixtures.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use words::domain::DefinitionsService;
use words::domain::ports::{
    DefinitionRepository, FixtureDefinitionRepository, FixtureLoginService, LoginService,
    fixture_users,
};
use words::inbound::http::state::HttpState;
use words::outbound::persistence::{
    DbPool, DieselDefinitionRepository, DieselLoginService, DieselUserRepository,
};

use super::ServerConfig;

fn build_diesel_ports(
    pool: &DbPool,
    dev_accounts: bool,
) -> (Arc<dyn LoginService>, Arc<dyn DefinitionRepository>) {
    let login = DieselLoginService::new(DieselUserRepository::new(pool.clone()))
        .with_dev_accounts(dev_accounts);
    let definitions = DieselDefinitionRepository::new(pool.clone());
    (Arc::new(login), Arc::new(definitions))
}

fn build_fixture_ports() -> std::io::Result<(Arc<dyn LoginService>, Arc<dyn DefinitionRepository>)> {
    warn!("no database configured; definitions are kept in memory and lost on restart");
    let users = fixture_users().map_err(|err| std::io::Error::other(err.to_string()))?;
    let definitions = FixtureDefinitionRepository::with_users(users);
    Ok((Arc::new(FixtureLoginService), Arc::new(definitions)))
}

/// Wire the driving ports onto one shared [`DefinitionsService`].
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let (login, repository) = match &config.db_pool {
        Some(pool) => build_diesel_ports(pool, config.dev_accounts),
        None => build_fixture_ports()?,
    };
    let service = Arc::new(DefinitionsService::new(repository));
    Ok(web::Data::new(HttpState::new(
        login,
        service.clone(),
        service,
    )))
}
