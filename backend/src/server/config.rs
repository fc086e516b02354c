//! HTTP server configuration object and helpers.

use actix_web::cookie::{Key, SameSite};
use std::net::SocketAddr;
use words::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) dev_accounts: bool,
}

impl ServerConfig {
    /// Construct a server configuration that keeps definitions in memory.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            db_pool: None,
            dev_accounts: false,
        }
    }

    /// Store definitions and users in PostgreSQL instead of memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Let the development accounts log in to the database-backed server.
    /// The in-memory server always accepts them.
    #[must_use]
    pub fn with_dev_accounts(mut self, enabled: bool) -> Self {
        self.dev_accounts = enabled;
        self
    }
}
