//! Diesel-backed `LoginService` adapter built on `DieselUserRepository`.
//!
//! Credentials are checked against the development accounts, as the in-memory
//! service does; on success the account's `user` row is created if missing so
//! definitions can reference it. The accounts share one password, so they are
//! refused unless [`DieselLoginService::with_dev_accounts`] enables them.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, warn};

use crate::domain::ports::{
    INVALID_CREDENTIALS_MESSAGE, LoginService, UserPersistenceError, UserRepository,
    authenticate_fixture,
};
use crate::domain::{Error, LoginCredentials, User};

use super::diesel_user_repository::DieselUserRepository;

/// Diesel-backed `LoginService`.
#[derive(Clone)]
pub struct DieselLoginService {
    user_repository: Arc<dyn UserRepository>,
    dev_accounts: bool,
}

impl DieselLoginService {
    /// Create a new service backed by a Diesel user repository.
    pub fn new(user_repository: DieselUserRepository) -> Self {
        Self {
            user_repository: Arc::new(user_repository),
            dev_accounts: false,
        }
    }

    /// Accept or refuse the development accounts.
    #[must_use]
    pub fn with_dev_accounts(mut self, enabled: bool) -> Self {
        if enabled {
            warn!("development accounts with a shared password can log in to this database");
        }
        self.dev_accounts = enabled;
        self
    }

    #[cfg(test)]
    fn from_repository(user_repository: Arc<dyn UserRepository>) -> Self {
        Self {
            user_repository,
            dev_accounts: true,
        }
    }

    async fn ensure_user_exists(&self, user: &User) -> Result<(), Error> {
        let existing = self
            .user_repository
            .find_by_id(&user.id())
            .await
            .map_err(map_user_persistence_error)?;

        if existing.is_some() {
            return Ok(());
        }

        self.user_repository
            .upsert(user)
            .await
            .map_err(map_user_persistence_error)
    }
}

fn map_user_persistence_error(err: UserPersistenceError) -> Error {
    match err {
        UserPersistenceError::Connection { message } => {
            error!(%message, "user repository unavailable");
            Error::service_unavailable("user repository unavailable")
        }
        UserPersistenceError::Query { message } => Error::internal(message),
    }
}

#[async_trait]
impl LoginService for DieselLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        if !self.dev_accounts {
            return Err(Error::unauthorized(INVALID_CREDENTIALS_MESSAGE));
        }
        let user = authenticate_fixture(credentials)?;
        self.ensure_user_exists(&user).await?;
        Ok(user)
    }
}
