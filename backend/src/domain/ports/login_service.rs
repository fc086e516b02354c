//! Driving port for login/authentication use-cases.
//!
//! Account management belongs to a separate collaborator. Until it exists the
//! service recognises a fixed set of development accounts, shared by the
//! in-memory and Diesel-backed adapters.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, User};

/// Message shown on the login form when credentials do not match.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Incorrect username or password.";

/// `(id, username, password)` for each development account.
const FIXTURE_ACCOUNTS: [(i32, &str, &str); 2] = [(1, "admin", "password"), (2, "guest", "password")];

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error>;
}

/// Every development account as a [`User`].
pub fn fixture_users() -> Result<Vec<User>, Error> {
    FIXTURE_ACCOUNTS
        .iter()
        .map(|(id, username, _)| {
            User::try_from_parts(*id, username)
                .map_err(|err| Error::internal(format!("invalid fixture user: {err}")))
        })
        .collect()
}

/// Match credentials against the development accounts.
pub(crate) fn authenticate_fixture(credentials: &LoginCredentials) -> Result<User, Error> {
    let (id, username, _) = FIXTURE_ACCOUNTS
        .iter()
        .find(|(_, username, password)| {
            credentials.username() == *username && credentials.password() == *password
        })
        .ok_or_else(|| Error::unauthorized(INVALID_CREDENTIALS_MESSAGE))?;
    User::try_from_parts(*id, username)
        .map_err(|err| Error::internal(format!("invalid fixture user: {err}")))
}

/// In-memory authenticator used when no database is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        authenticate_fixture(credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("admin", "password", Some(1))]
    #[case("guest", "password", Some(2))]
    #[case("admin", "wrong", None)]
    #[case("other", "password", None)]
    #[tokio::test]
    async fn fixture_login_service_matches_development_accounts(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected_id: Option<i32>,
    ) {
        let creds =
            LoginCredentials::try_from_parts(username, password).expect("credentials shape");
        let result = FixtureLoginService.authenticate(&creds).await;
        match (expected_id, result) {
            (Some(id), Ok(user)) => {
                assert_eq!(user.id().get(), id);
                assert_eq!(user.username().as_ref(), username);
            }
            (None, Err(err)) => {
                assert_eq!(err.code(), ErrorCode::Unauthorized);
                assert_eq!(err.message(), INVALID_CREDENTIALS_MESSAGE);
            }
            (Some(_), Err(err)) => panic!("expected success, got error: {err:?}"),
            (None, Ok(user)) => panic!("expected failure, got user {}", user.id()),
        }
    }

    #[rstest]
    fn fixture_users_lists_every_account() {
        let users = fixture_users().expect("fixture users");
        let names: Vec<_> = users.iter().map(|u| u.username().as_ref()).collect();
        assert_eq!(names, ["admin", "guest"]);
    }
}
