//! Login guard for mutating routes.
//!
//! Handlers that take an [`AuthenticatedUser`] argument never run for
//! anonymous callers: extraction fails first and the client is sent to the
//! login form.

use std::fmt;

use actix_web::http::{StatusCode, header};
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::debug;

use crate::domain::UserId;

use super::session::SessionContext;

/// Where anonymous callers are sent.
pub const LOGIN_PATH: &str = "/auth/login";

/// Rejection raised when a guarded route is called without a session user.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginRequired;

impl fmt::Display for LoginRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("login required")
    }
}

impl ResponseError for LoginRequired {
    fn status_code(&self) -> StatusCode {
        StatusCode::SEE_OTHER
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, LOGIN_PATH))
            .finish()
    }
}

/// The user id stored in the caller's session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(UserId);

impl AuthenticatedUser {
    pub fn id(&self) -> &UserId {
        &self.0
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let session = SessionContext::from_request(req, payload);
        let path = req.path().to_owned();
        Box::pin(async move {
            match session.await?.user_id()? {
                Some(id) => Ok(Self(id)),
                None => {
                    debug!(%path, "anonymous request redirected to login");
                    Err(LoginRequired.into())
                }
            }
        })
    }
}
