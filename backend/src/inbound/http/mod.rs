//! HTTP inbound adapter exposing the definitions, login and probe endpoints.

use actix_web::web;

pub mod auth;
pub mod definitions;
pub mod error;
pub mod guard;
pub mod health;
pub mod schemas;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod views;

pub use error::ApiResult;

/// Register every route served by this adapter.
///
/// The caller supplies `web::Data<HttpState>`, `web::Data<HealthState>` and
/// the session middleware.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(error::form_error_handler))
        .service(auth::login_form)
        .service(auth::login)
        .service(auth::logout)
        .service(health::ready)
        .service(health::live)
        .service(definitions::index)
        .service(definitions::random)
        .service(definitions::add_form)
        .service(definitions::add)
        .service(definitions::my_words)
        .service(definitions::update_form)
        .service(definitions::update)
        .service(definitions::delete)
        .service(definitions::view);
}
