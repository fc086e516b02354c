//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every handler path, the view schemas, the domain error
//! wrappers ([`ErrorSchema`], [`ErrorCodeSchema`]) and the session cookie
//! security scheme. Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` prints it for external tooling.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::views::{
    DefinitionForm, DefinitionFormView, DefinitionListView, DefinitionView, LoginForm,
    LoginFormView,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /auth/login.",
            ))),
        );
    }
}

/// OpenAPI document for the definitions service.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Words definitions API",
        description = "Browse, add, edit and delete word definitions. Editing is limited to the author."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::definitions::index,
        crate::inbound::http::definitions::my_words,
        crate::inbound::http::definitions::random,
        crate::inbound::http::definitions::add_form,
        crate::inbound::http::definitions::add,
        crate::inbound::http::definitions::update_form,
        crate::inbound::http::definitions::update,
        crate::inbound::http::definitions::delete,
        crate::inbound::http::definitions::view,
        crate::inbound::http::auth::login_form,
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        DefinitionView,
        DefinitionListView,
        DefinitionForm,
        DefinitionFormView,
        LoginForm,
        LoginFormView,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "definitions", description = "Word definitions"),
        (name = "auth", description = "Session login and logout"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
