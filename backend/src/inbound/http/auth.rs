//! Login and logout handlers.
//!
//! ```text
//! GET  /auth/login
//! POST /auth/login   username=admin&password=password
//! POST /auth/logout
//! ```
//!
//! Credential checks live behind the [`LoginService`](crate::domain::ports::LoginService)
//! port; these handlers only map form input and session state.

use actix_web::{HttpResponse, get, post, web};
use tracing::info;

use crate::domain::{ErrorCode, LoginCredentials};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{LoginForm, LoginFormView, see_other};

fn form_with_message(username: String, message: impl Into<String>) -> HttpResponse {
    HttpResponse::Ok().json(LoginFormView {
        username,
        messages: vec![message.into()],
    })
}

/// Blank login form.
#[utoipa::path(
    get,
    path = "/auth/login",
    responses((status = 200, description = "Login form", body = LoginFormView)),
    tags = ["auth"],
    operation_id = "loginForm",
    security([])
)]
#[get("/auth/login")]
pub async fn login_form() -> web::Json<LoginFormView> {
    web::Json(LoginFormView::default())
}

/// Authenticate and store the user id in the session.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Rejected; form with message", body = LoginFormView),
        (status = 303, description = "Logged in; redirect to /", headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Unreadable form body", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let LoginForm { username, password } = form.into_inner();
    let credentials = match LoginCredentials::try_from_parts(&username, &password) {
        Ok(credentials) => credentials,
        Err(err) => return Ok(form_with_message(username, err.to_string())),
    };

    let user = match state.login.authenticate(&credentials).await {
        Ok(user) => user,
        Err(err) if err.code() == ErrorCode::Unauthorized => {
            return Ok(form_with_message(username, err.message()));
        }
        Err(err) => return Err(err),
    };

    session.persist_user(&user.id())?;
    info!(user_id = %user.id(), "user logged in");
    Ok(see_other("/"))
}

/// Forget the session user.
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses((status = 303, description = "Logged out; redirect to /")),
    tags = ["auth"],
    operation_id = "logout",
    security([])
)]
#[post("/auth/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    see_other("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Error;
    use crate::domain::ports::{INVALID_CREDENTIALS_MESSAGE, MockLoginService};
    use crate::inbound::http::test_utils::{fixture_state, login_as, session_cookie, test_app};
    use actix_web::http::{StatusCode, header};
    use actix_web::test;
    use rstest::rstest;
    use serde_json::Value;
    use std::sync::Arc;

    async fn post_login(username: &str, password: &str) -> (StatusCode, Value) {
        let app = test::init_service(test_app(fixture_state())).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/login")
                .set_form([("username", username), ("password", password)])
                .to_request(),
        )
        .await;
        let status = res.status();
        let body = test::read_body(res).await;
        (status, serde_json::from_slice(&body).expect("json body"))
    }

    #[rstest]
    #[case("", "password", "Username is required.")]
    #[case("admin", "", "Password is required.")]
    #[case("admin", "wrong", INVALID_CREDENTIALS_MESSAGE)]
    #[case("nobody", "password", INVALID_CREDENTIALS_MESSAGE)]
    #[actix_web::test]
    async fn rejected_logins_redisplay_the_form(
        #[case] username: &str,
        #[case] password: &str,
        #[case] message: &str,
    ) {
        let (status, body) = post_login(username, password).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["messages"], serde_json::json!([message]));
        assert_eq!(body["username"], username);
        assert!(body.get("password").is_none());
    }

    #[actix_web::test]
    async fn successful_login_redirects_home_with_cookie() {
        let app = test::init_service(test_app(fixture_state())).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/login")
                .set_form([("username", "admin"), ("password", "password")])
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            res.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
            Some("/")
        );
        let _ = session_cookie(&res);
    }

    #[actix_web::test]
    async fn storage_failures_during_login_propagate() {
        let mut login_mock = MockLoginService::new();
        login_mock
            .expect_authenticate()
            .return_once(|_| Err(Error::service_unavailable("user repository unavailable")));
        let mut state = fixture_state();
        state.login = Arc::new(login_mock);
        let app = test::init_service(test_app(state)).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/login")
                .set_form([("username", "admin"), ("password", "password")])
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn logout_clears_the_session() {
        let app = test::init_service(test_app(fixture_state())).await;
        let cookie = login_as(&app, "admin").await;

        let logout_res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/logout")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(logout_res.status(), StatusCode::SEE_OTHER);

        let removal = logout_res
            .response()
            .cookies()
            .find(|c| c.name() == "session")
            .expect("session removal cookie");
        assert_eq!(removal.value(), "");
    }
}
