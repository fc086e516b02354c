//! Definitions HTTP handlers.
//!
//! ```text
//! GET  /
//! GET  /{author_id}/my_words
//! GET  /random
//! GET  /add            POST /add
//! GET  /{id}/update    POST /{id}/update
//! POST /{id}/delete
//! GET  /{id}/word
//! ```
//!
//! Validation failures answer `200` with the form and a message; successful
//! mutations answer `303 See Other` to `/`.

use actix_web::{HttpResponse, get, post, web};
use tracing::debug;

use crate::domain::{DefinitionId, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::guard::AuthenticatedUser;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{
    DefinitionForm, DefinitionFormView, DefinitionListView, DefinitionView, see_other,
};

const HOME: &str = "/";

/// List every definition, newest first.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "All definitions", body = DefinitionListView),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["definitions"],
    operation_id = "listDefinitions",
    security([])
)]
#[get("/")]
pub async fn index(state: web::Data<HttpState>) -> ApiResult<web::Json<DefinitionListView>> {
    let definitions = state.definitions_query.list_all().await?;
    Ok(web::Json(DefinitionListView::new(definitions)))
}

/// List definitions written by one author.
///
/// The author comes from the path, not the session, so any caller may browse
/// any author's words. A non-numeric author matches nobody.
#[utoipa::path(
    get,
    path = "/{author_id}/my_words",
    params(("author_id" = String, Path, description = "Author user id")),
    responses(
        (status = 200, description = "The author's definitions", body = DefinitionListView),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["definitions"],
    operation_id = "listDefinitionsByAuthor",
    security([])
)]
#[get("/{author_id}/my_words")]
pub async fn my_words(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DefinitionListView>> {
    let Ok(author) = path.parse::<UserId>() else {
        debug!(author = %path, "unknown author id");
        return Ok(web::Json(DefinitionListView::default()));
    };
    let definitions = state.definitions_query.list_by_author(&author).await?;
    Ok(web::Json(DefinitionListView::new(definitions)))
}

/// One definition picked at random; an empty list when there are none.
#[utoipa::path(
    get,
    path = "/random",
    responses(
        (status = 200, description = "Zero or one definition", body = DefinitionListView),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["definitions"],
    operation_id = "randomDefinition",
    security([])
)]
#[get("/random")]
pub async fn random(state: web::Data<HttpState>) -> ApiResult<web::Json<DefinitionListView>> {
    let picked = state.definitions_query.random().await?;
    Ok(web::Json(DefinitionListView::new(picked)))
}

/// Blank add form.
#[utoipa::path(
    get,
    path = "/add",
    responses(
        (status = 200, description = "Add form", body = DefinitionFormView),
        (status = 303, description = "Not logged in; redirect to /auth/login")
    ),
    tags = ["definitions"],
    operation_id = "addDefinitionForm"
)]
#[get("/add")]
pub async fn add_form(_user: AuthenticatedUser) -> web::Json<DefinitionFormView> {
    web::Json(DefinitionFormView::empty())
}

/// Create a definition owned by the session user.
#[utoipa::path(
    post,
    path = "/add",
    request_body(content = DefinitionForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Validation failed; form with message", body = DefinitionFormView),
        (status = 303, description = "Created, or not logged in"),
        (status = 400, description = "Unreadable form body", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["definitions"],
    operation_id = "addDefinition"
)]
#[post("/add")]
pub async fn add(
    user: AuthenticatedUser,
    state: web::Data<HttpState>,
    form: web::Form<DefinitionForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    let draft = match form.to_draft() {
        Ok(draft) => draft,
        Err(err) => {
            let form_view = DefinitionFormView {
                definition_id: None,
                word: form.word,
                definition: form.definition,
                messages: Vec::new(),
            }
            .with_message(err.to_string());
            return Ok(HttpResponse::Ok().json(form_view));
        }
    };
    state.definitions_command.add(user.id(), &draft).await?;
    Ok(see_other(HOME))
}

/// Edit form pre-filled with the stored values. Owner only.
#[utoipa::path(
    get,
    path = "/{id}/update",
    params(("id" = i32, Path, description = "Definition id")),
    responses(
        (status = 200, description = "Edit form", body = DefinitionFormView),
        (status = 303, description = "Not logged in; redirect to /auth/login"),
        (status = 403, description = "Not the author", body = ErrorSchema),
        (status = 404, description = "No such definition", body = ErrorSchema)
    ),
    tags = ["definitions"],
    operation_id = "updateDefinitionForm"
)]
#[get("/{id}/update")]
pub async fn update_form(
    user: AuthenticatedUser,
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<DefinitionFormView>> {
    let id = DefinitionId::new(path.into_inner());
    let target = state.definitions_query.edit_target(id, user.id()).await?;
    Ok(web::Json(DefinitionFormView::editing(&target)))
}

/// Replace word and definition. Owner only.
///
/// A blank word redisplays the form with the stored values. Existence and
/// ownership are checked once, by whichever port call the form leads to.
#[utoipa::path(
    post,
    path = "/{id}/update",
    params(("id" = i32, Path, description = "Definition id")),
    request_body(content = DefinitionForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Validation failed; form with message", body = DefinitionFormView),
        (status = 303, description = "Updated, or not logged in"),
        (status = 400, description = "Unreadable form body", body = ErrorSchema),
        (status = 403, description = "Not the author", body = ErrorSchema),
        (status = 404, description = "No such definition", body = ErrorSchema)
    ),
    tags = ["definitions"],
    operation_id = "updateDefinition"
)]
#[post("/{id}/update")]
pub async fn update(
    user: AuthenticatedUser,
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    form: web::Form<DefinitionForm>,
) -> ApiResult<HttpResponse> {
    let id = DefinitionId::new(path.into_inner());
    match form.to_draft() {
        Ok(draft) => {
            state
                .definitions_command
                .update(id, user.id(), &draft)
                .await?;
            Ok(see_other(HOME))
        }
        Err(err) => {
            let target = state.definitions_query.edit_target(id, user.id()).await?;
            Ok(HttpResponse::Ok()
                .json(DefinitionFormView::editing(&target).with_message(err.to_string())))
        }
    }
}

/// Remove a definition. Owner only.
#[utoipa::path(
    post,
    path = "/{id}/delete",
    params(("id" = i32, Path, description = "Definition id")),
    responses(
        (status = 303, description = "Deleted, or not logged in"),
        (status = 403, description = "Not the author", body = ErrorSchema),
        (status = 404, description = "No such definition", body = ErrorSchema)
    ),
    tags = ["definitions"],
    operation_id = "deleteDefinition"
)]
#[post("/{id}/delete")]
pub async fn delete(
    user: AuthenticatedUser,
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = DefinitionId::new(path.into_inner());
    state.definitions_command.delete(id, user.id()).await?;
    Ok(see_other(HOME))
}

/// Show one definition. Public.
#[utoipa::path(
    get,
    path = "/{id}/word",
    params(("id" = i32, Path, description = "Definition id")),
    responses(
        (status = 200, description = "The definition", body = DefinitionView),
        (status = 404, description = "No such definition", body = ErrorSchema)
    ),
    tags = ["definitions"],
    operation_id = "viewDefinition",
    security([])
)]
#[get("/{id}/word")]
pub async fn view(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<DefinitionView>> {
    let id = DefinitionId::new(path.into_inner());
    let definition = state.definitions_query.view(id).await?;
    Ok(web::Json(DefinitionView::from(definition)))
}
