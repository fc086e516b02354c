//! View models rendered by the presentation layer.
//!
//! Handlers answer with JSON documents shaped for a template renderer:
//! definition lists, a single definition, and the add/edit and login forms
//! together with any flash messages.

use actix_web::HttpResponse;
use actix_web::http::header;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Definition, DefinitionDraft};

/// One definition with its author's username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionView {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "serendipity")]
    pub word: String,
    #[schema(example = "Finding something good without looking for it.")]
    pub definition: String,
    pub created: DateTime<Utc>,
    #[schema(example = 1)]
    pub author_id: i32,
    #[schema(example = "admin")]
    pub username: String,
}

impl From<Definition> for DefinitionView {
    fn from(value: Definition) -> Self {
        Self {
            id: value.id.get(),
            word: value.word,
            definition: value.definition,
            created: value.created,
            author_id: value.author_id.get(),
            username: value.username.into(),
        }
    }
}

/// Zero or more definitions, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionListView {
    pub definitions: Vec<DefinitionView>,
}

impl DefinitionListView {
    pub fn new(definitions: impl IntoIterator<Item = Definition>) -> Self {
        Self {
            definitions: definitions.into_iter().map(DefinitionView::from).collect(),
        }
    }
}

/// Form fields submitted to add or update a definition.
///
/// Both fields default to empty so a missing `word` reaches validation
/// instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct DefinitionForm {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub definition: String,
}

impl DefinitionForm {
    pub fn to_draft(&self) -> Result<DefinitionDraft, crate::domain::DefinitionValidationError> {
        DefinitionDraft::try_from_parts(&self.word, &self.definition)
    }
}

/// The add or edit form. `definitionId` is present when editing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionFormView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition_id: Option<i32>,
    pub word: String,
    pub definition: String,
    /// Flash messages, oldest first.
    pub messages: Vec<String>,
}

impl DefinitionFormView {
    /// Blank add form.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Edit form pre-filled from the stored definition.
    pub fn editing(definition: &Definition) -> Self {
        Self {
            definition_id: Some(definition.id.get()),
            word: definition.word.clone(),
            definition: definition.definition.clone(),
            messages: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }
}

/// Fields submitted on the login form.
#[derive(Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// The login form with flash messages. The password is never echoed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginFormView {
    pub username: String,
    pub messages: Vec<String>,
}

/// `303 See Other` to `location`.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
