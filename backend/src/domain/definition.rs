//! Word definitions and the drafts used to create or edit them.

use std::fmt;

use chrono::{DateTime, Utc};

use super::{UserId, Username};

/// Storage-generated definition identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DefinitionId(i32);

impl DefinitionId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for DefinitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors for definition drafts. The display text is shown to the
/// user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionValidationError {
    #[error("Word is required.")]
    EmptyWord,
}

/// Validated input for Add and Update.
///
/// ## Invariants
/// - `word` is non-blank. It is stored as submitted, without trimming.
/// - `definition` is free text and may be empty.
///
/// # Examples
/// ```
/// use words::domain::{DefinitionDraft, DefinitionValidationError};
///
/// let draft = DefinitionDraft::try_from_parts("foo", "bar").unwrap();
/// assert_eq!(draft.word(), "foo");
///
/// let err = DefinitionDraft::try_from_parts("", "bar").unwrap_err();
/// assert_eq!(err.to_string(), "Word is required.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionDraft {
    word: String,
    definition: String,
}

impl DefinitionDraft {
    pub fn try_from_parts(word: &str, definition: &str) -> Result<Self, DefinitionValidationError> {
        if word.trim().is_empty() {
            return Err(DefinitionValidationError::EmptyWord);
        }
        Ok(Self {
            word: word.to_owned(),
            definition: definition.to_owned(),
        })
    }

    pub fn word(&self) -> &str {
        self.word.as_str()
    }

    pub fn definition(&self) -> &str {
        self.definition.as_str()
    }
}

/// A stored definition joined with its author's username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub id: DefinitionId,
    pub word: String,
    pub definition: String,
    pub created: DateTime<Utc>,
    pub author_id: UserId,
    pub username: Username,
}

impl Definition {
    pub fn is_authored_by(&self, user: &UserId) -> bool {
        self.author_id == *user
    }
}
