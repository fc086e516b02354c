//! Driving port for definition reads.
//!
//! Inbound adapters use this port to list and load definitions without
//! importing persistence concerns.

use async_trait::async_trait;

use crate::domain::{Definition, DefinitionId, Error, UserId};

/// Domain use-case port for reading definitions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DefinitionsQuery: Send + Sync {
    /// Every definition, newest first.
    async fn list_all(&self) -> Result<Vec<Definition>, Error>;

    /// Definitions written by `author`, newest first. Unknown authors yield
    /// an empty list.
    async fn list_by_author(&self, author: &UserId) -> Result<Vec<Definition>, Error>;

    /// A uniformly random definition, or `None` when there are none.
    async fn random(&self) -> Result<Option<Definition>, Error>;

    /// Load a definition for public display. No ownership check.
    async fn view(&self, id: DefinitionId) -> Result<Definition, Error>;

    /// Load a definition that `actor` intends to edit or delete.
    ///
    /// Fails with `not_found` when missing and `forbidden` when `actor` is
    /// not the author.
    async fn edit_target(&self, id: DefinitionId, actor: &UserId) -> Result<Definition, Error>;
}
