//! Driving port for definition mutations.
//!
//! Every command runs on behalf of an authenticated user. Update and delete
//! re-check ownership themselves, so adapters cannot skip the check.

use async_trait::async_trait;

use crate::domain::{DefinitionDraft, DefinitionId, Error, UserId};

/// Domain use-case port for creating, editing and removing definitions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DefinitionsCommand: Send + Sync {
    /// Store a new definition authored by `author`.
    async fn add(&self, author: &UserId, draft: &DefinitionDraft) -> Result<DefinitionId, Error>;

    /// Replace word and definition of a definition owned by `actor`.
    async fn update(
        &self,
        id: DefinitionId,
        actor: &UserId,
        draft: &DefinitionDraft,
    ) -> Result<(), Error>;

    /// Remove a definition owned by `actor`.
    async fn delete(&self, id: DefinitionId, actor: &UserId) -> Result<(), Error>;
}
