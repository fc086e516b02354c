//! Definitions domain service.
//!
//! Implements [`DefinitionsQuery`] and [`DefinitionsCommand`] over a
//! [`DefinitionRepository`]. Ownership rules live here so every adapter gets
//! the same 404/403 behaviour.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{
    DefinitionRepository, DefinitionRepositoryError, DefinitionsCommand, DefinitionsQuery,
};
use crate::domain::{Definition, DefinitionDraft, DefinitionId, Error, UserId};

/// Whether [`DefinitionsService::fetch_for_edit`] compares the author with the
/// acting user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorCheck {
    #[default]
    Enforce,
    Skip,
}

/// Message returned when an acting user does not own the definition.
pub const FORBIDDEN_EDIT_MESSAGE: &str = "Not permitted to edit this one";

fn not_found(id: DefinitionId) -> Error {
    Error::not_found(format!("Definition id {id} doesn't exist."))
}

/// Definitions service implementing the driving ports.
///
/// `R` may be a concrete repository or `dyn DefinitionRepository`.
pub struct DefinitionsService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for DefinitionsService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> DefinitionsService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> DefinitionsService<R>
where
    R: DefinitionRepository + ?Sized,
{
    fn map_repository_error(error: DefinitionRepositoryError) -> Error {
        match error {
            DefinitionRepositoryError::Connection { message } => {
                error!(%message, "definition repository unavailable");
                Error::service_unavailable("definition repository unavailable")
            }
            DefinitionRepositoryError::Query { message } => {
                Error::internal(format!("definition repository error: {message}"))
            }
        }
    }

    /// Load a definition, optionally requiring `actor` to be its author.
    ///
    /// A missing row is always `not_found`, whatever `check` says. With
    /// [`AuthorCheck::Enforce`] an absent actor counts as "not the author".
    pub async fn fetch_for_edit(
        &self,
        id: DefinitionId,
        actor: Option<&UserId>,
        check: AuthorCheck,
    ) -> Result<Definition, Error> {
        let definition = self
            .repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| not_found(id))?;

        if check == AuthorCheck::Enforce && !actor.is_some_and(|user| definition.is_authored_by(user))
        {
            debug!(definition_id = %id, "edit refused for non-author");
            return Err(Error::forbidden(FORBIDDEN_EDIT_MESSAGE));
        }

        Ok(definition)
    }
}

#[async_trait]
impl<R> DefinitionsQuery for DefinitionsService<R>
where
    R: DefinitionRepository + ?Sized,
{
    async fn list_all(&self) -> Result<Vec<Definition>, Error> {
        self.repository
            .list_all()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn list_by_author(&self, author: &UserId) -> Result<Vec<Definition>, Error> {
        self.repository
            .list_by_author(*author)
            .await
            .map_err(Self::map_repository_error)
    }

    async fn random(&self) -> Result<Option<Definition>, Error> {
        self.repository
            .random()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn view(&self, id: DefinitionId) -> Result<Definition, Error> {
        self.fetch_for_edit(id, None, AuthorCheck::Skip).await
    }

    async fn edit_target(&self, id: DefinitionId, actor: &UserId) -> Result<Definition, Error> {
        self.fetch_for_edit(id, Some(actor), AuthorCheck::Enforce)
            .await
    }
}

#[async_trait]
impl<R> DefinitionsCommand for DefinitionsService<R>
where
    R: DefinitionRepository + ?Sized,
{
    async fn add(&self, author: &UserId, draft: &DefinitionDraft) -> Result<DefinitionId, Error> {
        let id = self
            .repository
            .insert(*author, draft)
            .await
            .map_err(Self::map_repository_error)?;
        debug!(definition_id = %id, author_id = %author, "definition added");
        Ok(id)
    }

    async fn update(
        &self,
        id: DefinitionId,
        actor: &UserId,
        draft: &DefinitionDraft,
    ) -> Result<(), Error> {
        self.fetch_for_edit(id, Some(actor), AuthorCheck::Enforce)
            .await?;
        self.repository
            .update(id, draft)
            .await
            .map_err(Self::map_repository_error)
    }

    async fn delete(&self, id: DefinitionId, actor: &UserId) -> Result<(), Error> {
        self.fetch_for_edit(id, Some(actor), AuthorCheck::Enforce)
            .await?;
        self.repository
            .delete(id)
            .await
            .map_err(Self::map_repository_error)?;
        debug!(definition_id = %id, "definition deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "definitions_service_tests.rs"]
mod tests;
