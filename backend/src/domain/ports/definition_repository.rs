//! Driven port for definition storage.
//!
//! Every read returns definitions joined with the author's username; rows
//! whose author has no `user` row are not visible. Writes commit immediately.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use rand::seq::SliceRandom;

use crate::domain::{Definition, DefinitionDraft, DefinitionId, User, UserId, Username};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by definition repository adapters.
    pub enum DefinitionRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "definition repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "definition repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DefinitionRepository: Send + Sync {
    /// All definitions, newest first.
    async fn list_all(&self) -> Result<Vec<Definition>, DefinitionRepositoryError>;

    /// Definitions written by `author`, newest first.
    async fn list_by_author(
        &self,
        author: UserId,
    ) -> Result<Vec<Definition>, DefinitionRepositoryError>;

    /// One definition chosen uniformly at random, or `None` when empty.
    async fn random(&self) -> Result<Option<Definition>, DefinitionRepositoryError>;

    async fn find_by_id(
        &self,
        id: DefinitionId,
    ) -> Result<Option<Definition>, DefinitionRepositoryError>;

    /// Insert a definition owned by `author`; storage stamps `created`.
    async fn insert(
        &self,
        author: UserId,
        draft: &DefinitionDraft,
    ) -> Result<DefinitionId, DefinitionRepositoryError>;

    /// Overwrite word and definition. `created` and `author_id` are untouched.
    async fn update(
        &self,
        id: DefinitionId,
        draft: &DefinitionDraft,
    ) -> Result<(), DefinitionRepositoryError>;

    async fn delete(&self, id: DefinitionId) -> Result<(), DefinitionRepositoryError>;
}

#[derive(Debug, Clone)]
struct StoredDefinition {
    id: DefinitionId,
    word: String,
    definition: String,
    created: chrono::DateTime<Utc>,
    author_id: UserId,
}

#[derive(Debug, Default)]
struct FixtureState {
    next_id: i32,
    rows: Vec<StoredDefinition>,
    usernames: HashMap<UserId, Username>,
}

impl FixtureState {
    fn joined(&self, row: &StoredDefinition) -> Option<Definition> {
        let username = self.usernames.get(&row.author_id)?;
        Some(Definition {
            id: row.id,
            word: row.word.clone(),
            definition: row.definition.clone(),
            created: row.created,
            author_id: row.author_id,
            username: username.clone(),
        })
    }

    fn newest_first<'a>(&self, rows: impl Iterator<Item = &'a StoredDefinition>) -> Vec<Definition> {
        let mut joined: Vec<Definition> = rows.filter_map(|row| self.joined(row)).collect();
        joined.sort_by(|a, b| b.created.cmp(&a.created).then(b.id.cmp(&a.id)));
        joined
    }
}

/// In-memory repository used when no database is configured, and by tests.
///
/// Authors must be registered with [`FixtureDefinitionRepository::register_user`]
/// before they can insert, mirroring the `author_id` foreign key.
#[derive(Debug, Default)]
pub struct FixtureDefinitionRepository {
    state: Mutex<FixtureState>,
}

impl FixtureDefinitionRepository {
    /// Create a repository that already knows the given users.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let repository = Self::default();
        for user in users {
            repository.register_user(&user);
        }
        repository
    }

    /// Make `user` joinable, replacing any previous username.
    pub fn register_user(&self, user: &User) {
        self.lock()
            .usernames
            .insert(user.id(), user.username().clone());
    }

    fn lock(&self) -> MutexGuard<'_, FixtureState> {
        self.state.lock().unwrap_or_else(|err| err.into_inner())
    }
}

#[async_trait]
impl DefinitionRepository for FixtureDefinitionRepository {
    async fn list_all(&self) -> Result<Vec<Definition>, DefinitionRepositoryError> {
        let state = self.lock();
        Ok(state.newest_first(state.rows.iter()))
    }

    async fn list_by_author(
        &self,
        author: UserId,
    ) -> Result<Vec<Definition>, DefinitionRepositoryError> {
        let state = self.lock();
        Ok(state.newest_first(state.rows.iter().filter(|row| row.author_id == author)))
    }

    async fn random(&self) -> Result<Option<Definition>, DefinitionRepositoryError> {
        let state = self.lock();
        let visible: Vec<Definition> = state
            .rows
            .iter()
            .filter_map(|row| state.joined(row))
            .collect();
        Ok(visible.choose(&mut rand::thread_rng()).cloned())
    }

    async fn find_by_id(
        &self,
        id: DefinitionId,
    ) -> Result<Option<Definition>, DefinitionRepositoryError> {
        let state = self.lock();
        Ok(state
            .rows
            .iter()
            .find(|row| row.id == id)
            .and_then(|row| state.joined(row)))
    }

    async fn insert(
        &self,
        author: UserId,
        draft: &DefinitionDraft,
    ) -> Result<DefinitionId, DefinitionRepositoryError> {
        let mut state = self.lock();
        if !state.usernames.contains_key(&author) {
            return Err(DefinitionRepositoryError::query(format!(
                "author {author} does not exist"
            )));
        }
        state.next_id += 1;
        let id = DefinitionId::new(state.next_id);
        state.rows.push(StoredDefinition {
            id,
            word: draft.word().to_owned(),
            definition: draft.definition().to_owned(),
            created: Utc::now(),
            author_id: author,
        });
        Ok(id)
    }

    async fn update(
        &self,
        id: DefinitionId,
        draft: &DefinitionDraft,
    ) -> Result<(), DefinitionRepositoryError> {
        let mut state = self.lock();
        if let Some(row) = state.rows.iter_mut().find(|row| row.id == id) {
            row.word = draft.word().to_owned();
            row.definition = draft.definition().to_owned();
        }
        Ok(())
    }

    async fn delete(&self, id: DefinitionId) -> Result<(), DefinitionRepositoryError> {
        self.lock().rows.retain(|row| row.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn user(id: i32, name: &str) -> User {
        User::try_from_parts(id, name).expect("valid user")
    }

    fn draft(word: &str, definition: &str) -> DefinitionDraft {
        DefinitionDraft::try_from_parts(word, definition).expect("valid draft")
    }

    #[fixture]
    fn repository() -> FixtureDefinitionRepository {
        FixtureDefinitionRepository::with_users([user(1, "alice"), user(2, "bob")])
    }

    fn alice() -> UserId {
        UserId::new(1).expect("valid id")
    }

    fn bob() -> UserId {
        UserId::new(2).expect("valid id")
    }

    #[rstest]
    #[tokio::test]
    async fn list_all_is_newest_first_with_usernames(repository: FixtureDefinitionRepository) {
        repository.insert(alice(), &draft("foo", "bar")).await.expect("insert");
        repository.insert(bob(), &draft("baz", "")).await.expect("insert");

        let listed = repository.list_all().await.expect("list");

        let words: Vec<_> = listed.iter().map(|d| d.word.as_str()).collect();
        assert_eq!(words, ["baz", "foo"]);
        assert_eq!(listed[0].username.as_ref(), "bob");
        assert_eq!(listed[1].username.as_ref(), "alice");
    }

    #[rstest]
    #[tokio::test]
    async fn list_by_author_filters(repository: FixtureDefinitionRepository) {
        repository.insert(alice(), &draft("foo", "")).await.expect("insert");
        repository.insert(bob(), &draft("baz", "")).await.expect("insert");

        let listed = repository.list_by_author(alice()).await.expect("list");

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].author_id, alice());
    }

    #[rstest]
    #[tokio::test]
    async fn random_on_empty_table_is_none(repository: FixtureDefinitionRepository) {
        assert!(repository.random().await.expect("random").is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn random_returns_a_stored_definition(repository: FixtureDefinitionRepository) {
        let id = repository.insert(alice(), &draft("foo", "")).await.expect("insert");
        let picked = repository.random().await.expect("random").expect("one row");
        assert_eq!(picked.id, id);
    }

    #[rstest]
    #[tokio::test]
    async fn insert_requires_known_author(repository: FixtureDefinitionRepository) {
        let stranger = UserId::new(99).expect("valid id");
        let err = repository
            .insert(stranger, &draft("foo", ""))
            .await
            .expect_err("unknown author");
        assert!(matches!(err, DefinitionRepositoryError::Query { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn update_keeps_author_and_created(repository: FixtureDefinitionRepository) {
        let id = repository.insert(alice(), &draft("foo", "bar")).await.expect("insert");
        let before = repository.find_by_id(id).await.expect("find").expect("row");

        repository.update(id, &draft("foo2", "baz")).await.expect("update");

        let after = repository.find_by_id(id).await.expect("find").expect("row");
        assert_eq!(after.word, "foo2");
        assert_eq!(after.definition, "baz");
        assert_eq!(after.author_id, before.author_id);
        assert_eq!(after.created, before.created);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_only_the_target(repository: FixtureDefinitionRepository) {
        let keep = repository.insert(alice(), &draft("keep", "")).await.expect("insert");
        let gone = repository.insert(alice(), &draft("gone", "")).await.expect("insert");

        repository.delete(gone).await.expect("delete");

        assert!(repository.find_by_id(gone).await.expect("find").is_none());
        assert!(repository.find_by_id(keep).await.expect("find").is_some());
    }
}
