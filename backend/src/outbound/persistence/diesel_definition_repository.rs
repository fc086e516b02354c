//! PostgreSQL-backed `DefinitionRepository` implementation using Diesel ORM.
//!
//! Reads inner-join `definitions` with `user`, so a definition is only visible
//! while its author row exists. Each call checks out its own pooled
//! connection and commits on its own.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{DefinitionRepository, DefinitionRepositoryError};
use crate::domain::{Definition, DefinitionDraft, DefinitionId, UserId, Username};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{DefinitionRow, DefinitionUpdate, NewDefinitionRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{definitions, users};

diesel::define_sql_function!(fn random() -> diesel::sql_types::Double);

/// Diesel-backed implementation of the `DefinitionRepository` port.
#[derive(Clone)]
pub struct DieselDefinitionRepository {
    pool: DbPool,
}

impl DieselDefinitionRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> DefinitionRepositoryError {
    map_pool_error(error, DefinitionRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> DefinitionRepositoryError {
    map_diesel_error(
        error,
        DefinitionRepositoryError::query,
        DefinitionRepositoryError::connection,
    )
}

fn row_to_definition(
    (row, author): (DefinitionRow, UserRow),
) -> Result<Definition, DefinitionRepositoryError> {
    let author_id = UserId::new(row.author_id).map_err(|err| {
        DefinitionRepositoryError::query(format!("definition {} has invalid author: {err}", row.id))
    })?;
    let username = Username::new(author.username).map_err(|err| {
        DefinitionRepositoryError::query(format!("user {} has invalid username: {err}", author.id))
    })?;
    Ok(Definition {
        id: DefinitionId::new(row.id),
        word: row.word,
        definition: row.definition,
        created: row.created,
        author_id,
        username,
    })
}

fn rows_to_definitions(
    rows: Vec<(DefinitionRow, UserRow)>,
) -> Result<Vec<Definition>, DefinitionRepositoryError> {
    rows.into_iter().map(row_to_definition).collect()
}

#[async_trait]
impl DefinitionRepository for DieselDefinitionRepository {
    async fn list_all(&self) -> Result<Vec<Definition>, DefinitionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<(DefinitionRow, UserRow)> = definitions::table
            .inner_join(users::table)
            .select((DefinitionRow::as_select(), UserRow::as_select()))
            .order((definitions::created.desc(), definitions::id.desc()))
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        rows_to_definitions(rows)
    }

    async fn list_by_author(
        &self,
        author: UserId,
    ) -> Result<Vec<Definition>, DefinitionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<(DefinitionRow, UserRow)> = definitions::table
            .inner_join(users::table)
            .filter(definitions::author_id.eq(author.get()))
            .select((DefinitionRow::as_select(), UserRow::as_select()))
            .order((definitions::created.desc(), definitions::id.desc()))
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        rows_to_definitions(rows)
    }

    async fn random(&self) -> Result<Option<Definition>, DefinitionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: Option<(DefinitionRow, UserRow)> = definitions::table
            .inner_join(users::table)
            .select((DefinitionRow::as_select(), UserRow::as_select()))
            .order(random())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        row.map(row_to_definition).transpose()
    }

    async fn find_by_id(
        &self,
        id: DefinitionId,
    ) -> Result<Option<Definition>, DefinitionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: Option<(DefinitionRow, UserRow)> = definitions::table
            .inner_join(users::table)
            .filter(definitions::id.eq(id.get()))
            .select((DefinitionRow::as_select(), UserRow::as_select()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        row.map(row_to_definition).transpose()
    }

    async fn insert(
        &self,
        author: UserId,
        draft: &DefinitionDraft,
    ) -> Result<DefinitionId, DefinitionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let new_row = NewDefinitionRow {
            word: draft.word(),
            definition: draft.definition(),
            author_id: author.get(),
        };

        diesel::insert_into(definitions::table)
            .values(&new_row)
            .returning(definitions::id)
            .get_result::<i32>(&mut conn)
            .await
            .map(DefinitionId::new)
            .map_err(diesel_error)
    }

    async fn update(
        &self,
        id: DefinitionId,
        draft: &DefinitionDraft,
    ) -> Result<(), DefinitionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let changes = DefinitionUpdate {
            word: draft.word(),
            definition: draft.definition(),
        };

        diesel::update(definitions::table.filter(definitions::id.eq(id.get())))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(diesel_error)
    }

    async fn delete(&self, id: DefinitionId) -> Result<(), DefinitionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        diesel::delete(definitions::table.filter(definitions::id.eq(id.get())))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(diesel_error)
    }
}
