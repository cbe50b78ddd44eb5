//! Repository for the `todos` table.

use sqlx::SqliteConnection;
use todo_core::types::DbId;

use crate::models::todo::{CreateTodo, Todo, UpdateTodo};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, content, completed";

/// Provides CRUD operations for todos.
///
/// Operations that write and then read back hold a single pooled connection
/// for both statements.
pub struct TodoRepo;

impl TodoRepo {
    /// List every todo ordered by ascending id.
    pub async fn list(pool: &DbPool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY id ASC");
        sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await
    }

    /// Find a todo by its id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::fetch_by_id(&mut conn, id).await
    }

    /// Insert a new incomplete todo and return the stored row.
    ///
    /// Fails with [`sqlx::Error::RowNotFound`] if the row vanished between the
    /// insert and the read-back.
    pub async fn create(pool: &DbPool, input: &CreateTodo) -> Result<Todo, sqlx::Error> {
        let mut conn = pool.acquire().await?;

        let result = sqlx::query("INSERT INTO todos (content, completed) VALUES (?1, 0)")
            .bind(&input.content)
            .execute(&mut *conn)
            .await?;

        Self::fetch_by_id(&mut conn, result.last_insert_rowid())
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Update a todo. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let mut conn = pool.acquire().await?;

        let result = sqlx::query(
            "UPDATE todos SET
                content = COALESCE(?1, content),
                completed = COALESCE(?2, completed)
             WHERE id = ?3",
        )
        .bind(input.content.as_deref())
        .bind(input.completed)
        .bind(id)
        .execute(&mut *conn)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Self::fetch_by_id(&mut conn, id).await
    }

    /// Permanently delete a todo by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn fetch_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = ?1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }
}
