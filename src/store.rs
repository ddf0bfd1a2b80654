use sqlx::{query, query_as, SqlitePool};

use crate::{model::Todo, schema::CreateTodoSchema};

/// Data access for the `todos` table over the shared connection pool.
///
/// Each operation is one parameterized statement, so concurrent requests only ever
/// see whole rows.
#[derive(Debug, Clone)]
pub struct TodoStore {
    pool: SqlitePool,
}

impl TodoStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All items, oldest first. Fails as a whole if any row cannot be decoded.
    pub async fn list_all(&self) -> Result<Vec<Todo>, sqlx::Error> {
        query_as::<_, Todo>("SELECT id, task, user_id FROM todos ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
    }

    /// Inserts a row and returns it with the id SQLite assigned. The statement has
    /// run to completion, and so committed, before this returns.
    pub async fn insert_one(&self, body: CreateTodoSchema) -> Result<Todo, sqlx::Error> {
        let id = query("INSERT INTO todos (task, user_id) VALUES (?, ?)")
            .bind(&body.task)
            .bind(&body.user_id)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        tracing::debug!(id, "inserted todo");
        Ok(Todo {
            id,
            task: body.task,
            user_id: body.user_id,
        })
    }

    /// Deletes the item with this id. A missing row is not an error.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), sqlx::Error> {
        let rows_affected = query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::debug!(id, rows_affected, "deleted todo");
        Ok(())
    }
}
