//! PostgreSQL store backend for the Tasklist service.
//!
//! Todos are stored as whole JSONB documents in a single `todos` table
//! keyed by id, with the creation timestamp denormalized into its own
//! column so the newest-first listing order is a plain `ORDER BY`. Much
//! simpler than a denormalized schema: just serialize/deserialize.
//!
//! Every operation is a single-row statement, so the database's own
//! single-document atomicity is all the concurrency control this backend
//! needs — no transactions are used or required.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tasklist_core::{NewTodo, StoreError, StoreResult, Todo, TodoId, TodoPatch, TodoStore};
use uuid::Uuid;

/// Durable [`TodoStore`] backend over a PostgreSQL pool.
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Wrap an existing connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to the database and build a pool.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] when the database is unreachable.
    pub async fn connect(url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(backend_error)?;
        Ok(Self::new(pool))
    }

    /// Create the `todos` table if it does not exist yet.
    ///
    /// The primary key is the only index; creation-time ordering is served
    /// by the `created_at` column.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] when the statement fails.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todos (
                id TEXT PRIMARY KEY,
                data JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(backend_error)?;
        tracing::info!("todos table ready");
        Ok(())
    }

    /// Access to the underlying pool, for diagnostics.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn fetch(&self, id: &TodoId) -> StoreResult<Todo> {
        let row: Option<(sqlx::types::JsonValue,)> =
            sqlx::query_as("SELECT data FROM todos WHERE id = $1")
                .bind(id.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(backend_error)?;

        match row {
            Some((json,)) => decode(json),
            None => Err(StoreError::NotFound),
        }
    }

    async fn write_back(&self, todo: &Todo) -> StoreResult<()> {
        let data = serde_json::to_value(todo).map_err(encode_error)?;
        let result = sqlx::query("UPDATE todos SET data = $2 WHERE id = $1")
            .bind(todo.id.as_str())
            .bind(data)
            .execute(&self.pool)
            .await
            .map_err(backend_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl TodoStore for PostgresStore {
    async fn list(&self) -> StoreResult<Vec<Todo>> {
        let rows: Vec<(sqlx::types::JsonValue,)> =
            sqlx::query_as("SELECT data FROM todos ORDER BY created_at DESC, id DESC")
                .fetch_all(&self.pool)
                .await
                .map_err(backend_error)?;

        rows.into_iter().map(|(json,)| decode(json)).collect()
    }

    async fn create(&self, input: NewTodo) -> StoreResult<Todo> {
        let todo = Todo {
            id: TodoId::new(Uuid::new_v4().to_string()),
            title: input.title().to_string(),
            description: input.description().to_string(),
            completed: false,
            created_at: Utc::now(),
        };

        let data = serde_json::to_value(&todo).map_err(encode_error)?;
        sqlx::query("INSERT INTO todos (id, data, created_at) VALUES ($1, $2, $3)")
            .bind(todo.id.as_str())
            .bind(data)
            .bind(todo.created_at)
            .execute(&self.pool)
            .await
            .map_err(backend_error)?;

        tracing::debug!(id = %todo.id, "created todo in postgres store");
        Ok(todo)
    }

    async fn get(&self, id: &TodoId) -> StoreResult<Todo> {
        self.fetch(id).await
    }

    async fn update(&self, id: &TodoId, patch: TodoPatch) -> StoreResult<Todo> {
        let mut todo = self.fetch(id).await?;
        patch.apply(&mut todo);
        self.write_back(&todo).await?;
        Ok(todo)
    }

    async fn toggle(&self, id: &TodoId) -> StoreResult<Todo> {
        // One statement, so concurrent toggles cannot lose a flip.
        let row: Option<(sqlx::types::JsonValue,)> = sqlx::query_as(
            "UPDATE todos
             SET data = jsonb_set(data, '{completed}',
                                  to_jsonb(NOT (data->>'completed')::boolean))
             WHERE id = $1
             RETURNING data",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(backend_error)?;

        match row {
            Some((json,)) => decode(json),
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, id: &TodoId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(backend_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        tracing::debug!(%id, "deleted todo from postgres store");
        Ok(())
    }
}

fn decode(json: sqlx::types::JsonValue) -> StoreResult<Todo> {
    serde_json::from_value(json)
        .map_err(|e| StoreError::Backend(format!("Failed to decode todo document: {e}")))
}

fn encode_error(e: serde_json::Error) -> StoreError {
    StoreError::Backend(format!("Failed to encode todo document: {e}"))
}

fn backend_error(e: sqlx::Error) -> StoreError {
    StoreError::Backend(format!("Database error: {e}"))
}
