//! Volatile in-memory store backend.
//!
//! Keeps the collection in an owned `Vec` behind a `tokio` `RwLock`, newest
//! first, with small monotonically increasing counter ids. Each instance is
//! fully isolated, so tests can run many stores in parallel.

use crate::clock::{Clock, SystemClock};
use crate::error::{StoreError, StoreResult};
use crate::store::TodoStore;
use crate::todo::{NewTodo, Todo, TodoId, TodoPatch};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory [`TodoStore`] backend.
pub struct MemoryStore {
    todos: RwLock<Vec<Todo>>,
    next_id: AtomicU64,
    clock: Arc<dyn Clock>,
}

impl MemoryStore {
    /// Create an empty store using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty store with an injected clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            todos: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
            clock,
        }
    }

    /// Number of live todos. Test/diagnostic convenience.
    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    /// True when the store holds no todos.
    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<Todo>> {
        // Records are kept newest-first, so this is already the default
        // listing order.
        Ok(self.todos.read().await.clone())
    }

    async fn create(&self, input: NewTodo) -> StoreResult<Todo> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let todo = Todo {
            id: TodoId::new(id.to_string()),
            title: input.title().to_string(),
            description: input.description().to_string(),
            completed: false,
            created_at: self.clock.now(),
        };

        let mut todos = self.todos.write().await;
        todos.insert(0, todo.clone());
        tracing::debug!(id = %todo.id, "created todo in memory store");
        Ok(todo)
    }

    async fn get(&self, id: &TodoId) -> StoreResult<Todo> {
        self.todos
            .read()
            .await
            .iter()
            .find(|todo| todo.id == *id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update(&self, id: &TodoId, patch: TodoPatch) -> StoreResult<Todo> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|todo| todo.id == *id)
            .ok_or(StoreError::NotFound)?;
        patch.apply(todo);
        Ok(todo.clone())
    }

    async fn toggle(&self, id: &TodoId) -> StoreResult<Todo> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|todo| todo.id == *id)
            .ok_or(StoreError::NotFound)?;
        todo.completed = !todo.completed;
        Ok(todo.clone())
    }

    async fn delete(&self, id: &TodoId) -> StoreResult<()> {
        let mut todos = self.todos.write().await;
        let before = todos.len();
        todos.retain(|todo| todo.id != *id);
        if todos.len() == before {
            return Err(StoreError::NotFound);
        }
        tracing::debug!(%id, "deleted todo from memory store");
        Ok(())
    }
}
