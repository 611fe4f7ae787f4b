//! The store contract both persistence backends implement.

use crate::error::StoreResult;
use crate::todo::{NewTodo, Todo, TodoId, TodoPatch};
use async_trait::async_trait;

/// Contract over the canonical todo collection.
///
/// Implemented by [`MemoryStore`](crate::memory::MemoryStore) (volatile) and
/// `PostgresStore` in `tasklist-postgres` (durable). The backend is selected
/// once at startup and injected as `Arc<dyn TodoStore>`; nothing upstream may
/// depend on which one is behind the trait.
///
/// Every operation touches at most one record and is atomic on its own:
/// there are no transactions and no multi-record invariants to protect.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All todos, newest-created-first. Empty when none exist.
    async fn list(&self) -> StoreResult<Vec<Todo>>;

    /// Insert a new todo at the head of the newest-first ordering.
    ///
    /// The store assigns a fresh unique id and the creation timestamp;
    /// `completed` starts false. Input validation has already happened in
    /// [`NewTodo::new`](crate::todo::NewTodo::new).
    async fn create(&self, input: NewTodo) -> StoreResult<Todo>;

    /// Fetch one todo by id.
    async fn get(&self, id: &TodoId) -> StoreResult<Todo>;

    /// Replace the mutable fields present in `patch`; omitted fields keep
    /// their current value. Id and creation timestamp are frozen.
    async fn update(&self, id: &TodoId, patch: TodoPatch) -> StoreResult<Todo>;

    /// Flip the completion flag and return the updated record.
    async fn toggle(&self, id: &TodoId) -> StoreResult<Todo>;

    /// Remove the record permanently. No tombstone is kept, so deleting the
    /// same id twice reports `NotFound` the second time.
    async fn delete(&self, id: &TodoId) -> StoreResult<()>;
}
