//! Validation and orchestration layer over a [`TodoStore`].
//!
//! The service is the first line of defense: it reproduces the store's
//! title rule so error messages stay consistent no matter which layer
//! catches the problem first, and it normalizes input before it reaches a
//! backend. It adds no transactions; every call is one record.

use crate::error::StoreResult;
use crate::store::TodoStore;
use crate::todo::{NewTodo, Todo, TodoId, TodoPatch};
use std::sync::Arc;

/// Thin validation layer in front of the selected store backend.
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    /// Wrap a store backend.
    #[must_use]
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// All todos, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`](crate::error::StoreError::Backend)
    /// when the backend fails.
    pub async fn list(&self) -> StoreResult<Vec<Todo>> {
        self.store.list().await
    }

    /// Validate and create a todo.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`](crate::error::StoreError::Validation)
    /// when the title is missing or blank after trimming.
    pub async fn create(&self, title: &str, description: Option<&str>) -> StoreResult<Todo> {
        let input = NewTodo::new(title, description)?;
        self.store.create(input).await
    }

    /// Fetch one todo.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`](crate::error::StoreError::NotFound)
    /// when no record matches.
    pub async fn get(&self, id: &TodoId) -> StoreResult<Todo> {
        self.store.get(id).await
    }

    /// Validate and apply a partial update. Omitted fields are unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a provided-but-blank title and `NotFound`
    /// for an unknown id.
    pub async fn update(&self, id: &TodoId, patch: TodoPatch) -> StoreResult<Todo> {
        let patch = patch.validated()?;
        self.store.update(id, patch).await
    }

    /// Flip a todo's completion flag.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no record matches.
    pub async fn toggle(&self, id: &TodoId) -> StoreResult<Todo> {
        self.store.toggle(id).await
    }

    /// Permanently delete a todo.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no record matches.
    pub async fn delete(&self, id: &TodoId) -> StoreResult<()> {
        self.store.delete(id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::memory::MemoryStore;

    fn service() -> TodoService {
        TodoService::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn create_rejects_blank_title_without_inserting() {
        let store = Arc::new(MemoryStore::new());
        let service = TodoService::new(store.clone());

        let result = service.create("   ", None).await;
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn create_trims_title_and_defaults_description() {
        let service = service();
        let todo = service.create("  Buy milk  ", None).await.unwrap();

        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.description, "");
    }

    #[tokio::test]
    async fn update_rejects_blank_title_before_hitting_store() {
        let service = service();
        let todo = service.create("Buy milk", None).await.unwrap();

        let patch = TodoPatch {
            title: Some("  ".to_string()),
            ..TodoPatch::default()
        };
        let result = service.update(&todo.id, patch).await;
        assert!(matches!(result, Err(StoreError::Validation(_))));

        // The record is untouched.
        assert_eq!(service.get(&todo.id).await.unwrap(), todo);
    }

    #[tokio::test]
    async fn update_with_omitted_completed_keeps_current_value() {
        let service = service();
        let todo = service.create("Buy milk", None).await.unwrap();
        service.toggle(&todo.id).await.unwrap();

        let patch = TodoPatch {
            description: Some("2%".to_string()),
            ..TodoPatch::default()
        };
        let updated = service.update(&todo.id, patch).await.unwrap();

        assert!(updated.completed);
        assert_eq!(updated.description, "2%");
    }

    #[tokio::test]
    async fn not_found_passes_through_untouched() {
        let service = service();
        let missing = TodoId::from("999");

        assert!(matches!(
            service.get(&missing).await,
            Err(StoreError::NotFound)
        ));
        assert!(matches!(
            service.toggle(&missing).await,
            Err(StoreError::NotFound)
        ));
        assert!(matches!(
            service.delete(&missing).await,
            Err(StoreError::NotFound)
        ));
    }
}
