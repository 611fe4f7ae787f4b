//! Application state for the Tasklist HTTP server.
//!
//! The state holds the injected [`TodoService`] — the backend behind it is
//! chosen at startup, so the router is built exactly once for either
//! backend instead of being duplicated per store.

use tasklist_core::TodoService;

/// Application state shared across all HTTP handlers.
///
/// Cloned (cheaply, the service is `Arc`-backed) for each request.
#[derive(Clone)]
pub struct AppState {
    /// Validation/orchestration layer over the selected store backend.
    pub service: TodoService,
    /// Human-readable backend name, reported by the health endpoint.
    pub backend: String,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// - `service`: the service wrapping the selected store backend
    /// - `backend`: backend label for the health payload, e.g. `"in-memory"`
    #[must_use]
    pub fn new(service: TodoService, backend: impl Into<String>) -> Self {
        Self {
            service,
            backend: backend.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tasklist_core::MemoryStore;

    #[test]
    fn test_state_is_clone() {
        // Axum requires Clone state
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_backend_label() {
        let state = AppState::new(
            TodoService::new(Arc::new(MemoryStore::new())),
            "in-memory",
        );
        assert_eq!(state.backend, "in-memory");
    }
}
