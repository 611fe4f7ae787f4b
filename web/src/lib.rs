//! Axum HTTP layer for the Tasklist service.
//!
//! Stateless request/response mapping over the core
//! [`TodoService`](tasklist_core::TodoService):
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         HTTP layer (this crate)         │  ← routing, JSON, CORS
//! │  - request parsing                      │  ← status-code mapping
//! │  - error formatting (AppError)          │  ← request tracing
//! ├─────────────────────────────────────────┤
//! │         tasklist-core                   │
//! │  - validation (TodoService)             │
//! │  - store contract + backends            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Every handler resolves to exactly one of success JSON, 404, 400, or
//! 500 — errors raised below this layer are converted by [`AppError`]'s
//! `IntoResponse` impl and never propagate unanswered. This crate is the
//! only place error bodies are formatted.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tasklist_core::{MemoryStore, TodoService};
//! use tasklist_web::{build_router, AppState};
//!
//! let service = TodoService::new(Arc::new(MemoryStore::new()));
//! let app = build_router(AppState::new(service, "in-memory"));
//! // axum::serve(listener, app) ...
//! ```

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use routes::build_router;
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
