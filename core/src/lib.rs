//! Domain model and store contract for the Tasklist service.
//!
//! This crate holds everything the HTTP layer and the persistence backends
//! share: the [`Todo`](todo::Todo) entity, the [`TodoStore`](store::TodoStore)
//! contract both backends implement, the validation layer
//! ([`TodoService`](service::TodoService)) that sits in front of a store, and
//! the in-memory backend used for development and tests.
//!
//! # Layering
//!
//! ```text
//! HTTP handlers (tasklist-web)
//!        │
//!        ▼
//! TodoService ── validates input, consistent error messages
//!        │
//!        ▼
//! dyn TodoStore ── MemoryStore (volatile) or PostgresStore (durable)
//! ```
//!
//! Stores are explicitly owned, injected values. Nothing in this crate is
//! process-global, so tests can run several isolated store instances in
//! parallel.

pub mod clock;
pub mod error;
pub mod memory;
pub mod service;
pub mod store;
pub mod todo;

pub use clock::{Clock, SystemClock};
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use service::TodoService;
pub use store::TodoStore;
pub use todo::{NewTodo, Todo, TodoId, TodoPatch};
