//! API client and client-side state store for the Tasklist service.
//!
//! This crate is the Rust counterpart of the original single-page front
//! end's data layer: a thin HTTP client ([`TodoApi`](api::TodoApi)) plus a
//! local mirror of server state ([`ClientState`](state::ClientState)) that
//! derives filtered views and tracks the shared add/edit form.
//!
//! # Sync discipline
//!
//! The local list is a disposable, eventually-consistent copy — never the
//! source of truth. Mutations are applied to it **only** from server
//! response payloads, after the call succeeds; a failed call is logged and
//! leaves local state exactly as it was. There is no speculative update
//! and therefore no rollback logic.

pub mod api;
pub mod state;

pub use api::{ApiError, TodoApi};
pub use state::{ClientState, Counts, Filter, TodoClient};
