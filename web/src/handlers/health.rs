//! Health check endpoint.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Which store backend is active
    pub backend: String,
    /// Service version
    pub version: String,
    /// Server time at the moment of the check
    pub timestamp: DateTime<Utc>,
}

/// Health check endpoint.
///
/// Returns 200 OK if the service is running. This is a simple liveness
/// check — it does not probe the store backend.
///
/// # Example
///
/// ```bash
/// curl http://localhost:5000/api/health
/// # {"status":"ok","backend":"in-memory","version":"0.1.0","timestamp":"..."}
/// ```
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            backend: state.backend.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
        }),
    )
}
