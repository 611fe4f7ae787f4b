//! Todo CRUD endpoints.
//!
//! - `GET /api/todos` - List todos, newest first
//! - `POST /api/todos` - Create a todo
//! - `PUT /api/todos/:id` - Update a todo's mutable fields
//! - `DELETE /api/todos/:id` - Delete a todo permanently
//! - `PATCH /api/todos/:id/toggle` - Flip a todo's completion flag

use crate::error::AppError;
use crate::state::AppState;
use crate::WebResult;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tasklist_core::{Todo, TodoId, TodoPatch};

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request to create a new todo.
///
/// `title` is optional at the wire level so a missing field reports the
/// same validation message as a blank one, instead of a deserialization
/// rejection.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    /// Todo title (required, non-empty once trimmed)
    pub title: Option<String>,
    /// Optional description
    pub description: Option<String>,
}

/// Confirmation returned by the delete endpoint.
#[derive(Debug, Serialize)]
pub struct DeleteTodoResponse {
    /// Success message
    pub message: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// List all todos, newest first.
///
/// # Example
///
/// ```bash
/// curl http://localhost:5000/api/todos
/// ```
///
/// # Errors
///
/// Returns 500 when the store backend fails.
pub async fn list_todos(State(state): State<AppState>) -> WebResult<Json<Vec<Todo>>> {
    let todos = state.service.list().await?;
    Ok(Json(todos))
}

/// Create a new todo.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:5000/api/todos \
///   -H "Content-Type: application/json" \
///   -d '{"title": "Buy milk", "description": "2%"}'
/// ```
///
/// # Errors
///
/// Returns 400 when the body is malformed or the title is missing/blank.
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<Todo>)> {
    let Json(request) = payload.map_err(bad_body)?;

    let todo = state
        .service
        .create(
            request.title.as_deref().unwrap_or_default(),
            request.description.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(todo)))
}

/// Update a todo's mutable fields. Omitted fields are left unchanged.
///
/// # Example
///
/// ```bash
/// curl -X PUT http://localhost:5000/api/todos/1 \
///   -H "Content-Type: application/json" \
///   -d '{"title": "Buy milk", "description": "2%", "completed": true}'
/// ```
///
/// # Errors
///
/// Returns 404 for an unknown id, 400 for a malformed body or blank title.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TodoPatch>, JsonRejection>,
) -> WebResult<Json<Todo>> {
    let Json(patch) = payload.map_err(bad_body)?;
    let todo = state.service.update(&TodoId::from(id), patch).await?;
    Ok(Json(todo))
}

/// Delete a todo permanently.
///
/// # Example
///
/// ```bash
/// curl -X DELETE http://localhost:5000/api/todos/1
/// ```
///
/// # Errors
///
/// Returns 404 for an unknown id — including a second delete of the same id.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebResult<Json<DeleteTodoResponse>> {
    state.service.delete(&TodoId::from(id)).await?;
    Ok(Json(DeleteTodoResponse {
        message: "Todo deleted successfully".to_string(),
    }))
}

/// Flip a todo's completion flag.
///
/// # Example
///
/// ```bash
/// curl -X PATCH http://localhost:5000/api/todos/1/toggle
/// ```
///
/// # Errors
///
/// Returns 404 for an unknown id.
pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebResult<Json<Todo>> {
    let todo = state.service.toggle(&TodoId::from(id)).await?;
    Ok(Json(todo))
}

fn bad_body(rejection: JsonRejection) -> AppError {
    AppError::bad_request(format!("Invalid request body: {}", rejection.body_text()))
}
