//! HTTP API integration tests.
//!
//! Runs the full router in-process over the in-memory backend with
//! `axum-test`, covering the status-code contract and the end-to-end
//! create/toggle/update/delete scenario.

#![allow(clippy::expect_used)] // Integration tests can use expect for setup
#![allow(clippy::unwrap_used)]

use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;
use tasklist_core::{MemoryStore, TodoService};
use tasklist_web::{build_router, AppState};

fn test_server() -> TestServer {
    let service = TodoService::new(Arc::new(MemoryStore::new()));
    let app = build_router(AppState::new(service, "in-memory"));
    TestServer::new(app).expect("Failed to start test server")
}

#[tokio::test]
async fn health_reports_status_and_backend() {
    let server = test_server();

    let response = server.get("/api/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"], "in-memory");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn list_starts_empty() {
    let server = test_server();

    let response = server.get("/api/todos").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Value>>(), Vec::<Value>::new());
}

#[tokio::test]
async fn create_returns_201_with_generated_fields() {
    let server = test_server();

    let response = server
        .post("/api/todos")
        .json(&json!({"title": "Buy milk"}))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let todo: Value = response.json();
    assert!(todo["id"].is_string());
    assert_eq!(todo["title"], "Buy milk");
    assert_eq!(todo["description"], "");
    assert_eq!(todo["completed"], false);
    assert!(todo["createdAt"].is_string());
}

#[tokio::test]
async fn create_with_missing_or_blank_title_is_400() {
    let server = test_server();

    let missing = server.post("/api/todos").json(&json!({})).await;
    missing.assert_status(axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(missing.json::<Value>()["message"], "Title is required");

    let blank = server
        .post("/api/todos")
        .json(&json!({"title": "   "}))
        .await;
    blank.assert_status(axum::http::StatusCode::BAD_REQUEST);

    // Nothing was inserted by either attempt.
    let listed: Vec<Value> = server.get("/api/todos").await.json();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn malformed_body_is_400() {
    let server = test_server();

    let response = server
        .post("/api/todos")
        .content_type("application/json")
        .text("{not json")
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn list_returns_newest_first() {
    let server = test_server();

    server.post("/api/todos").json(&json!({"title": "A"})).await;
    server.post("/api/todos").json(&json!({"title": "B"})).await;

    let listed: Vec<Value> = server.get("/api/todos").await.json();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["title"], "B");
    assert_eq!(listed[1]["title"], "A");
}

#[tokio::test]
async fn unknown_id_is_404_everywhere() {
    let server = test_server();

    let put = server
        .put("/api/todos/999")
        .json(&json!({"title": "x"}))
        .await;
    put.assert_status(axum::http::StatusCode::NOT_FOUND);
    assert_eq!(put.json::<Value>()["message"], "Todo not found");

    server
        .delete("/api/todos/999")
        .await
        .assert_status(axum::http::StatusCode::NOT_FOUND);
    server
        .patch("/api/todos/999/toggle")
        .await
        .assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn full_lifecycle_scenario() {
    let server = test_server();

    // POST -> 201 with generated id
    let created: Value = server
        .post("/api/todos")
        .json(&json!({"title": "Buy milk"}))
        .await
        .json();
    let id = created["id"].as_str().expect("id should be a string");
    assert_eq!(created["completed"], false);

    // GET includes it first
    let listed: Vec<Value> = server.get("/api/todos").await.json();
    assert_eq!(listed[0]["id"], id);

    // PATCH toggle -> completed true
    let toggled: Value = server
        .patch(&format!("/api/todos/{id}/toggle"))
        .await
        .json();
    assert_eq!(toggled["completed"], true);

    // PUT updates fields, id/createdAt unchanged
    let updated_response = server
        .put(&format!("/api/todos/{id}"))
        .json(&json!({"title": "Buy milk", "description": "2%", "completed": true}))
        .await;
    updated_response.assert_status_ok();
    let updated: Value = updated_response.json();
    assert_eq!(updated["description"], "2%");
    assert_eq!(updated["id"], id);
    assert_eq!(updated["createdAt"], created["createdAt"]);

    // DELETE -> 200 with confirmation
    let deleted = server.delete(&format!("/api/todos/{id}")).await;
    deleted.assert_status_ok();
    assert_eq!(
        deleted.json::<Value>()["message"],
        "Todo deleted successfully"
    );

    // Subsequent GET no longer includes the id
    let listed: Vec<Value> = server.get("/api/todos").await.json();
    assert!(listed.iter().all(|todo| todo["id"] != id));

    // Deleting twice -> 404
    server
        .delete(&format!("/api/todos/{id}"))
        .await
        .assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_with_omitted_fields_changes_nothing_else() {
    let server = test_server();

    let created: Value = server
        .post("/api/todos")
        .json(&json!({"title": "Walk dog", "description": "morning"}))
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let updated: Value = server
        .put(&format!("/api/todos/{id}"))
        .json(&json!({"completed": true}))
        .await
        .json();

    assert_eq!(updated["title"], "Walk dog");
    assert_eq!(updated["description"], "morning");
    assert_eq!(updated["completed"], true);
}

#[tokio::test]
async fn isolated_servers_do_not_share_state() {
    let a = test_server();
    let b = test_server();

    a.post("/api/todos").json(&json!({"title": "A"})).await;

    let listed: Vec<Value> = b.get("/api/todos").await.json();
    assert!(listed.is_empty());
}
