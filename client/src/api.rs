//! HTTP client for the Tasklist REST API.

use serde::{Deserialize, Serialize};
use tasklist_core::{Todo, TodoId, TodoPatch};
use thiserror::Error;

/// Errors surfaced by [`TodoApi`] calls.
///
/// No retries, timeouts, or cancellation are layered on top: a failed
/// call is simply reported to the caller.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with an error status and `{message}` body.
    #[error("Server responded {status}: {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Message from the error body
        message: String,
    },

    /// The request never completed (connection refused, DNS, ...).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Error body shape returned by the server's error formatter.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Body for the create endpoint.
#[derive(Debug, Serialize)]
struct CreateBody<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

/// Thin client over the `/api` surface. One method per route.
#[derive(Clone)]
pub struct TodoApi {
    client: reqwest::Client,
    base_url: String,
}

impl TodoApi {
    /// Create a client for a server base URL, e.g. `http://localhost:5000`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// `GET /api/todos`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-2xx response.
    pub async fn list(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/todos", self.base_url))
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    /// `POST /api/todos`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Server`] with status 400 when the title is
    /// rejected by the server.
    pub async fn create(&self, title: &str, description: Option<&str>) -> Result<Todo, ApiError> {
        let response = self
            .client
            .post(format!("{}/api/todos", self.base_url))
            .json(&CreateBody { title, description })
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    /// `PUT /api/todos/:id`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Server`] with status 404 for an unknown id.
    pub async fn update(&self, id: &TodoId, patch: &TodoPatch) -> Result<Todo, ApiError> {
        #[derive(Serialize)]
        struct PatchBody<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            title: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            completed: Option<bool>,
        }

        let response = self
            .client
            .put(format!("{}/api/todos/{id}", self.base_url))
            .json(&PatchBody {
                title: patch.title.as_deref(),
                description: patch.description.as_deref(),
                completed: patch.completed,
            })
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    /// `PATCH /api/todos/:id/toggle`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Server`] with status 404 for an unknown id.
    pub async fn toggle(&self, id: &TodoId) -> Result<Todo, ApiError> {
        let response = self
            .client
            .patch(format!("{}/api/todos/{id}/toggle", self.base_url))
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    /// `DELETE /api/todos/:id`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Server`] with status 404 for an unknown id.
    pub async fn delete(&self, id: &TodoId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/api/todos/{id}", self.base_url))
            .send()
            .await
            .map_err(transport)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(server_error(response).await)
        }
    }
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    if response.status().is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Err(server_error(response).await)
    }
}

async fn server_error(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => "Unknown server error".to_string(),
    };
    ApiError::Server { status, message }
}
