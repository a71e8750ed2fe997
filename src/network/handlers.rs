//! Request handlers
//!
//! Extracts the document, runs it through the engine and maps the envelope
//! to a status code.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::engine::Engine;
use crate::query::Response;

/// Shared state for the handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,

    /// Largest accepted document (bytes)
    pub max_document_bytes: usize,
}

impl AppState {
    pub fn new(engine: Arc<Engine>) -> Self {
        let max_document_bytes = engine.config().max_document_bytes;
        Self {
            engine,
            max_document_bytes,
        }
    }
}

/// Query-string parameters of the endpoint
#[derive(Debug, Default, Deserialize)]
pub struct QueryParams {
    #[serde(default)]
    pub query: Option<String>,
}

/// `GET|POST <endpoint>?query=<document>`
///
/// - 200: the document executed (query-level errors are in the body)
/// - 400: no document, or a document over the size limit
/// - 500: a storage error occurred while resolving
pub async fn execute_query(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> (StatusCode, Json<Response>) {
    let document = match params.query {
        Some(query) if !query.trim().is_empty() => query,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(Response::failed("Must provide query string.")),
            )
        }
    };

    if document.len() > state.max_document_bytes {
        return (
            StatusCode::BAD_REQUEST,
            Json(Response::failed(format!(
                "Query document too large: {} bytes (max {})",
                document.len(),
                state.max_document_bytes
            ))),
        );
    }

    let response = state.engine.execute(&document).await;

    let status = if response.storage_failure {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };

    (status, Json(response))
}
