//! HTTP error mapping for the todo service.
//!
//! # Design
//! Three tiers, mirrored in the response codes: validation errors → 400,
//! not-found → 404, storage failures → 500. Every error renders as a JSON
//! `{"error": "..."}` payload so clients get one shape regardless of tier.
//! Nothing is retried; storage failures are logged and surfaced as-is.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("todo not found")]
    NotFound,

    #[error("todo body is required")]
    EmptyBody,

    #[error("invalid todo payload: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::EmptyBody | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "storage failure");
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
