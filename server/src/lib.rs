//! Todo REST service over pluggable storage.
//!
//! # Design
//! Four routes under `/api/todos`, each handler performing a single call
//! against the injected `TodoStore` handle and serializing the result to
//! JSON. The store is chosen at startup (in-memory or sled) and shared
//! through axum state as `Arc<dyn TodoStore>`; handlers never touch backend
//! specifics. CORS is pinned to one origin and the four methods the API uses.
//!
//! Update and delete return 404 when no record matches: both backends report
//! match counts rather than succeeding unconditionally on a no-op filter.

pub mod config;
pub mod error;
pub mod model;
pub mod store;

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::routing::{get, patch};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub use config::Config;
pub use error::ApiError;
pub use model::{CreateTodo, Todo};
pub use store::{MemoryStore, SledStore, StoreError, TodoStore};

/// One store handle shared by every request for the process lifetime.
pub type SharedStore = Arc<dyn TodoStore>;

/// Build the router: the four CRUD routes plus CORS and request tracing.
pub fn app(store: SharedStore, cors_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", patch(complete_todo).delete(delete_todo))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(store)
}

/// Serve the app until the listener closes.
pub async fn run(
    listener: TcpListener,
    store: SharedStore,
    cors_origin: HeaderValue,
) -> std::io::Result<()> {
    axum::serve(listener, app(store, cors_origin)).await
}

async fn list_todos(State(store): State<SharedStore>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(store.list().await?))
}

async fn create_todo(
    State(store): State<SharedStore>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    // Malformed JSON and a missing `body` field are both client errors, so
    // axum's default 422 rejection is folded into the 400 tier.
    let Json(input) = payload.map_err(|rejection| ApiError::InvalidBody(rejection.to_string()))?;
    if input.body.is_empty() {
        return Err(ApiError::EmptyBody);
    }

    let todo = Todo::new(input.body);
    store.insert(todo.clone()).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn complete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<Uuid>,
) -> Result<Json<Todo>, ApiError> {
    let todo = store.complete(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(todo))
}

async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !store.remove(id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(Json(serde_json::json!({ "success": true })))
}
