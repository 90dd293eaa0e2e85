//! Domain DTOs for the todo API.
//!
//! These mirror the server's schema but are defined independently so the
//! client crate has no dependency on axum internals. The integration test
//! catches any drift between the two.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub completed: bool,
    pub body: String,
}

/// Request payload for creating a new todo. The server rejects an empty
/// `body` with 400.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub body: String,
}

/// Confirmation payload returned by a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAck {
    pub success: bool,
}
