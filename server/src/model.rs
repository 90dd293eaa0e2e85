//! Domain types for the todo service.
//!
//! # Design
//! `id` is a server-assigned v4 UUID for both storage backends, so the key
//! scheme stays opaque to clients and does not depend on which backend is
//! configured. `completed` only ever transitions false → true; the update
//! endpoint carries no payload and the only mutation is marking a todo done.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item as stored and as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub completed: bool,
    pub body: String,
}

impl Todo {
    /// Build a fresh todo: server-assigned id, `completed` starts false.
    pub fn new(body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            completed: false,
            body,
        }
    }
}

/// Request payload for creating a new todo. `body` must be non-empty;
/// the handler rejects empty strings with 400.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_starts_uncompleted() {
        let todo = Todo::new("Buy milk".to_string());
        assert!(!todo.completed);
        assert_eq!(todo.body, "Buy milk");
    }

    #[test]
    fn new_todos_get_distinct_ids() {
        let a = Todo::new("a".to_string());
        let b = Todo::new("b".to_string());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: Uuid::nil(),
            completed: false,
            body: "Test".to_string(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["completed"], false);
        assert_eq!(json["body"], "Test");
    }

    #[test]
    fn create_todo_rejects_missing_body() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_todo_parses_body_field() {
        let input: CreateTodo = serde_json::from_str(r#"{"body":"Walk dog"}"#).unwrap();
        assert_eq!(input.body, "Walk dog");
    }
}
