//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates. The owner
//! field travels as `userId` on the wire.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
///
/// Records are created remotely and never mutated by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_uses_camel_case_owner_field() {
        let todo = Todo {
            id: 7,
            title: "Write docs".to_string(),
            completed: false,
            user_id: 42,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["userId"], 42);
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn todo_rejects_missing_owner() {
        let result: Result<Todo, _> =
            serde_json::from_str(r#"{"id":1,"title":"A","completed":false}"#);
        assert!(result.is_err());
    }
}
