//! The todo entity and its state transitions.
//!
//! # Design
//! `Todo` owns its lifecycle rules: the id is assigned once at construction
//! and [`Todo::complete`] is the only mutation. Field length checks live in
//! [`crate::validate`] and run at the handler boundary before construction;
//! the constructor trusts its input so that the handler stays the single
//! place where the ordered validation messages are produced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AlreadyCompleted;

/// A single todo item.
///
/// Serializes with camelCase field names and an RFC 3339 `updatedAt`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a todo with a fresh v4 id, not yet completed.
    ///
    /// Does not re-check field lengths; callers run
    /// [`crate::validate::create`] first.
    pub fn new(title: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            is_completed: false,
            updated_at: Utc::now(),
        }
    }

    /// Marks the todo as completed and refreshes `updated_at`.
    ///
    /// Completion is one-way: a second call fails with [`AlreadyCompleted`]
    /// and leaves the value untouched.
    pub fn complete(&mut self) -> Result<(), AlreadyCompleted> {
        if self.is_completed {
            return Err(AlreadyCompleted { id: self.id });
        }
        self.is_completed = true;
        // updated_at never moves backwards, even if the wall clock does
        self.updated_at = Utc::now().max(self.updated_at);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo() -> Todo {
        Todo::new("Buy groceries".to_string(), "Milk and eggs".to_string())
    }

    #[test]
    fn new_todo_starts_incomplete() {
        let todo = todo();
        assert!(!todo.is_completed);
        assert_eq!(todo.title, "Buy groceries");
        assert_eq!(todo.description, "Milk and eggs");
    }

    #[test]
    fn new_todos_get_distinct_ids() {
        assert_ne!(todo().id, todo().id);
    }

    #[test]
    fn complete_sets_flag_and_keeps_id() {
        let mut todo = todo();
        let id = todo.id;
        todo.complete().unwrap();
        assert!(todo.is_completed);
        assert_eq!(todo.id, id);
    }

    #[test]
    fn complete_never_rewinds_updated_at() {
        let mut todo = todo();
        let created = todo.updated_at;
        todo.complete().unwrap();
        assert!(todo.updated_at >= created);
    }

    #[test]
    fn complete_twice_fails_and_stays_completed() {
        let mut todo = todo();
        todo.complete().unwrap();
        let stamp = todo.updated_at;

        let err = todo.complete().unwrap_err();
        assert_eq!(err.id, todo.id);
        assert!(todo.is_completed);
        assert_eq!(todo.updated_at, stamp);
    }

    #[test]
    fn already_completed_message_embeds_id() {
        let mut todo = todo();
        todo.complete().unwrap();
        let err = todo.complete().unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("The todo {} is already completed.", todo.id)
        );
    }

    #[test]
    fn todo_serializes_with_camel_case_keys() {
        let todo = todo();
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["title"], "Buy groceries");
        assert_eq!(json["isCompleted"], false);
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("is_completed").is_none());
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = todo();
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }
}
