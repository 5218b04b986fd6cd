use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a todo, generated at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Generate a fresh random id
    pub fn new() -> TodoId {
        TodoId(Uuid::new_v4())
    }

    /// Parse an id from its string form
    pub fn parse(s: &str) -> Option<TodoId> {
        Uuid::parse_str(s).ok().map(TodoId)
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique id, immutable after creation
    pub id: TodoId,
    /// User-supplied text (non-emptiness enforced by the container, not here)
    pub text: String,
    /// Completion flag
    pub completed: bool,
    /// Category name (not required to exist in the category list)
    pub category: String,
    /// Creation timestamp, immutable
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Create a new incomplete todo with a fresh id and the current time
    pub fn new(text: String, category: String) -> Todo {
        Todo {
            id: TodoId::new(),
            text,
            completed: false,
            category,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_is_incomplete() {
        let todo = Todo::new("Buy milk".into(), "Shopping".into());
        assert!(!todo.completed);
        assert_eq!(todo.text, "Buy milk");
        assert_eq!(todo.category, "Shopping");
    }

    #[test]
    fn ids_are_unique() {
        let a = Todo::new("a".into(), "Personal".into());
        let b = Todo::new("b".into(), "Personal".into());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn id_round_trips_through_display() {
        let id = TodoId::new();
        assert_eq!(TodoId::parse(&id.to_string()), Some(id));
        assert_eq!(TodoId::parse("not a uuid"), None);
    }

    #[test]
    fn serde_uses_camel_case_created_at() {
        let todo = Todo::new("Call dentist".into(), "Health".into());
        let json = serde_json::to_string(&todo).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("\"created_at\""));
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }
}
