//! Frontend Models
//!
//! Data structures for the to-do list.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a to-do item, unique within its list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Single to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Ordered collection of items. Insertion order is display order.
///
/// `next_id` only ever grows, so ids of deleted items are never handed out
/// again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoList {
    pub(crate) items: Vec<TodoItem>,
    pub(crate) next_id: u64,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    /// Id the next `Add` will assign
    pub fn peek_next_id(&self) -> TodoId {
        TodoId(self.next_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, text: &str, completed: bool) -> TodoItem {
        TodoItem {
            id: TodoId(id),
            text: text.to_string(),
            completed,
        }
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = TodoList::new();
        assert!(list.is_empty());
        assert_eq!(list.peek_next_id(), TodoId(1));
    }

    #[test]
    fn test_counts() {
        let list = TodoList {
            items: vec![item(1, "a", true), item(2, "b", false), item(3, "c", true)],
            next_id: 4,
        };
        assert_eq!(list.len(), 3);
        assert_eq!(list.completed_count(), 2);
        assert_eq!(list.remaining_count(), 1);
        assert_eq!(list.get(TodoId(2)).map(|i| i.text.as_str()), Some("b"));
        assert!(!list.contains(TodoId(9)));
    }

    #[test]
    fn test_snapshot_json_shape() {
        let list = TodoList {
            items: vec![item(7, "Buy milk", false)],
            next_id: 8,
        };
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "items": [{ "id": 7, "text": "Buy milk", "completed": false }],
                "next_id": 8
            })
        );
    }
}
