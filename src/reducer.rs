//! Todo Transitions
//!
//! Pure state transitions over a `TodoList`.

use crate::models::{TodoId, TodoItem, TodoList};

/// A transition the list can undergo
#[derive(Debug, Clone, PartialEq)]
pub enum TodoAction {
    Add(String),
    Delete(TodoId),
    Toggle(TodoId),
    Edit(TodoId, String),
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

impl TodoList {
    /// Apply `action`, returning the next list. `self` is left untouched.
    ///
    /// Ids that are not present, and blank text, leave the list unchanged.
    pub fn apply(&self, action: TodoAction) -> TodoList {
        match action {
            TodoAction::Add(text) => {
                if is_blank(&text) {
                    return self.clone();
                }
                let mut items = self.items.clone();
                items.push(TodoItem::new(TodoId(self.next_id), text));
                TodoList {
                    items,
                    next_id: self.next_id + 1,
                }
            }
            TodoAction::Delete(id) => TodoList {
                items: self.items.iter().filter(|item| item.id != id).cloned().collect(),
                next_id: self.next_id,
            },
            TodoAction::Toggle(id) => self.map_item(id, |item| item.completed = !item.completed),
            TodoAction::Edit(id, text) => {
                if is_blank(&text) {
                    return self.clone();
                }
                self.map_item(id, move |item| item.text = text.clone())
            }
        }
    }

    fn map_item(&self, id: TodoId, mut f: impl FnMut(&mut TodoItem)) -> TodoList {
        let items = self
            .items
            .iter()
            .map(|item| {
                let mut item = item.clone();
                if item.id == id {
                    f(&mut item);
                }
                item
            })
            .collect();
        TodoList {
            items,
            next_id: self.next_id,
        }
    }
}
