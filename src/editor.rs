//! Editing Controller
//!
//! Mediates between the single text input and the list. The same input is
//! used both to compose new items and to edit an existing one.

use crate::models::{TodoId, TodoList};
use crate::reducer::TodoAction;

/// Which way a commit will go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Composing,
    Editing(TodoId),
}

/// Staged input text plus the item being edited, if any
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditingSession {
    target: Option<TodoId>,
    staged: String,
}

impl EditingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditMode {
        match self.target {
            Some(id) => EditMode::Editing(id),
            None => EditMode::Composing,
        }
    }

    pub fn target(&self) -> Option<TodoId> {
        self.target
    }

    pub fn staged(&self) -> &str {
        &self.staged
    }

    pub fn is_editing(&self, id: TodoId) -> bool {
        self.target == Some(id)
    }

    /// Mirror the input field
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.staged = text.into();
    }

    /// Stage the text of `id` and retarget to it. Unknown ids are ignored.
    pub fn start_edit(&mut self, list: &TodoList, id: TodoId) {
        if let Some(item) = list.get(id) {
            self.staged = item.text.clone();
            self.target = Some(id);
        }
    }

    pub fn cancel_edit(&mut self) {
        self.staged.clear();
        self.target = None;
    }

    /// Turn the staged text into an action.
    ///
    /// Blank text yields `None` and leaves the session as it was. Otherwise
    /// the session returns to composing with an empty input.
    pub fn commit(&mut self) -> Option<TodoAction> {
        if self.staged.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.staged);
        let action = match self.target.take() {
            Some(id) => TodoAction::Edit(id, text),
            None => TodoAction::Add(text),
        };
        Some(action)
    }

    /// Row "Edit" button: commits when `id` is already the target,
    /// otherwise starts editing it.
    pub fn edit_button(&mut self, list: &TodoList, id: TodoId) -> Option<TodoAction> {
        if self.is_editing(id) {
            self.commit()
        } else {
            self.start_edit(list, id);
            None
        }
    }

    /// Drop the edit target if it was `id`
    pub fn forget(&mut self, id: TodoId) {
        if self.is_editing(id) {
            self.cancel_edit();
        }
    }

    pub fn primary_label(&self) -> &'static str {
        match self.mode() {
            EditMode::Composing => "Add",
            EditMode::Editing(_) => "Update",
        }
    }

    pub fn shows_cancel(&self) -> bool {
        self.target.is_some()
    }
}
