//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every write to a
//! field publishes a new snapshot to the components reading it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::editor::EditingSession;
use crate::models::{TodoId, TodoList};
use crate::reducer::TodoAction;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The to-do list
    pub todos: TodoList,
    /// Input text and current edit target
    pub editing: EditingSession,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run a transition and publish the resulting list
pub fn store_dispatch(store: &AppStore, action: TodoAction) {
    log::debug!("dispatch {:?}", action);
    let next = store.todos().with_untracked(|todos| todos.apply(action));
    *store.todos().write() = next;
}

/// Mirror the input field into the session
pub fn store_set_text(store: &AppStore, text: String) {
    store.editing().write().set_text(text);
}

/// Commit the staged text as an add or an edit
pub fn store_commit(store: &AppStore) {
    let action = store.editing().write().commit();
    if let Some(action) = action {
        store_dispatch(store, action);
    }
}

/// Enter edit mode for an item
pub fn store_start_edit(store: &AppStore, id: TodoId) {
    let todos = store.todos().get_untracked();
    store.editing().write().start_edit(&todos, id);
}

/// Per-row edit button
pub fn store_edit_button(store: &AppStore, id: TodoId) {
    let todos = store.todos().get_untracked();
    let action = store.editing().write().edit_button(&todos, id);
    if let Some(action) = action {
        store_dispatch(store, action);
    }
}

/// Leave edit mode and clear the input
pub fn store_cancel_edit(store: &AppStore) {
    store.editing().write().cancel_edit();
}

/// Flip an item's completed flag
pub fn store_toggle(store: &AppStore, id: TodoId) {
    store_dispatch(store, TodoAction::Toggle(id));
}

/// Remove an item, leaving edit mode if it was the edit target
pub fn store_delete(store: &AppStore, id: TodoId) {
    store_dispatch(store, TodoAction::Delete(id));
    if store.editing().with_untracked(|editing| editing.is_editing(id)) {
        log::debug!("edit target {} deleted, back to compose", id);
        store.editing().write().forget(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditMode;
    use leptos::reactive::owner::Owner;

    fn new_store() -> (Owner, AppStore) {
        let owner = Owner::new();
        owner.set();
        (owner, Store::new(AppState::new()))
    }

    fn texts(store: &AppStore) -> Vec<(String, bool)> {
        store.todos().with_untracked(|todos| {
            todos
                .items()
                .iter()
                .map(|item| (item.text.clone(), item.completed))
                .collect()
        })
    }

    #[test]
    fn test_compose_edit_toggle_delete_scenario() {
        let (_owner, store) = new_store();

        store_set_text(&store, "Buy milk".to_string());
        store_commit(&store);
        assert_eq!(texts(&store), vec![("Buy milk".to_string(), false)]);
        let id = store.todos().with_untracked(|todos| todos.items()[0].id);

        store_start_edit(&store, id);
        assert_eq!(store.editing().with_untracked(|e| e.staged().to_string()), "Buy milk");
        store_set_text(&store, "Buy oat milk".to_string());
        store_commit(&store);
        assert_eq!(texts(&store), vec![("Buy oat milk".to_string(), false)]);
        assert_eq!(store.todos().with_untracked(|todos| todos.items()[0].id), id);

        store_toggle(&store, id);
        assert_eq!(texts(&store), vec![("Buy oat milk".to_string(), true)]);
        store_toggle(&store, id);
        assert_eq!(texts(&store), vec![("Buy oat milk".to_string(), false)]);

        store_delete(&store, id);
        assert!(store.todos().with_untracked(|todos| todos.is_empty()));
    }

    #[test]
    fn test_blank_commit_changes_nothing() {
        let (_owner, store) = new_store();
        store_set_text(&store, "a".to_string());
        store_commit(&store);
        let id = store.todos().with_untracked(|todos| todos.items()[0].id);

        store_start_edit(&store, id);
        store_set_text(&store, "  ".to_string());
        let before = store.todos().get_untracked();
        store_commit(&store);

        assert_eq!(store.todos().get_untracked(), before);
        assert_eq!(store.editing().with_untracked(|e| e.mode()), EditMode::Editing(id));
    }

    #[test]
    fn test_deleting_edit_target_returns_to_compose() {
        let (_owner, store) = new_store();
        store_set_text(&store, "a".to_string());
        store_commit(&store);
        let id = store.todos().with_untracked(|todos| todos.items()[0].id);

        store_start_edit(&store, id);
        store_delete(&store, id);

        let editing = store.editing().get_untracked();
        assert_eq!(editing.mode(), EditMode::Composing);
        assert_eq!(editing.staged(), "");
    }

    #[test]
    fn test_deleting_other_item_keeps_edit() {
        let (_owner, store) = new_store();
        for text in ["a", "b"] {
            store_set_text(&store, text.to_string());
            store_commit(&store);
        }
        let ids: Vec<TodoId> =
            store.todos().with_untracked(|todos| todos.items().iter().map(|i| i.id).collect());

        store_start_edit(&store, ids[0]);
        store_delete(&store, ids[1]);

        assert_eq!(store.editing().with_untracked(|e| e.target()), Some(ids[0]));
        assert_eq!(texts(&store), vec![("a".to_string(), false)]);
    }

    #[test]
    fn test_edit_button_commits_when_already_editing() {
        let (_owner, store) = new_store();
        store_set_text(&store, "a".to_string());
        store_commit(&store);
        let id = store.todos().with_untracked(|todos| todos.items()[0].id);

        store_edit_button(&store, id);
        store_set_text(&store, "b".to_string());
        store_edit_button(&store, id);

        assert_eq!(texts(&store), vec![("b".to_string(), false)]);
        assert_eq!(store.editing().with_untracked(|e| e.mode()), EditMode::Composing);
    }

    #[test]
    fn test_cancel_edit_clears_input() {
        let (_owner, store) = new_store();
        store_set_text(&store, "a".to_string());
        store_commit(&store);
        let id = store.todos().with_untracked(|todos| todos.items()[0].id);

        store_start_edit(&store, id);
        store_cancel_edit(&store);

        assert_eq!(store.editing().get_untracked(), EditingSession::new());
        assert_eq!(texts(&store), vec![("a".to_string(), false)]);
    }
}
