//! Todo Row Component
//!
//! Individual item in the list.

use leptos::prelude::*;

use crate::models::TodoItem;
use crate::store::{store_delete, store_edit_button, store_toggle, use_app_store, AppStateStoreFields};

/// A single item row
#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let completed = item.completed;
    let is_target = move || store.editing().with(|editing| editing.is_editing(id));

    let edit_class = move || {
        if is_target() { "edit-btn active" } else { "edit-btn" }
    };

    view! {
        <li class=move || if completed { "todo-row completed" } else { "todo-row" }>
            <label class="todo-main">
                <input
                    type="checkbox"
                    checked=completed
                    on:change=move |_| store_toggle(&store, id)
                />
                <span class="todo-text">{item.text}</span>
            </label>
            <div class="todo-actions">
                <button class=edit_class on:click=move |_| store_edit_button(&store, id)>"Edit"</button>
                <button class="delete-btn" on:click=move |_| store_delete(&store, id)>"Delete"</button>
            </div>
        </li>
    }
}
