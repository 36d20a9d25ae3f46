//! Todo List View Component
//!
//! Renders every item of the current snapshot in display order.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_app_store();

    let rows = move || store.todos().with(|todos| todos.items().to_vec());

    view! {
        <ul class="todo-list">
            <For
                each=rows
                // Text and completed are part of the key so edits re-render the row
                key=|item| (item.id, item.text.clone(), item.completed)
                children=move |item| view! { <TodoRow item=item /> }
            />
        </ul>
    }
}

/// "N items, M completed"
#[component]
pub fn ItemCount() -> impl IntoView {
    let store = use_app_store();

    view! {
        <p class="item-count">
            {move || store.todos().with(|todos| {
                format!("{} items, {} completed", todos.len(), todos.completed_count())
            })}
        </p>
    }
}
