//! Todo Form Component
//!
//! Single input used for both new items and edits.

use leptos::prelude::*;

use crate::config::use_config;
use crate::store::{
    store_cancel_edit, store_commit, store_set_text, use_app_store, AppStateStoreFields,
};

/// Input row: text field, Add/Update button, and Cancel while editing
#[component]
pub fn TodoForm() -> impl IntoView {
    let store = use_app_store();
    let config = use_config();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_commit(&store);
    };

    view! {
        <form class="todo-form" on:submit=on_submit>
            <input
                type="text"
                class="todo-input"
                placeholder=config.placeholder
                prop:value=move || store.editing().with(|editing| editing.staged().to_string())
                on:input=move |ev| store_set_text(&store, event_target_value(&ev))
            />
            <button type="submit" class="primary-btn">
                {move || store.editing().with(|editing| editing.primary_label())}
            </button>
            <Show when=move || store.editing().with(|editing| editing.shows_cancel())>
                <button type="button" class="cancel-btn" on:click=move |_| store_cancel_edit(&store)>
                    "Cancel"
                </button>
            </Show>
        </form>
    }
}
