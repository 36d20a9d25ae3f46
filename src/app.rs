//! To-Do Frontend App
//!
//! Root component: builds the store and theme, provides them to the tree.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Header, ItemCount, TodoForm, TodoListView};
use crate::config::AppConfig;
use crate::store::{AppState, AppStateStoreFields, AppStore};
use crate::theme::{system_prefers_dark, ThemeContext};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());
    let theme = ThemeContext::new(config.starting_theme(system_prefers_dark));
    let title = config.title.clone();

    // Provide context to all children
    provide_context(store);
    provide_context(theme);
    provide_context(config);

    // Observe every published list snapshot
    Effect::new(move |_| {
        store.todos().with(|todos| {
            match serde_json::to_string(todos) {
                Ok(json) => log::debug!("snapshot {}", json),
                Err(e) => log::warn!("snapshot not serializable: {}", e),
            }
        });
    });

    let container_class = move || format!("app-container {}", theme.theme.get().css_class());

    view! {
        <div class=container_class>
            <Header />
            <main class="main-content">
                <h1 class="app-title">{title}</h1>
                <TodoForm />
                <TodoListView />
                <ItemCount />
            </main>
        </div>
    }
}
