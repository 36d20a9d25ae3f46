//! Header Component
//!
//! App name and the theme toggle.

use leptos::prelude::*;

use crate::config::use_config;
use crate::theme::use_theme;

/// Top bar with the light/dark switch
#[component]
pub fn Header() -> impl IntoView {
    let theme = use_theme();
    let config = use_config();

    view! {
        <header class="app-header">
            <h1>{config.app_name}</h1>
            <button class="theme-toggle" on:click=move |_| theme.toggle()>
                {move || theme.theme.get().toggle_label()}
            </button>
        </header>
    }
}
