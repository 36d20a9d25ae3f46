//! Application Configuration
//!
//! Static settings chosen at startup and provided via context.

use leptos::prelude::*;
use log::LevelFilter;

use crate::theme::Theme;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Shown in the header next to the theme toggle
    pub app_name: String,
    /// Page heading above the input
    pub title: String,
    pub placeholder: String,
    pub initial_theme: Theme,
    /// Take the initial theme from `prefers-color-scheme` instead
    pub follow_system_theme: bool,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "My App".to_string(),
            title: "To-Do App".to_string(),
            placeholder: "Add To Do".to_string(),
            initial_theme: Theme::Light,
            follow_system_theme: false,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Resolve the theme to start with. `system_dark` is only consulted when
    /// following the system preference.
    pub fn starting_theme(&self, system_dark: impl FnOnce() -> bool) -> Theme {
        if self.follow_system_theme {
            Theme::from_dark(system_dark())
        } else {
            self.initial_theme
        }
    }
}

/// Get the config from context
pub fn use_config() -> AppConfig {
    expect_context::<AppConfig>()
}
