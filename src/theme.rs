//! Theme Provider
//!
//! Light/dark flag shared with every component through context. `App`
//! constructs a `ThemeContext` and injects it; components read it with
//! `use_theme()`. `toggle` is the only way to change it.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the toggle control: names the theme it switches to
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }
}

/// Theme signals provided via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme - read
    pub theme: ReadSignal<Theme>,
    /// Current theme - write
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn new(initial: Theme) -> Self {
        let (theme, set_theme) = signal(initial);
        Self { theme, set_theme }
    }

    /// Flip between light and dark
    pub fn toggle(&self) {
        self.set_theme.update(|theme| *theme = theme.toggled());
        log::info!("theme switched to {:?}", self.theme.get_untracked());
    }
}

/// Get the theme from context
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Whether the browser reports a dark color-scheme preference
pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map_or(false, |query| query.matches())
}
