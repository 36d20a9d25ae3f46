//! To-Do Frontend
//!
//! Single-page to-do list built with Leptos.

pub mod app;
pub mod components;
pub mod config;
pub mod editor;
pub mod logging;
pub mod models;
pub mod reducer;
pub mod store;
pub mod theme;
