//! UI Components
//!
//! Leptos components for the to-do page.

mod header;
mod todo_form;
mod todo_list_view;
mod todo_row;

pub use header::Header;
pub use todo_form::TodoForm;
pub use todo_list_view::{ItemCount, TodoListView};
pub use todo_row::TodoRow;
