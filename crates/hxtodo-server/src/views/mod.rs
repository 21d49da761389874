//! Hypermedia views.
//!
//! Pure functions from todos to [`Node`](hxtodo_html::Node) trees. Every
//! interactive element carries the htmx attributes that tell the client
//! which endpoint to call (`hx-get`/`hx-post`/`hx-delete`), which element
//! to update (`hx-target`), and how to merge the response (`hx-swap`).
//!
//! A todo is always rendered inside `<article id="todo-<id>">`; that id is
//! the only link between a fragment and its place in the live page.

mod page;
mod todo;

pub use page::{counter, hello_page, index_page};
pub use todo::{todo_item, todo_list};

/// How a single todo is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoMode {
    /// Title plus toggle, edit, and delete buttons.
    Normal,
    /// A one-field form that saves the title.
    Edit,
}
