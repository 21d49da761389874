//! Rust structs mapping to database tables.

use hxtodo_core::TodoId;

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Build a `Todo` from a row selected as `id, title, completed`.
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: TodoId::new(row.get(0)?),
            title: row.get(1)?,
            completed: row.get(2)?,
        })
    }
}
