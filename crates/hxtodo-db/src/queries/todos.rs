//! Todo CRUD operations.
//!
//! Every mutation is a single autocommitted statement. Updates use
//! `RETURNING` so the row handed back is exactly what the statement wrote,
//! and a missing id surfaces as `Ok(None)` rather than an error.

use hxtodo_core::{Error, Result, TodoId};
use rusqlite::{Connection, OptionalExtension};

use crate::models::Todo;

const COLS: &str = "id, title, completed";

/// Insert a new todo and return it with its freshly assigned id.
pub fn create_todo(conn: &Connection, title: &str, completed: bool) -> Result<Todo> {
    let q = format!("INSERT INTO todos (title, completed) VALUES (?1, ?2) RETURNING {COLS}");
    conn.query_row(&q, rusqlite::params![title, completed], Todo::from_row)
        .map_err(|e| Error::database(e.to_string()))
}

/// Get a todo by ID.
pub fn get_todo(conn: &Connection, id: TodoId) -> Result<Option<Todo>> {
    let q = format!("SELECT {COLS} FROM todos WHERE id = ?1");
    conn.query_row(&q, [id.get()], Todo::from_row)
        .optional()
        .map_err(|e| Error::database(e.to_string()))
}

/// List all todos in insertion order.
pub fn list_todos(conn: &Connection) -> Result<Vec<Todo>> {
    let q = format!("SELECT {COLS} FROM todos ORDER BY id");
    let mut stmt = conn.prepare(&q).map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], Todo::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Overwrite a todo's title.
pub fn update_title(conn: &Connection, id: TodoId, title: &str) -> Result<Option<Todo>> {
    let q = format!("UPDATE todos SET title = ?1 WHERE id = ?2 RETURNING {COLS}");
    conn.query_row(&q, rusqlite::params![title, id.get()], Todo::from_row)
        .optional()
        .map_err(|e| Error::database(e.to_string()))
}

/// Set a todo's completion flag.
pub fn set_completed(conn: &Connection, id: TodoId, completed: bool) -> Result<Option<Todo>> {
    let q = format!("UPDATE todos SET completed = ?1 WHERE id = ?2 RETURNING {COLS}");
    conn.query_row(&q, rusqlite::params![completed, id.get()], Todo::from_row)
        .optional()
        .map_err(|e| Error::database(e.to_string()))
}

/// Flip a todo's completion flag in one statement.
pub fn toggle_completed(conn: &Connection, id: TodoId) -> Result<Option<Todo>> {
    let q = format!("UPDATE todos SET completed = NOT completed WHERE id = ?1 RETURNING {COLS}");
    conn.query_row(&q, [id.get()], Todo::from_row)
        .optional()
        .map_err(|e| Error::database(e.to_string()))
}

/// Delete a todo. Returns true if a row was removed.
pub fn delete_todo(conn: &Connection, id: TodoId) -> Result<bool> {
    let n = conn
        .execute("DELETE FROM todos WHERE id = ?1", [id.get()])
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}

/// Count all todos.
pub fn count_todos(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM todos", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}
