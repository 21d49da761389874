//! Todo route handlers.
//!
//! Each handler checks out its own pooled connection, runs one store
//! operation, and answers with the fragment that replaces (or extends) the
//! todo's element on the page.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Form;
use serde::Deserialize;

use hxtodo_core::{Error, TodoId};
use hxtodo_db::pool::get_conn;
use hxtodo_db::queries::todos;

use crate::context::AppContext;
use crate::error::AppError;
use crate::html::HtmlFragment;
use crate::views::{todo_item, TodoMode};

/// Form body posted by the edit-mode form.
#[derive(Debug, Deserialize)]
pub struct SaveForm {
    pub title: String,
}

/// POST /todos/{id}/toggle
pub async fn toggle_todo(
    State(ctx): State<AppContext>,
    Path(id): Path<TodoId>,
) -> Result<HtmlFragment, AppError> {
    let conn = get_conn(&ctx.db)?;
    let todo = todos::toggle_completed(&conn, id)?.ok_or_else(|| Error::not_found("todo", id))?;

    tracing::debug!(todo_id = %id, completed = todo.completed, "Toggled todo");
    Ok(todo_item(&todo, TodoMode::Normal).into())
}

/// GET /todos/{id}/edit
pub async fn edit_todo(
    State(ctx): State<AppContext>,
    Path(id): Path<TodoId>,
) -> Result<HtmlFragment, AppError> {
    let conn = get_conn(&ctx.db)?;
    let todo = todos::get_todo(&conn, id)?.ok_or_else(|| Error::not_found("todo", id))?;

    Ok(todo_item(&todo, TodoMode::Edit).into())
}

/// POST /todos/{id}/save
pub async fn save_todo(
    State(ctx): State<AppContext>,
    Path(id): Path<TodoId>,
    Form(form): Form<SaveForm>,
) -> Result<HtmlFragment, AppError> {
    let conn = get_conn(&ctx.db)?;
    let todo =
        todos::update_title(&conn, id, &form.title)?.ok_or_else(|| Error::not_found("todo", id))?;

    tracing::debug!(todo_id = %id, "Saved todo title");
    Ok(todo_item(&todo, TodoMode::Normal).into())
}

/// POST /todos/new
///
/// The new todo comes back in edit mode so the user can type its title
/// straight away; the add button appends it to the list.
pub async fn new_todo(State(ctx): State<AppContext>) -> Result<HtmlFragment, AppError> {
    let conn = get_conn(&ctx.db)?;
    let todo = todos::create_todo(&conn, "", false)?;

    tracing::info!(todo_id = %todo.id, "Created todo");
    Ok(todo_item(&todo, TodoMode::Edit).into())
}

/// DELETE /todos/{id}
///
/// Answers 200 with an empty body whether or not the todo existed. htmx
/// skips the swap on 204, so the status has to stay 200 for `hx-swap="delete"`
/// to remove the element.
pub async fn delete_todo(
    State(ctx): State<AppContext>,
    Path(id): Path<TodoId>,
) -> Result<StatusCode, AppError> {
    let conn = get_conn(&ctx.db)?;
    if todos::delete_todo(&conn, id)? {
        tracing::info!(todo_id = %id, "Deleted todo");
    } else {
        tracing::debug!(todo_id = %id, "Delete of missing todo ignored");
    }

    Ok(StatusCode::OK)
}
