//! Full-page route handlers.

use axum::extract::State;

use hxtodo_db::pool::get_conn;
use hxtodo_db::queries::todos;

use crate::context::AppContext;
use crate::error::AppError;
use crate::html::HtmlFragment;
use crate::views::{hello_page, index_page};

/// GET /
pub async fn index(State(ctx): State<AppContext>) -> Result<HtmlFragment, AppError> {
    let conn = get_conn(&ctx.db)?;
    let todos = todos::list_todos(&conn)?;

    Ok(index_page(&todos).into())
}

/// GET / on the hello server.
pub async fn hello() -> HtmlFragment {
    hello_page().into()
}
