//! Health check.

use axum::extract::State;

use hxtodo_db::pool::get_conn;
use hxtodo_db::queries::todos;

use crate::context::AppContext;
use crate::error::AppError;

/// GET /health
///
/// Answers `ok` once a pooled connection can run a query.
pub async fn health_check(State(ctx): State<AppContext>) -> Result<&'static str, AppError> {
    let conn = get_conn(&ctx.db)?;
    todos::count_todos(&conn)?;
    Ok("ok")
}
