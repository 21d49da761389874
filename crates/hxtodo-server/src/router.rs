//! Axum router construction.
//!
//! Builds the todo application router with its middleware layers and
//! optional static file serving, plus the one-page hello router.

use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;
use crate::middleware::request_id::request_id_middleware;
use crate::routes;

/// Build the todo application router.
///
/// `server.static_dir` from the context's config is served under `/static`
/// when it exists on disk.
pub fn build_router(ctx: AppContext) -> Router {
    let todo_routes = Router::new()
        .route("/todos/new", post(routes::todos::new_todo))
        .route("/todos/{id}", delete(routes::todos::delete_todo))
        .route("/todos/{id}/toggle", post(routes::todos::toggle_todo))
        // Legacy misspelling, kept for pages rendered before the rename.
        .route("/todos/{id}/toogle", post(routes::todos::toggle_todo))
        .route("/todos/{id}/edit", get(routes::todos::edit_todo))
        .route("/todos/{id}/save", post(routes::todos::save_todo));

    let mut app = Router::new()
        .route("/", get(routes::pages::index))
        .route("/health", get(routes::health::health_check))
        .merge(todo_routes);

    if let Some(dir) = &ctx.config.server.static_dir {
        if dir.exists() {
            tracing::info!("Serving static files from {}", dir.display());
            app = app.nest_service("/static", ServeDir::new(dir));
        } else {
            tracing::debug!("Static dir {} missing; /static disabled", dir.display());
        }
    }

    app.layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// Build the standalone hello page router.
pub fn build_hello_router() -> Router {
    Router::new()
        .route("/", get(routes::pages::hello))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}
