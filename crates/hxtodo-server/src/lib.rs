//! hxtodo-server: hypermedia views and the HTTP server.
//!
//! This crate ties the store and the renderer together into a running
//! server. It provides:
//!
//! - [`views`]: pure functions building htmx-annotated fragment trees
//! - [`routes`]: one Axum handler per endpoint
//! - [`router`]: the route table, middleware, and static file serving
//! - [`start`] / [`start_hello`]: bind, serve, and shut down on a signal

pub mod context;
pub mod error;
pub mod html;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod views;

use std::net::SocketAddr;

use axum::Router;
use hxtodo_core::config::Config;

use crate::context::AppContext;

/// Start the todo application server.
///
/// Opens (and migrates) the database, builds the [`AppContext`], and serves
/// until Ctrl+C or SIGTERM.
pub async fn start(config: Config) -> hxtodo_core::Result<()> {
    for warning in config.validate() {
        tracing::warn!("Config warning: {warning}");
    }

    let db_path = &config.server.db_path;
    let existed = db_path.exists();
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            tracing::info!("Created database directory {}", parent.display());
        }
    }
    let db_str = db_path.to_string_lossy();
    let db = hxtodo_db::pool::init_pool(&db_str)?;
    if existed {
        tracing::info!("Database opened (existing) at {db_str}");
    } else {
        tracing::info!("Database created (new) at {db_str}");
    }

    let addr = server_addr(&config)?;
    let ctx = AppContext::new(db, config);
    let app = router::build_router(ctx);

    serve(addr, app).await
}

/// Start the standalone hello page server.
pub async fn start_hello(config: Config) -> hxtodo_core::Result<()> {
    let addr = server_addr(&config)?;
    serve(addr, router::build_hello_router()).await
}

fn server_addr(config: &Config) -> hxtodo_core::Result<SocketAddr> {
    format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| hxtodo_core::Error::Validation(format!("Invalid server address: {e}")))
}

async fn serve(addr: SocketAddr, app: Router) -> hxtodo_core::Result<()> {
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| hxtodo_core::Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_addr_from_config() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".into();
        config.server.port = 5001;
        assert_eq!(server_addr(&config).unwrap().to_string(), "127.0.0.1:5001");
    }

    #[test]
    fn invalid_host_is_validation_error() {
        let mut config = Config::default();
        config.server.host = "not a host".into();
        assert!(matches!(
            server_addr(&config),
            Err(hxtodo_core::Error::Validation(_))
        ));
    }
}
