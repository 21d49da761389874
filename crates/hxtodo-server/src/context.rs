//! Application context shared by all route handlers via Axum state.

use std::sync::Arc;

use hxtodo_core::config::Config;
use hxtodo_db::pool::DbPool;

/// Application context handed to every handler.
///
/// Built once at startup and cheaply cloneable: the pool is an `Arc`
/// internally and the config is shared read-only.
#[derive(Clone)]
pub struct AppContext {
    /// Database connection pool.
    pub db: DbPool,
    /// Immutable application configuration snapshot.
    pub config: Arc<Config>,
}

impl AppContext {
    pub fn new(db: DbPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}
