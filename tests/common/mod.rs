//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which creates an in-memory DB, default config,
//! and a full [`AppContext`]. The [`TestHarness::with_server`] constructor
//! starts Axum on a random port for HTTP-level testing.

#![allow(dead_code)]

use std::net::SocketAddr;

use hxtodo_core::config::Config;
use hxtodo_db::models::Todo;
use hxtodo_db::pool::{init_memory_pool, DbPool};
use hxtodo_db::queries::todos;
use hxtodo_server::context::AppContext;
use hxtodo_server::router::build_router;

/// Test harness wrapping a fully-constructed [`AppContext`] backed by an
/// in-memory database.
pub struct TestHarness {
    pub ctx: AppContext,
    pub db: DbPool,
}

impl TestHarness {
    /// Create a new harness with default configuration (no static
    /// directory) and in-memory DB.
    pub fn new() -> Self {
        let mut config = Config::default();
        config.server.static_dir = None;
        Self::with_config(config)
    }

    /// Create a harness with a custom configuration and in-memory DB.
    pub fn with_config(config: Config) -> Self {
        let db = init_memory_pool().expect("failed to create in-memory pool");
        let ctx = AppContext::new(db.clone(), config);
        Self { ctx, db }
    }

    /// The application router built from the harness context.
    pub fn router(&self) -> axum::Router {
        build_router(self.ctx.clone())
    }

    /// Start an Axum server on a random port and return the harness together
    /// with the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        let harness = Self::new();
        let app = harness.router();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        (harness, addr)
    }

    /// Get a database connection from the pool.
    pub fn conn(&self) -> hxtodo_db::pool::PooledConnection {
        hxtodo_db::pool::get_conn(&self.db).expect("failed to get db connection")
    }

    /// Insert a todo directly through the store.
    pub fn create_todo(&self, title: &str, completed: bool) -> Todo {
        todos::create_todo(&self.conn(), title, completed).expect("failed to create todo")
    }

    /// Read a todo directly from the store.
    pub fn get_todo(&self, todo: &Todo) -> Option<Todo> {
        todos::get_todo(&self.conn(), todo.id).expect("failed to read todo")
    }

    pub fn list_todos(&self) -> Vec<Todo> {
        todos::list_todos(&self.conn()).expect("failed to list todos")
    }
}

/// Pull the numeric id out of the first `id="todo-<n>"` in a fragment.
pub fn todo_id_in(html: &str) -> i64 {
    let start = html.find("id=\"todo-").expect("fragment has no todo article") + "id=\"todo-".len();
    let digits: String = html[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().expect("todo id is not a number")
}
