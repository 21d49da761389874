//! hxtodo-db: database access and persistence layer.
//!
//! SQLite storage with r2d2 connection pooling, embedded migrations, the
//! [`models::Todo`] model, and the todo query module.
//!
//! # Example
//!
//! ```
//! use hxtodo_db::pool::{get_conn, init_memory_pool};
//! use hxtodo_db::queries::todos;
//!
//! let pool = init_memory_pool().unwrap();
//! let conn = get_conn(&pool).unwrap();
//!
//! let todo = todos::create_todo(&conn, "Buy milk", false).unwrap();
//! assert_eq!(todos::list_todos(&conn).unwrap(), vec![todo]);
//! ```

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
