//! Database query modules.

pub mod todos;
