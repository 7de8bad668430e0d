//! `SQLite` adapter implementations for task storage.

pub mod models;
pub mod repository;
pub mod schema;

pub use repository::SqliteTaskRepository;
