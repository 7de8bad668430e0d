//! Diesel row models for task persistence.

use super::schema::tasks;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Store-assigned row identifier.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Canonical priority string.
    pub priority: String,
    /// Optional due instant in epoch milliseconds.
    pub due_date: Option<i64>,
    /// Completion flag.
    pub completed: bool,
}

/// Insert model for new task records; the id column is store-assigned.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Display title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Canonical priority string.
    pub priority: String,
    /// Optional due instant in epoch milliseconds.
    pub due_date: Option<i64>,
    /// Completion flag.
    pub completed: bool,
}

/// Update model replacing every mutable column of an existing record.
///
/// `treat_none_as_null` makes clearing the description or due date an
/// explicit `NULL` write instead of a skipped column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Display title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Canonical priority string.
    pub priority: String,
    /// Optional due instant in epoch milliseconds.
    pub due_date: Option<i64>,
    /// Completion flag.
    pub completed: bool,
}
