//! Repository port for task persistence and query execution.

use crate::task::domain::{Task, TaskDraft, TaskId, TaskQuery};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Writes are serialized by the backing store; reads see a consistent
/// snapshot after each committed write.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persists a new task, assigning the next free identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Storage`] when the underlying store
    /// fails.
    async fn insert(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task>;

    /// Replaces the stored record carrying the task's identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no record has the
    /// identifier, or [`TaskRepositoryError::Storage`] when the store fails.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Removes the record with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no record has the
    /// identifier, or [`TaskRepositoryError::Storage`] when the store fails.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Executes a read query, returning the current ordered result set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Storage`] when the store fails.
    async fn fetch(&self, query: &TaskQuery) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// No stored record carries the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Unrecoverable storage-layer failure.
    #[error("storage fault: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps an underlying storage failure.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
