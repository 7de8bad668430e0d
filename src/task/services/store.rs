//! Live task store: writes bump a data version watched by query feeds.

use crate::task::domain::{Task, TaskDraft, TaskId, TaskQuery};
use crate::task::ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::error;

/// Durable task store with live query feeds.
///
/// Each successful write bumps a shared data version exactly once, after the
/// write commits; every [`TaskFeed`] created by [`TaskStore::watch`] re-runs
/// its query on version changes. Clones share the repository and the version
/// channel, so one store instance can serve the whole application.
pub struct TaskStore<R> {
    repository: Arc<R>,
    version: watch::Sender<u64>,
}

impl<R> Clone for TaskStore<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            version: self.version.clone(),
        }
    }
}

impl<R> TaskStore<R>
where
    R: TaskRepository,
{
    /// Creates a store over the given repository.
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        let (version, _) = watch::channel(0);
        Self {
            repository,
            version,
        }
    }

    /// Persists a new task and returns the stored record with its assigned
    /// id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Storage`] when the write fails.
    pub async fn insert(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let task = self.repository.insert(draft).await?;
        self.publish();
        Ok(task)
    }

    /// Replaces the stored record matching the task's id.
    ///
    /// A missing id is a logic error, since ids originate from this store;
    /// the condition is logged before the error propagates.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the id was never
    /// assigned, or [`TaskRepositoryError::Storage`] when the write fails.
    pub async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.repository
            .update(task)
            .await
            .inspect_err(|err| log_missing_id("update", err))?;
        self.publish();
        Ok(())
    }

    /// Removes the stored record with the given id.
    ///
    /// A missing id is a logic error, since ids originate from this store;
    /// the condition is logged before the error propagates.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the id was never
    /// assigned, or [`TaskRepositoryError::Storage`] when the write fails.
    pub async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.repository
            .delete(id)
            .await
            .inspect_err(|err| log_missing_id("delete", err))?;
        self.publish();
        Ok(())
    }

    /// Opens a live feed over the query.
    ///
    /// The feed yields the current result set immediately, then once per
    /// subsequent data change. Dropping the feed ends the subscription.
    #[must_use]
    pub fn watch(&self, query: TaskQuery) -> TaskFeed<R> {
        TaskFeed {
            repository: Arc::clone(&self.repository),
            query,
            changes: self.version.subscribe(),
            primed: false,
        }
    }

    fn publish(&self) {
        self.version
            .send_modify(|version| *version = version.wrapping_add(1));
    }
}

fn log_missing_id(operation: &str, err: &TaskRepositoryError) {
    if let TaskRepositoryError::NotFound(id) = err {
        error!(%id, operation, "write referenced a task id the store never assigned");
    }
}

/// A live query subscription produced by [`TaskStore::watch`].
pub struct TaskFeed<R> {
    repository: Arc<R>,
    query: TaskQuery,
    changes: watch::Receiver<u64>,
    primed: bool,
}

impl<R> TaskFeed<R>
where
    R: TaskRepository,
{
    /// Returns the query this feed executes.
    #[must_use]
    pub const fn query(&self) -> &TaskQuery {
        &self.query
    }

    /// Yields the next result set.
    ///
    /// The first call returns the current snapshot immediately; later calls
    /// wait for a data change and re-run the query. Bursts of writes
    /// coalesce into a single emission reflecting the latest committed
    /// state. Once the originating store is gone no further writes can
    /// occur, and the future never resolves.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Storage`] when query execution fails.
    pub async fn next(&mut self) -> TaskRepositoryResult<Vec<Task>> {
        if self.primed {
            if self.changes.changed().await.is_err() {
                return std::future::pending().await;
            }
        } else {
            self.primed = true;
            self.changes.mark_unchanged();
        }
        self.repository.fetch(&self.query).await
    }
}
