//! In-memory repository for task store tests.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{PersistedTask, Priority, Task, TaskDraft, TaskId, TaskQuery},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Mirrors the `SQLite` adapter's filtering and ordering rules so the store
/// services can be exercised without I/O. Identifiers come from a monotonic
/// counter and are never reused within the repository's lifetime.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    last_id: i64,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::storage(std::io::Error::other(err.to_string()))
}

/// Returns whether the task belongs to the query's result set.
fn matches(query: &TaskQuery, task: &Task) -> bool {
    match query {
        TaskQuery::All | TaskQuery::SortedByDueDate | TaskQuery::SortedByPriority => true,
        TaskQuery::Completed => task.completed(),
        TaskQuery::Incomplete => !task.completed(),
        TaskQuery::HighPriority => task.priority() == Priority::High,
        TaskQuery::TitleSearch(needle) => title_contains(task.title(), needle),
        TaskQuery::DueWithin(window) => task.due_date().is_some_and(|due| window.contains(due)),
    }
}

fn title_contains(title: &str, needle: &str) -> bool {
    title.to_lowercase().contains(&needle.to_lowercase())
}

/// Applies the query's ordering rule in place.
fn sort_for(query: &TaskQuery, tasks: &mut [Task]) {
    match query {
        TaskQuery::All
        | TaskQuery::Completed
        | TaskQuery::Incomplete
        | TaskQuery::HighPriority
        | TaskQuery::TitleSearch(_) => tasks.sort_unstable_by_key(|task| Reverse(task.id())),
        // `Option` ordering puts `None` first, matching the SQL default
        // ascending null ordering.
        TaskQuery::SortedByDueDate | TaskQuery::DueWithin(_) => {
            tasks.sort_unstable_by_key(|task| (task.due_date(), task.id()));
        }
        TaskQuery::SortedByPriority => {
            tasks.sort_unstable_by_key(|task| (task.priority().rank(), Reverse(task.id())));
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state.last_id += 1;
        let task = Task::from_persisted(PersistedTask {
            id: TaskId::from_raw(state.last_id),
            title: draft.title().to_owned(),
            description: draft.description().map(ToOwned::to_owned),
            priority: draft.priority(),
            due_date: draft.due_date(),
            completed: draft.completed(),
        });
        state.tasks.insert(task.id(), task.clone());
        Ok(task)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if !state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        state
            .tasks
            .remove(&id)
            .map(drop)
            .ok_or(TaskRepositoryError::NotFound(id))
    }

    async fn fetch(&self, query: &TaskQuery) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| matches(query, task))
            .cloned()
            .collect();
        drop(state);
        sort_for(query, &mut tasks);
        Ok(tasks)
    }
}
