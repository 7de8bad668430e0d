//! Query composer: view-state changes drive live feed re-subscription.

use super::store::{TaskFeed, TaskStore};
use crate::task::domain::{Task, TaskFilter, TaskQuery, ViewState};
use crate::task::ports::{TaskRepository, TaskRepositoryResult};

/// Composes the active store query from transient view state.
///
/// Every view-state mutation derives the query again and replaces the live
/// feed. The abandoned subscription is dropped and can never emit again, so
/// results from a stale query do not reach the task list.
pub struct TaskBrowser<R> {
    store: TaskStore<R>,
    view: ViewState,
    feed: TaskFeed<R>,
}

impl<R> TaskBrowser<R>
where
    R: TaskRepository,
{
    /// Creates a browser showing every task.
    #[must_use]
    pub fn new(store: TaskStore<R>) -> Self {
        let view = ViewState::new();
        let feed = store.watch(view.active_query());
        Self { store, view, feed }
    }

    /// Returns the current view state.
    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    /// Returns the query currently feeding the task list.
    #[must_use]
    pub const fn active_query(&self) -> &TaskQuery {
        self.feed.query()
    }

    /// Selects a filter and re-derives the active query.
    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.view.set_filter(filter);
        self.resubscribe();
    }

    /// Replaces the search text and re-derives the active query.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.view.set_search(search);
        self.resubscribe();
    }

    /// Selects or clears the day filter and re-derives the active query.
    pub fn set_selected_day(&mut self, start_of_day: Option<i64>) {
        self.view.set_selected_day(start_of_day);
        self.resubscribe();
    }

    /// Yields the next task list for the active query.
    ///
    /// Immediately after a view-state change this returns the new query's
    /// current snapshot; otherwise it waits for the next affecting write.
    ///
    /// # Errors
    ///
    /// Returns
    /// [`TaskRepositoryError::Storage`](crate::task::ports::TaskRepositoryError::Storage)
    /// when query execution fails.
    pub async fn tasks(&mut self) -> TaskRepositoryResult<Vec<Task>> {
        self.feed.next().await
    }

    fn resubscribe(&mut self) {
        self.feed = self.store.watch(self.view.active_query());
    }
}
