//! Transient view state driving the active store query.

use super::{DayWindow, TaskQuery};
use serde::{Deserialize, Serialize};

/// Named filter selection offered by the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFilter {
    /// No filtering; every task, newest first.
    #[default]
    All,
    /// Completed tasks only.
    Completed,
    /// Incomplete tasks only.
    Incomplete,
    /// High-priority tasks only.
    HighPriority,
    /// Every task, re-ordered by due date.
    SortByDueDate,
    /// Every task, re-ordered by priority.
    SortByPriority,
}

impl TaskFilter {
    /// Maps the filter to its store query.
    #[must_use]
    pub const fn query(self) -> TaskQuery {
        match self {
            Self::All => TaskQuery::All,
            Self::Completed => TaskQuery::Completed,
            Self::Incomplete => TaskQuery::Incomplete,
            Self::HighPriority => TaskQuery::HighPriority,
            Self::SortByDueDate => TaskQuery::SortedByDueDate,
            Self::SortByPriority => TaskQuery::SortedByPriority,
        }
    }
}

/// Transient UI selection state: active filter, search text, selected day.
///
/// Exactly one store query is derived from the three inputs via
/// [`ViewState::active_query`]. The setters enforce the mutual exclusivity
/// the task list expects at the call site: choosing a non-default filter
/// clears search and day selection, searching clears the day selection, and
/// picking a day clears the search text. `active_query` itself accepts
/// whatever 3-tuple it is given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    filter: TaskFilter,
    search: String,
    selected_day: Option<i64>,
}

impl ViewState {
    /// Creates the default view: all tasks, no search, no selected day.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a view from explicit parts, bypassing the setter side
    /// effects.
    ///
    /// [`ViewState::active_query`] accepts whatever combination it is given,
    /// so the precedence table can be exercised in isolation.
    #[must_use]
    pub fn from_parts(
        filter: TaskFilter,
        search: impl Into<String>,
        selected_day: Option<i64>,
    ) -> Self {
        Self {
            filter,
            search: search.into(),
            selected_day,
        }
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Returns the current search text.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns the selected day start in epoch milliseconds, if any.
    #[must_use]
    pub const fn selected_day(&self) -> Option<i64> {
        self.selected_day
    }

    /// Selects a filter; any filter other than [`TaskFilter::All`] clears
    /// the search text and the selected day.
    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
        if filter != TaskFilter::All {
            self.search.clear();
            self.selected_day = None;
        }
    }

    /// Replaces the search text and clears the selected day.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.selected_day = None;
    }

    /// Selects the day beginning at `start_of_day`, or clears the selection;
    /// either way the search text is reset.
    pub fn set_selected_day(&mut self, start_of_day: Option<i64>) {
        self.selected_day = start_of_day;
        self.search.clear();
    }

    /// Derives the single active store query from the three inputs.
    ///
    /// Ordered rule list, first match wins: a non-empty trimmed search beats
    /// a selected day, which beats the filter.
    #[must_use]
    pub fn active_query(&self) -> TaskQuery {
        let search = self.search.trim();
        if !search.is_empty() {
            return TaskQuery::TitleSearch(search.to_owned());
        }
        if let Some(start_of_day) = self.selected_day {
            return TaskQuery::DueWithin(DayWindow::from_start(start_of_day));
        }
        self.filter.query()
    }
}
