//! Store query descriptors and due-date windows.

use serde::{Deserialize, Serialize};

/// Milliseconds spanned by one calendar day.
const MILLIS_PER_DAY: i64 = 86_400_000;

/// Inclusive due-date window covering one calendar day.
///
/// The window spans `[start, start + 24h - 1ms]`, matching the store's
/// `BETWEEN` bounds: an instant one millisecond outside either end is
/// excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayWindow {
    start: i64,
    end: i64,
}

impl DayWindow {
    /// Creates the window for the day beginning at `start_of_day`, in epoch
    /// milliseconds.
    #[must_use]
    pub const fn from_start(start_of_day: i64) -> Self {
        Self {
            start: start_of_day,
            end: start_of_day + MILLIS_PER_DAY - 1,
        }
    }

    /// Returns the first instant inside the window.
    #[must_use]
    pub const fn start(self) -> i64 {
        self.start
    }

    /// Returns the last instant inside the window.
    #[must_use]
    pub const fn end(self) -> i64 {
        self.end
    }

    /// Returns whether the instant falls inside the window.
    #[must_use]
    pub const fn contains(self, instant: i64) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// One concrete read query against the task store.
///
/// Each variant produces a fully ordered result sequence; live feeds re-run
/// the query whenever a write could change its result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskQuery {
    /// Every task, newest first (id descending).
    All,
    /// Completed tasks only, id descending.
    Completed,
    /// Incomplete tasks only, id descending.
    Incomplete,
    /// High-priority tasks only, id descending.
    HighPriority,
    /// Every task ordered by due date ascending; tasks without a due date
    /// sort first, following the store's default ascending null ordering.
    SortedByDueDate,
    /// Every task ordered by priority rank, ties broken by id descending.
    SortedByPriority,
    /// Case-insensitive title substring match, id descending.
    TitleSearch(String),
    /// Tasks whose due date falls inside the window, due date ascending.
    DueWithin(DayWindow),
}
