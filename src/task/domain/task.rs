//! Task records, drafts, and the priority scale.

use super::{ParsePriorityError, TaskDomainError, TaskId};
use serde::{Deserialize, Serialize};

/// Task priority level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Urgent work, surfaced first by priority ordering.
    High,
    /// Ordinary work.
    Medium,
    /// Background work; the default for new drafts.
    #[default]
    Low,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    /// Returns the sort rank used for priority ordering, highest first.
    ///
    /// Ranks match the store's ordering expression: High=1, Medium=2, Low=3;
    /// rank 4 is reserved there for unparseable stored values.
    #[must_use]
    pub const fn rank(self) -> i32 {
        match self {
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "HIGH" => Ok(Self::High),
            "MEDIUM" => Ok(Self::Medium),
            "LOW" => Ok(Self::Low),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// An unsaved task awaiting its first persistence.
///
/// Drafts validate the non-empty-title invariant at construction, so invalid
/// records never reach the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    priority: Priority,
    due_date: Option<i64>,
    completed: bool,
}

impl TaskDraft {
    /// Creates a draft with the given title and default remaining fields.
    ///
    /// The title is trimmed before validation and storage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the trimmed title is
    /// empty.
    pub fn new(title: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self {
            title: trimmed.to_owned(),
            description: None,
            priority: Priority::default(),
            due_date: None,
            completed: false,
        })
    }

    /// Sets the free-form description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority level.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due instant, in epoch milliseconds.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: i64) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the completion flag; tasks may be saved already completed.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Returns the trimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if set.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the priority level.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due instant in epoch milliseconds, if set.
    #[must_use]
    pub const fn due_date(&self) -> Option<i64> {
        self.due_date
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }
}

/// A persisted task record.
///
/// The store owns the canonical record; values handed out by queries are
/// disposable snapshots. The identifier is immutable once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    priority: Priority,
    due_date: Option<i64>,
    completed: bool,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTask {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted priority level.
    pub priority: Priority,
    /// Persisted due instant in epoch milliseconds, if any.
    pub due_date: Option<i64>,
    /// Persisted completion flag.
    pub completed: bool,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTask) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            priority: data.priority,
            due_date: data.due_date,
            completed: data.completed,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the priority level.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due instant in epoch milliseconds, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<i64> {
        self.due_date
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Replaces every mutable field from an edited draft, keeping the id.
    pub fn edit(&mut self, draft: TaskDraft) {
        let TaskDraft {
            title,
            description,
            priority,
            due_date,
            completed,
        } = draft;
        self.title = title;
        self.description = description;
        self.priority = priority;
        self.due_date = due_date;
        self.completed = completed;
    }

    /// Sets the completion flag in place.
    pub const fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
