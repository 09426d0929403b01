//! Task-related types for the to-do list.
//!
//! This module defines the task record, its identifier and its completion
//! status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a task within a [`TaskStore`](crate::TaskStore).
///
/// Ids are assigned by the store, start at `1` and only ever increase.
///
/// # Examples
///
/// ```
/// use tasklist_protocol::TaskId;
///
/// let id = TaskId::new(5);
/// assert_eq!(id.get(), 5);
/// assert_eq!(id.to_string(), "5");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw id value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the id that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Completion status of a task.
///
/// The only transition is `Incomplete -> Complete`; `Complete` is terminal.
///
/// # Examples
///
/// ```
/// use tasklist_protocol::TaskStatus;
///
/// assert!(!TaskStatus::Incomplete.is_complete());
/// assert!(TaskStatus::Complete.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Still to be done.
    #[default]
    Incomplete,
    /// Done. No further transitions.
    Complete,
}

impl TaskStatus {
    /// Returns `true` for [`TaskStatus::Complete`].
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// A single to-do item.
///
/// Tasks handed out by the store are always owned copies, so mutating one
/// never affects the store.
///
/// # Examples
///
/// ```
/// use tasklist_protocol::{Task, TaskId, TaskStatus};
///
/// let task = Task::new(TaskId::new(1), "Implement the Model");
/// assert_eq!(task.status, TaskStatus::Incomplete);
/// assert_eq!(task.description, "Implement the Model");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Text shown for the task.
    pub description: String,
    /// Whether the task has been completed.
    pub status: TaskStatus,
}

impl Task {
    /// Creates an incomplete task with the given id and description.
    #[must_use]
    pub fn new(id: TaskId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            status: TaskStatus::Incomplete,
        }
    }

    /// Creates a task with an explicit status.
    ///
    /// Used when materializing seed data, which may already contain
    /// completed tasks.
    #[must_use]
    pub fn with_status(id: TaskId, description: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id,
            description: description.into(),
            status,
        }
    }

    /// Returns `true` if the task is still to be done.
    #[must_use]
    pub const fn is_incomplete(&self) -> bool {
        !self.status.is_complete()
    }

    /// Returns a copy of this task marked as complete.
    ///
    /// The receiver is left untouched.
    #[must_use]
    pub fn completed(&self) -> Self {
        Self {
            status: TaskStatus::Complete,
            ..self.clone()
        }
    }
}
