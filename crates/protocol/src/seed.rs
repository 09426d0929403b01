//! Seed data for a freshly started store.
//!
//! Seed entries carry a description and a status but no id; the store
//! assigns ids by position when it is built from them.
//!
//! # Examples
//!
//! ```
//! use tasklist_protocol::seed::default_seed;
//! use tasklist_protocol::TaskStore;
//!
//! let store = TaskStore::from_seed(default_seed());
//! assert_eq!(store.incomplete_tasks().len(), 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::task::TaskStatus;

/// One initial task, before an id has been assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedEntry {
    /// Text of the task.
    pub description: String,
    /// Initial status; defaults to incomplete when omitted.
    #[serde(default)]
    pub status: TaskStatus,
}

impl SeedEntry {
    /// Creates an incomplete seed entry.
    #[must_use]
    pub fn incomplete(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            status: TaskStatus::Incomplete,
        }
    }

    /// Creates an already completed seed entry.
    #[must_use]
    pub fn complete(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            status: TaskStatus::Complete,
        }
    }
}

/// Returns the built-in seed list.
///
/// Four incomplete tasks, which receive ids `1..=4`.
#[must_use]
pub fn default_seed() -> Vec<SeedEntry> {
    vec![
        SeedEntry::incomplete("Implement the Model"),
        SeedEntry::incomplete("Implement the View"),
        SeedEntry::incomplete("Load the seed data"),
        SeedEntry::incomplete("Implement the Controller"),
    ]
}
