//! Shared protocol types for the tasklist application.
//!
//! This crate defines the model half of the application: task records, the
//! store that owns them, seed data and the interaction messages.
//!
//! # Overview
//!
//! - [`task`]: Task identifiers, statuses and the `Task` record
//! - [`store`]: The `TaskStore`, single source of truth for tasks
//! - [`seed`]: Seed entries and the built-in seed list
//! - [`message`]: Interaction messages
//!
//! # Examples
//!
//! ```
//! use tasklist_protocol::{TaskStore, seed::default_seed};
//!
//! let mut store = TaskStore::from_seed(default_seed());
//! let task = store.add_task("testing task 1");
//! assert_eq!(task.id.get(), 5);
//!
//! store.mark_complete(task.id);
//! assert_eq!(store.incomplete_tasks().len(), 4);
//! ```

pub mod message;
pub mod seed;
pub mod store;
pub mod task;

// Re-export primary types at crate root for convenience
pub use message::Message;
pub use seed::SeedEntry;
pub use store::TaskStore;
pub use task::{Task, TaskId, TaskStatus};
