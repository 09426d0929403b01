//! Interaction messages.
//!
//! This module defines the message enum used between the input handler,
//! the rendered controls and the controller.

use serde::{Deserialize, Serialize};

use crate::task::TaskId;

/// Messages that represent user interactions.
///
/// Core messages (`AddTask`, `CompleteTask`) drive store mutations. The rest
/// only affect the terminal front end.
///
/// # Examples
///
/// ```
/// use tasklist_protocol::{Message, TaskId};
///
/// let msg = Message::CompleteTask { id: TaskId::new(3) };
/// assert!(msg.is_mutation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Add the current input value as a new task.
    AddTask,
    /// Mark the task with this id as complete.
    CompleteTask {
        /// Id captured by the control at render time.
        id: TaskId,
    },
    /// Type a character into the input.
    InputChar {
        /// The character typed.
        ch: char,
    },
    /// Delete the last character of the input.
    InputBackspace,
    /// Move the entry selection up.
    NavigateUp,
    /// Move the entry selection down.
    NavigateDown,
    /// Activate the control of the selected entry.
    Activate,
    /// Switch focus between the input and the list.
    SwitchFocus,
    /// Close the help overlay, or return focus to the input.
    Escape,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Mouse click at coordinates (column, row).
    ClickAt {
        /// Column (x coordinate) of the click.
        column: u16,
        /// Row (y coordinate) of the click.
        row: u16,
    },
    /// Quit the application.
    Quit,
}

impl Message {
    /// Returns `true` if handling this message may change the task store.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::AddTask | Self::CompleteTask { .. })
    }
}
