//! Widget components for the tasklist TUI.
//!
//! Each widget is a plain function that renders state into a buffer, which
//! keeps them easy to test and compose.
//!
//! # Modules
//!
//! - [`task_list`]: Renders the attached display tree as a scrollable list
//! - [`input_bar`]: Renders the "new task" text input
//! - [`status_bar`]: Renders the footer with keybinding hints
//! - [`help`]: Renders the keybinding overlay
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use tasklist_protocol::{TaskStore, seed::default_seed};
//! use tasklist_tui::view::render_task_list;
//! use tasklist_tui::widgets;
//!
//! let store = TaskStore::from_seed(default_seed());
//! let tree = render_task_list(&store, |task| task.id);
//!
//! let area = Rect::new(0, 0, 60, 10);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_task_panel(Some(&tree), Some(0), true, area, &mut buf);
//! ```

pub mod help;
pub mod input_bar;
pub mod status_bar;
pub mod task_list;

pub use help::render_help_overlay;
pub use input_bar::render_input_bar;
pub use status_bar::render_status_bar;
pub use task_list::{control_at, render_task_panel, scroll_offset};
