//! Terminal UI for the tasklist application.
//!
//! This crate provides the view and controller halves of the to-do list:
//! a display tree built from the task store, a controller that turns
//! interactions into store mutations, and a Ratatui front end that draws
//! the tree and feeds keyboard and mouse events back in.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`display`]: The display tree and its activatable controls
//! - [`view`]: Builds a display tree from a task store
//! - [`surface`]: Display and input surfaces the controller renders into
//! - [`controller`]: Routes interactions to the store and re-renders
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Focus, selection and overlay state
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//!
//! # Example
//!
//! ```no_run
//! use tasklist_protocol::{TaskStore, seed::default_seed};
//! use tasklist_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(TaskStore::from_seed(default_seed()));
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod controller;
pub mod display;
pub mod event;
pub mod layout;
pub mod state;
pub mod surface;
pub mod terminal;
pub mod view;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

pub use app::App;
pub use controller::Controller;
pub use state::{AppState, Focus};
