//! Centralized layout measurements for the TUI.
//!
//! Shared by rendering and by mouse hit-testing, which must agree on where
//! every region sits.

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the "new task" input bar in rows (border plus one text row).
pub const INPUT_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_HEIGHT: u16 = 1;

/// Minimum terminal height: header, input, a list with one entry, status.
pub const MIN_HEIGHT: u16 = HEADER_HEIGHT + INPUT_HEIGHT + 3 + STATUS_HEIGHT;

/// Minimum terminal width for useful rendering.
pub const MIN_WIDTH: u16 = 30;

/// Columns before the control in each list row (selection marker).
pub const MARKER_WIDTH: u16 = 2;

/// Width of the rendered completion control, brackets included.
pub const CONTROL_WIDTH: u16 = 6;
