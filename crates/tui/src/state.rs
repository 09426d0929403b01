//! Front-end state management.
//!
//! Tracks focus, entry selection and the help overlay. Task data is never
//! held here; it lives in the controller's store.

/// The area that receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Typing goes into the "new task" field.
    #[default]
    Input,
    /// Arrow keys move through the task list.
    List,
}

/// Front-end state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Current focus area.
    pub focus: Focus,
    /// Index of the selected entry in the rendered list, if any.
    pub selected_entry: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
}

impl AppState {
    /// Creates the initial state: input focused, nothing selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklist_tui::{AppState, Focus};
    ///
    /// let state = AppState::new();
    /// assert_eq!(state.focus, Focus::Input);
    /// assert_eq!(state.selected_entry, None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::take(&mut self.help_visible)
    }

    /// Switches focus between the input and the list.
    ///
    /// Entering the list selects the first entry when nothing is selected.
    pub fn switch_focus(&mut self, entry_count: usize) {
        self.focus = match self.focus {
            Focus::Input => Focus::List,
            Focus::List => Focus::Input,
        };
        if self.focus == Focus::List && self.selected_entry.is_none() && entry_count > 0 {
            self.selected_entry = Some(0);
        }
    }

    /// Moves the selection up, wrapping to the bottom.
    pub fn navigate_up(&mut self, entry_count: usize) {
        self.focus = Focus::List;
        if entry_count == 0 {
            self.selected_entry = None;
            return;
        }

        self.selected_entry = match self.selected_entry {
            Some(idx) if idx > 0 => Some(idx - 1),
            Some(_) => Some(entry_count - 1),
            None => Some(0),
        };
    }

    /// Moves the selection down, wrapping to the top.
    pub fn navigate_down(&mut self, entry_count: usize) {
        self.focus = Focus::List;
        if entry_count == 0 {
            self.selected_entry = None;
            return;
        }

        self.selected_entry = match self.selected_entry {
            Some(idx) if idx + 1 < entry_count => Some(idx + 1),
            Some(_) => Some(0),
            None => Some(0),
        };
    }

    /// Keeps the selection within `0..entry_count` after the list changed.
    pub fn clamp_selection(&mut self, entry_count: usize) {
        self.selected_entry = match self.selected_entry {
            _ if entry_count == 0 => None,
            Some(idx) => Some(idx.min(entry_count - 1)),
            None => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_correct_defaults() {
        let state = AppState::new();
        assert_eq!(state.focus, Focus::Input);
        assert_eq!(state.selected_entry, None);
        assert!(!state.help_visible);
    }

    #[test]
    fn navigate_down_wraps_around() {
        let mut state = AppState::new();
        state.navigate_down(3);
        assert_eq!(state.focus, Focus::List);
        assert_eq!(state.selected_entry, Some(0));
        state.navigate_down(3);
        state.navigate_down(3);
        assert_eq!(state.selected_entry, Some(2));
        state.navigate_down(3);
        assert_eq!(state.selected_entry, Some(0));
    }

    #[test]
    fn navigate_up_wraps_to_bottom() {
        let mut state = AppState::new();
        state.navigate_up(3);
        assert_eq!(state.selected_entry, Some(0));
        state.navigate_up(3);
        assert_eq!(state.selected_entry, Some(2));
    }

    #[test]
    fn navigate_in_empty_list_clears_selection() {
        let mut state = AppState {
            selected_entry: Some(1),
            ..AppState::new()
        };
        state.navigate_down(0);
        assert_eq!(state.selected_entry, None);
    }

    #[test]
    fn clamp_selection_after_shrink() {
        let mut state = AppState {
            selected_entry: Some(3),
            ..AppState::new()
        };
        state.clamp_selection(3);
        assert_eq!(state.selected_entry, Some(2));
        state.clamp_selection(0);
        assert_eq!(state.selected_entry, None);
    }

    #[test]
    fn switch_focus_selects_first_entry() {
        let mut state = AppState::new();
        state.switch_focus(2);
        assert_eq!(state.focus, Focus::List);
        assert_eq!(state.selected_entry, Some(0));
        state.switch_focus(2);
        assert_eq!(state.focus, Focus::Input);
        assert_eq!(state.selected_entry, Some(0));
    }

    #[test]
    fn dismiss_help_when_visible() {
        let mut state = AppState::new();
        state.toggle_help();
        assert!(state.dismiss_help());
        assert!(!state.help_visible);
        assert!(!state.dismiss_help());
    }
}
