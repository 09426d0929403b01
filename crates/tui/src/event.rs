//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Key bindings depend on which area has focus.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use tasklist_protocol::Message;

use crate::state::Focus;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
#[must_use]
pub fn event_to_message(event: &Event, focus: Focus) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => key_to_message(*key, focus),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// # Key Bindings
///
/// | Key | Input focus | List focus |
/// |-----|-------------|------------|
/// | `Ctrl+C` | Quit | Quit |
/// | `F1` | Toggle help | Toggle help |
/// | `Tab` | Focus list | Focus input |
/// | `Esc` | Escape | Escape |
/// | `Up` / `Down` | Select entry | Select entry |
/// | `Enter` | Add task | Complete selected |
/// | `Space` | Type | Complete selected |
/// | `Backspace` | Delete char | - |
/// | `?` | Type | Toggle help |
/// | Any char | Type | - |
#[must_use]
pub fn key_to_message(key: KeyEvent, focus: Focus) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::F(1) => return Some(Message::ToggleHelp),
        KeyCode::Tab | KeyCode::BackTab => return Some(Message::SwitchFocus),
        KeyCode::Esc => return Some(Message::Escape),
        KeyCode::Up => return Some(Message::NavigateUp),
        KeyCode::Down => return Some(Message::NavigateDown),
        _ => {}
    }

    match focus {
        Focus::Input => match key.code {
            KeyCode::Enter => Some(Message::AddTask),
            KeyCode::Backspace => Some(Message::InputBackspace),
            KeyCode::Char(ch) => Some(Message::InputChar { ch }),
            _ => None,
        },
        Focus::List => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Activate),
            KeyCode::Char('?') => Some(Message::ToggleHelp),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn ctrl_c_quits_in_any_focus() {
        for focus in [Focus::Input, Focus::List] {
            assert_eq!(
                key_to_message(
                    make_key_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL),
                    focus
                ),
                Some(Message::Quit)
            );
        }
    }

    #[test]
    fn plain_c_is_typed_in_input() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('c')), Focus::Input),
            Some(Message::InputChar { ch: 'c' })
        );
        assert_eq!(key_to_message(make_key(KeyCode::Char('c')), Focus::List), None);
    }

    #[test]
    fn enter_depends_on_focus() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Enter), Focus::Input),
            Some(Message::AddTask)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Enter), Focus::List),
            Some(Message::Activate)
        );
    }

    #[test]
    fn question_mark_is_text_in_input_and_help_in_list() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('?')), Focus::Input),
            Some(Message::InputChar { ch: '?' })
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('?')), Focus::List),
            Some(Message::ToggleHelp)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::F(1)), Focus::Input),
            Some(Message::ToggleHelp)
        );
    }

    #[test]
    fn shared_navigation_keys() {
        for focus in [Focus::Input, Focus::List] {
            assert_eq!(key_to_message(make_key(KeyCode::Up), focus), Some(Message::NavigateUp));
            assert_eq!(
                key_to_message(make_key(KeyCode::Down), focus),
                Some(Message::NavigateDown)
            );
            assert_eq!(key_to_message(make_key(KeyCode::Tab), focus), Some(Message::SwitchFocus));
            assert_eq!(key_to_message(make_key(KeyCode::Esc), focus), Some(Message::Escape));
        }
    }

    #[test]
    fn backspace_edits_input_only() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Backspace), Focus::Input),
            Some(Message::InputBackspace)
        );
        assert_eq!(key_to_message(make_key(KeyCode::Backspace), Focus::List), None);
    }

    #[test]
    fn left_click_becomes_click_at() {
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 9,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            event_to_message(&event, Focus::Input),
            Some(Message::ClickAt { column: 4, row: 9 })
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(event_to_message(&Event::Key(release), Focus::Input), None);
    }
}
