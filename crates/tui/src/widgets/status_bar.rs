//! Status bar rendering widget.
//!
//! A single borderless row of keybinding hints that follow the focused area.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::state::Focus;

/// Renders the status bar with hints for the focused area.
///
/// # Arguments
///
/// * `focus` - Which area currently receives keys
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
///
/// # Layout
///
/// ```text
///  Enter Add  Tab List  ↑↓ Select  F1 Help  Ctrl+C Quit
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tasklist_tui::Focus;
/// use tasklist_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(Focus::Input, area, &mut buf);
/// ```
pub fn render_status_bar(focus: Focus, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let hints: &[(&str, &str)] = match focus {
        Focus::Input => &[
            ("Enter", " Add  "),
            ("Tab", " List  "),
            ("↑↓", " Select  "),
            ("F1", " Help  "),
            ("Ctrl+C", " Quit"),
        ],
        Focus::List => &[
            ("Enter", " Done  "),
            ("Tab", " Input  "),
            ("↑↓", " Select  "),
            ("?", " Help  "),
            ("Ctrl+C", " Quit"),
        ],
    };

    let mut spans = vec![Span::raw(" ")];
    for (key, text) in hints {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(*text, text_style));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn input_focus_shows_add_hint() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);

        render_status_bar(Focus::Input, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Enter Add"));
        assert!(content.contains("Tab List"));
        assert!(content.contains("Ctrl+C Quit"));
    }

    #[test]
    fn list_focus_shows_done_hint() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);

        render_status_bar(Focus::List, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Enter Done"));
        assert!(content.contains("Tab Input"));
        assert!(content.contains("? Help"));
    }
}
