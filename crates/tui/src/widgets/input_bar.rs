//! "New task" input bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Text shown while the input is empty.
const PLACEHOLDER: &str = "What needs to be done?";

/// Cursor glyph drawn after the value while focused.
const CURSOR: &str = "▏";

/// Returns the longest tail of `value` whose display width fits in `width`
/// columns, leaving one column for the cursor.
///
/// Width is measured in terminal columns, so wide characters count twice.
fn visible_tail(value: &str, width: usize) -> &str {
    let room = width.saturating_sub(1);
    value
        .char_indices()
        .map(|(idx, _)| &value[idx..])
        .find(|tail| Span::raw(*tail).width() <= room)
        .unwrap_or("")
}

/// Renders the input bar holding the description of the next task.
///
/// Long values scroll so the end of the text, where typing happens, stays
/// visible.
///
/// # Layout
///
/// ```text
/// ╭ New task ────────────────────────╮
/// │Buy milk▏                         │
/// ╰──────────────────────────────────╯
/// ```
pub fn render_input_bar(value: &str, focused: bool, area: Rect, buf: &mut Buffer) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let title_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let block = Block::default()
        .title(Span::styled(" New task ", title_style))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    block.render(area, buf);

    let mut spans = Vec::with_capacity(2);
    if value.is_empty() && !focused {
        spans.push(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(
            visible_tail(value, usize::from(inner.width)),
            Style::default().fg(Color::White),
        ));
        if focused {
            spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
        }
    }

    Paragraph::new(Line::from(spans)).render(inner, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn shows_placeholder_when_empty_and_unfocused() {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);

        render_input_bar("", false, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("New task"));
        assert!(content.contains(PLACEHOLDER));
    }

    #[test]
    fn shows_value_and_cursor_when_focused() {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);

        render_input_bar("Buy milk", true, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Buy milk▏"));
        assert!(!content.contains(PLACEHOLDER));
    }

    #[test]
    fn long_values_show_their_tail() {
        assert_eq!(visible_tail("abcdef", 4), "def");
        assert_eq!(visible_tail("abc", 10), "abc");
        assert_eq!(visible_tail("ééééé", 3), "éé");
        assert_eq!(visible_tail("abc", 0), "");
        assert_eq!(visible_tail("", 5), "");
    }

    #[test]
    fn wide_characters_are_measured_in_columns() {
        // each character is two columns wide
        let value = "日本語テキスト";
        let tail = visible_tail(value, 6);
        assert_eq!(tail, "スト");
        assert!(Span::raw(tail).width() <= 5);
    }

    #[test]
    fn wide_input_stays_inside_the_bar() {
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);

        render_input_bar("買い物リストを更新する", true, area, &mut buf);

        let content = buffer_to_string(&buf);
        let row = content.lines().nth(1).unwrap();
        // cells hidden behind wide characters may render as spaces
        let packed: String = row.chars().filter(|c| *c != ' ').collect();
        assert!(packed.contains("更新する▏"));
        assert!(!packed.contains("物"));
        assert!(row.ends_with('│'));
    }
}
