//! Help overlay widget.
//!
//! Lists every keybinding. Opened with `F1` anywhere or `?` from the list.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 38;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 19;

/// Renders a centered help overlay displaying all keybindings.
///
/// The area behind the overlay is cleared first.
///
/// # Arguments
///
/// * `area` - The full terminal area (the overlay will be centered within it)
/// * `buf` - The buffer to render into
///
/// # Layout
///
/// ```text
/// ╭ Help ──────────────────────────────╮
/// │                                    │
/// │  Editing                           │
/// │  Enter      Add task               │
/// │  Backspace  Delete character       │
/// │                                    │
/// │  List                              │
/// │  ↑ ↓        Select task            │
/// │  Enter      Mark selected done     │
/// │  Click      Mark task done         │
/// │                                    │
/// │  General                           │
/// │  Tab        Switch focus           │
/// │  Esc        Back to input          │
/// │  F1 / ?     Toggle help            │
/// │  Ctrl+C     Quit                   │
/// │                                    │
/// │  Press any key to close            │
/// ╰────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tasklist_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);

    Clear.render(popup_area, buf);

    let lines = build_help_lines();

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    let help_text = Paragraph::new(lines)
        .block(help_block)
        .alignment(Alignment::Left);

    help_text.render(popup_area, buf);
}

fn binding(key: &'static str, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<11}"), Style::default().fg(Color::Green)),
        Span::styled(text, Style::default().fg(Color::White)),
    ])
}

/// Builds the lines of help content.
fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    vec![
        Line::from(""),
        Line::from(Span::styled("  Editing", header_style)),
        binding("Enter", "Add task"),
        binding("Backspace", "Delete character"),
        Line::from(""),
        Line::from(Span::styled("  List", header_style)),
        binding("↑ ↓", "Select task"),
        binding("Enter", "Mark selected done"),
        binding("Click", "Mark task done"),
        Line::from(""),
        Line::from(Span::styled("  General", header_style)),
        binding("Tab", "Switch focus"),
        binding("Esc", "Back to input"),
        binding("F1 / ?", "Toggle help"),
        binding("Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", hint_style)),
    ]
}

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}
