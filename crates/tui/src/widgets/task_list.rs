//! Task list panel.
//!
//! Draws an attached display tree: one row per entry, each row a selection
//! marker, the `[done]` control and the description. Text nodes (the empty
//! placeholder) are drawn as dimmed rows.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::display::DisplayNode;
use crate::layout::{CONTROL_WIDTH, MARKER_WIDTH};

/// One drawable row of the list.
enum Row<'a> {
    Entry {
        index: usize,
        label: &'a str,
        description: &'a str,
    },
    Text(&'a str),
}

/// Flattens a display tree into rows, numbering entries in display order.
fn collect_rows<'a, M>(node: &'a DisplayNode<M>, rows: &mut Vec<Row<'a>>, next_entry: &mut usize) {
    match node {
        DisplayNode::List(list) => {
            for child in &list.children {
                collect_rows(child, rows, next_entry);
            }
        }
        DisplayNode::Entry(entry) => {
            rows.push(Row::Entry {
                index: *next_entry,
                label: entry.control.label,
                description: &entry.description,
            });
            *next_entry += 1;
        }
        DisplayNode::Text(text) => rows.push(Row::Text(text)),
    }
}

/// Returns the first visible row so that `selected` stays on screen.
///
/// # Examples
///
/// ```
/// use tasklist_tui::widgets::task_list::scroll_offset;
///
/// assert_eq!(scroll_offset(None, 10, 4), 0);
/// assert_eq!(scroll_offset(Some(2), 10, 4), 0);
/// assert_eq!(scroll_offset(Some(6), 10, 4), 3);
/// ```
#[must_use]
pub fn scroll_offset(selected: Option<usize>, total: usize, visible: usize) -> usize {
    if visible == 0 || total <= visible {
        return 0;
    }
    match selected {
        Some(idx) if idx >= visible => (idx + 1 - visible).min(total - visible),
        _ => 0,
    }
}

/// Returns the inner area rows are drawn into.
#[must_use]
pub fn list_inner_area(area: Rect) -> Rect {
    panel_block(0, false).inner(area)
}

/// Maps a click to the entry whose control was hit.
///
/// `area` is the full panel area and `offset` the scroll offset used when
/// it was drawn. Clicks on the description or marker do not count.
#[must_use]
pub fn control_at(
    area: Rect,
    offset: usize,
    entry_count: usize,
    column: u16,
    row: u16,
) -> Option<usize> {
    let inner = list_inner_area(area);
    if !inner.contains((column, row).into()) {
        return None;
    }

    let control_start = inner.x + MARKER_WIDTH;
    if column < control_start || column >= control_start + CONTROL_WIDTH {
        return None;
    }

    let index = offset + usize::from(row - inner.y);
    (index < entry_count).then_some(index)
}

fn panel_block(count: usize, focused: bool) -> Block<'static> {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let title_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Block::default()
        .title(Span::styled(format!(" Tasks ({count}) "), title_style))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
}

/// Renders the task list panel.
///
/// # Arguments
///
/// * `root` - The attached display tree, if any
/// * `selected` - Index of the selected entry
/// * `focused` - Whether the list has keyboard focus
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
///
/// Returns the scroll offset used, which click hit-testing needs.
///
/// # Layout
///
/// ```text
/// ╭ Tasks (2) ───────────────────────╮
/// │▶ [done] Implement the Model      │
/// │  [done] Implement the View       │
/// ╰──────────────────────────────────╯
/// ```
pub fn render_task_panel<M>(
    root: Option<&DisplayNode<M>>,
    selected: Option<usize>,
    focused: bool,
    area: Rect,
    buf: &mut Buffer,
) -> usize {
    let mut rows = Vec::new();
    let mut entry_count = 0;
    if let Some(root) = root {
        collect_rows(root, &mut rows, &mut entry_count);
    }

    let block = panel_block(entry_count, focused);
    let inner = block.inner(area);
    block.render(area, buf);

    let visible = usize::from(inner.height);
    let offset = scroll_offset(selected, rows.len(), visible);

    let lines: Vec<Line> = rows
        .iter()
        .skip(offset)
        .take(visible)
        .map(|row| render_row(row, selected, focused))
        .collect();

    Paragraph::new(lines).render(inner, buf);
    offset
}

fn render_row<'a>(row: &Row<'a>, selected: Option<usize>, focused: bool) -> Line<'a> {
    match *row {
        Row::Entry {
            index,
            label,
            description,
        } => {
            let is_selected = selected == Some(index);
            let marker = if is_selected { "▶ " } else { "  " };
            let control_style = Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
            let text_style = if is_selected && focused {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(format!("[{label}]"), control_style),
                Span::styled(format!(" {description}"), text_style),
            ])
        }
        Row::Text(text) => Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    }
}
