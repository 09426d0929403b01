//! Test helpers shared by the rendering tests.

use ratatui::buffer::Buffer;

/// Converts a ratatui [`Buffer`] to one line of text per row.
///
/// Trailing spaces are trimmed from every row so assertions can compare
/// against plain strings.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        let row: String = (0..buf.area.width)
            .filter_map(|x| buf.cell((buf.area.x + x, buf.area.y + y)))
            .map(|cell| cell.symbol())
            .collect();
        result.push_str(row.trim_end_matches(' '));
        result.push('\n');
    }
    result
}
