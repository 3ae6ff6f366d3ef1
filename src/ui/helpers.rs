//! Shared rendering utilities.
//!
//! Components draw into a `String` frame buffer instead of printing
//! directly, so a whole frame is flushed to stdout in one write and can be
//! inspected in tests. Widths are counted in characters, not bytes.

use crate::ui::theme::Theme;
use std::fmt::Write;

/// Moves the cursor to `row`, `col` (both 1-indexed).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    let _ = write!(out, "\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn width_of(text: &str) -> usize {
    text.chars().count()
}

/// Writes `count` spaces.
pub fn pad(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}

/// Writes `text` centered in `cols`, truncating it if it does not fit, and
/// pads the remainder of the line.
pub fn centered(out: &mut String, text: &str, cols: usize) {
    let visible: String = text.chars().take(cols).collect();
    let len = width_of(&visible);
    let left = cols.saturating_sub(len) / 2;

    pad(out, left);
    out.push_str(&visible);
    pad(out, cols.saturating_sub(left + len));
}

/// Writes `text` with `ranges` (character index pairs, end exclusive) drawn
/// in the match highlight colors.
///
/// `restore` is the escape sequence re-applied after each highlight, so the
/// surrounding style (selected row, tag chip) survives the reset.
pub fn highlighted_text(out: &mut String, text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) {
    if ranges.is_empty() {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut cursor = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < cursor || start >= end {
            continue;
        }

        out.extend(&chars[cursor..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(restore);

        cursor = end;
    }

    out.extend(&chars[cursor..]);
}
