//! Search bar component renderer.

use crate::ui::helpers::{pad, position_cursor, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Shown after the query while the search input has focus.
const CURSOR: char = '▏';

/// Shown while a debounced update is still pending.
const PENDING: &str = " …";

/// Renders the 3-line search box.
///
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │ Search: anx▏ …          Searching for: anx   │
/// └──────────────────────────────────────────────┘
/// ```
///
/// The "Searching for" label echoes the query the table reflects and is
/// dropped first when the box is too narrow.
pub fn render_search_bar(out: &mut String, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let frame = if search.is_focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    let mut left = format!(" Search: {}", search.query);
    if search.is_focused {
        left.push(CURSOR);
    }
    if search.is_pending {
        left.push_str(PENDING);
    }
    let left: String = left.chars().take(inner_width).collect();

    let right = search
        .searching_for
        .as_ref()
        .map(|query| format!("Searching for: {query} "))
        .filter(|right| width_of(&left) + width_of(right) < inner_width)
        .unwrap_or_default();

    position_cursor(out, row, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&Theme::fg(frame));
    out.push('┌');
    out.extend(std::iter::repeat('─').take(inner_width));
    out.push('┐');
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&Theme::fg(frame));
    out.push('│');
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&left);
    pad(out, inner_width.saturating_sub(width_of(&left) + width_of(&right)));
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&right);
    out.push_str(&Theme::fg(frame));
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&Theme::fg(frame));
    out.push('└');
    out.extend(std::iter::repeat('─').take(inner_width));
    out.push('┘');
    out.push_str(Theme::reset());

    row + 3
}
