//! Table component renderer.
//!
//! Draws the seven advocate columns. Cells arrive already truncated to the
//! column layout; this module only pads, colors and highlights them. The
//! specialties column holds one `[chip]` per specialty, followed by `+N` when
//! some did not fit.

use crate::ui::helpers::{self, pad, position_cursor, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ColumnLayout, DisplayRow, TagChip, COLUMN_TITLES, SPECIALTIES_COLUMN};

/// Renders the bold column titles. Returns the next row.
pub fn render_table_headers(out: &mut String, row: usize, columns: &ColumnLayout, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));

    let mut used = 0;
    for (index, (title, width)) in COLUMN_TITLES.iter().zip(columns.widths).enumerate() {
        if index > 0 {
            out.push(' ');
            used += 1;
        }
        let title: String = title.chars().take(width).collect();
        out.push_str(&title);
        pad(out, width.saturating_sub(width_of(&title)));
        used += width;
    }
    pad(out, cols.saturating_sub(used));

    out.push_str(Theme::reset());
    row + 1
}

/// Renders `rows` one per line starting at `row`. Returns the next row.
pub fn render_table_rows(out: &mut String, row: usize, rows: &[DisplayRow], columns: &ColumnLayout, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for display_row in rows {
        current_row = render_table_row(out, current_row, display_row, columns, theme, cols);
    }
    current_row
}

/// Renders the "no results" message in place of the rows.
pub fn render_no_results(out: &mut String, row: usize, message: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    helpers::centered(out, message, cols);
    out.push_str(Theme::reset());
    row + 1
}

/// Renders "Showing N advocates", left-aligned and dimmed.
pub fn render_results_counter(out: &mut String, row: usize, counter: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    let counter: String = counter.chars().take(cols).collect();
    out.push_str(&counter);
    pad(out, cols.saturating_sub(width_of(&counter)));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders one row.
///
/// The selected row is drawn in selection colors across the full width;
/// match highlights and chip colors are re-applied on top of it.
fn render_table_row(out: &mut String, row: usize, display_row: &DisplayRow, columns: &ColumnLayout, theme: &Theme, cols: usize) -> usize {
    let base = if display_row.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    position_cursor(out, row, 1);
    out.push_str(&base);

    let mut cells = display_row.cells.iter();
    let mut used = 0;
    for (index, width) in columns.widths.into_iter().enumerate() {
        if index > 0 {
            out.push(' ');
            used += 1;
        }

        let drawn = if index == SPECIALTIES_COLUMN {
            render_chips(out, &display_row.specialties, display_row.hidden_specialties, theme, &base)
        } else if let Some(cell) = cells.next() {
            helpers::highlighted_text(out, &cell.text, &cell.highlight_ranges, theme, &base);
            width_of(&cell.text)
        } else {
            0
        };

        pad(out, width.saturating_sub(drawn));
        used += width.max(drawn);
    }
    pad(out, cols.saturating_sub(used));

    out.push_str(Theme::reset());
    row + 1
}

/// Renders the chips of one row and returns the number of cells drawn.
fn render_chips(out: &mut String, chips: &[TagChip], hidden: usize, theme: &Theme, base: &str) -> usize {
    let mut drawn = 0;

    for (index, chip) in chips.iter().enumerate() {
        if index > 0 {
            out.push(' ');
            drawn += 1;
        }

        let style = if chip.is_focused {
            format!(
                "{}{}{}",
                Theme::bold(),
                Theme::fg(&theme.colors.tag_focus_fg),
                Theme::bg(&theme.colors.tag_focus_bg)
            )
        } else {
            format!(
                "{}{}",
                Theme::fg(&theme.colors.tag_fg),
                Theme::bg(&theme.colors.tag_bg)
            )
        };

        out.push_str(&style);
        out.push('[');
        helpers::highlighted_text(out, &chip.label, &chip.highlight_ranges, theme, &style);
        out.push(']');
        out.push_str(Theme::reset());
        out.push_str(base);

        drawn += width_of(&chip.label) + 2;
    }

    if hidden > 0 {
        let overflow = format!(" +{hidden}");
        out.push_str(Theme::dim());
        out.push_str(&overflow);
        out.push_str(Theme::reset());
        out.push_str(base);
        drawn += width_of(&overflow);
    }

    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::DisplayCell;

    fn strip_ansi(text: &str) -> String {
        let mut plain = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                plain.push(c);
            }
        }
        plain
    }

    #[test]
    fn row_renders_cells_and_chips_in_column_order() {
        let theme = Theme::default();
        let columns = ColumnLayout { widths: [5, 5, 6, 3, 20, 3, 10] };
        let cell = |text: &str| DisplayCell { text: text.to_string(), highlight_ranges: vec![] };
        let row = DisplayRow {
            cells: vec![cell("Jane"), cell("Doe"), cell("Austin"), cell("MD"), cell("8"), cell("5551234567")],
            specialties: vec![TagChip { label: "Bipolar".into(), is_focused: false, highlight_ranges: vec![] }],
            hidden_specialties: 2,
            is_selected: false,
        };

        let mut out = String::new();
        render_table_row(&mut out, 1, &row, &columns, &theme, 58);

        let plain = strip_ansi(&out);
        assert_eq!(plain, "Jane  Doe   Austin MD  [Bipolar] +2         8   5551234567");
    }
}
