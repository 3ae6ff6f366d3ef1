//! Composable UI component renderers.
//!
//! Each component draws one part of the frame into the shared buffer at an
//! absolute row and returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title and subtitle
//! - [`search`]: Search input box
//! - [`table`]: Column titles, advocate rows, no-results line, counter
//! - [`empty`]: Loading or failure message replacing the table
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Title]
//! [Subtitle]
//! [Border]
//! [Search Bar - 3 lines]
//! [Column Titles]            or  [Empty State - 2 lines]
//! [Rows / No results]
//! [Blank padding]
//! [Results counter]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::{render_no_results, render_results_counter, render_table_headers, render_table_rows};

/// Renders a horizontal border line. Returns the next row.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.extend(std::iter::repeat('─').take(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders a complete frame for a `rows` x `cols` pane.
pub fn render_frame(out: &mut String, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    current_row = render_search_bar(out, current_row, &vm.search_bar, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, current_row + 1, empty, theme, cols);
    } else {
        current_row = render_table_headers(out, current_row, &vm.columns, theme, cols);
        match &vm.no_results {
            Some(message) => {
                render_no_results(out, current_row + 1, message, theme, cols);
            }
            None => {
                render_table_rows(out, current_row, &vm.rows, &vm.columns, theme, cols);
            }
        }
    }

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    let counter_row = border_row.saturating_sub(1);

    if let Some(counter) = &vm.results_counter {
        render_results_counter(out, counter_row, counter, theme, cols);
    }
    render_border(out, border_row, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);
}
