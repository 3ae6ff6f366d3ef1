//! Footer component renderer.

use crate::ui::helpers::{centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints, followed by the load time when known,
/// centered and dimmed, truncated to `cols`.
pub fn render_footer(out: &mut String, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let text = match &footer.loaded {
        Some(loaded) => format!("{}  |  {loaded}", footer.keybindings),
        None => footer.keybindings.clone(),
    };

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    centered(out, &text, cols);
    out.push_str(Theme::reset());
    row + 1
}
