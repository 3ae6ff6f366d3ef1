//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the view model from `AppState`, then hand
//! it to the components. The frame is assembled in memory and written to
//! stdout at once.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;
use std::io::Write;

/// Renders the plugin UI for a `rows` x `cols` pane to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let frame = render_to_string(&viewmodel, &state.theme, rows, cols);

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout.write_all(frame.as_bytes()).and_then(|()| stdout.flush()) {
        tracing::warn!(error = %e, "failed to write frame");
    }
}

/// Renders a view model into an ANSI string.
#[must_use]
pub fn render_to_string(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::with_capacity(rows * cols * 4);
    components::render_frame(&mut out, vm, theme, rows, cols);
    out
}
