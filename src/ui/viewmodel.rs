//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain
//! no business logic, only display-ready data: truncated cell text, clipped
//! highlight ranges, and the specialty chips that fit their column.

/// Column titles, in display order.
pub const COLUMN_TITLES: [&str; 7] = [
    "First Name",
    "Last Name",
    "City",
    "Degree",
    "Specialties",
    "Experience",
    "Phone",
];

/// Index of the specialties column within [`COLUMN_TITLES`].
pub const SPECIALTIES_COLUMN: usize = 4;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Title and subtitle.
    pub header: HeaderInfo,

    /// Search input state; always shown.
    pub search_bar: SearchBarInfo,

    /// Column widths for the table.
    pub columns: ColumnLayout,

    /// Visible window of table rows.
    pub rows: Vec<DisplayRow>,

    /// Index of the selected row within `rows`.
    pub selected_index: usize,

    /// Message shown in place of rows when the filtered set is empty.
    pub no_results: Option<String>,

    /// "Showing N advocates", present when at least one row matches.
    pub results_counter: Option<String>,

    /// Keybinding hints.
    pub footer: FooterInfo,

    /// Replaces the table entirely while loading or after a load failure.
    pub empty_state: Option<EmptyState>,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Cells for every column except specialties, in column order.
    pub cells: Vec<DisplayCell>,

    /// Specialty chips that fit the specialties column.
    pub specialties: Vec<TagChip>,

    /// Number of specialties that did not fit.
    pub hidden_specialties: usize,

    /// Whether this row holds the cursor.
    pub is_selected: bool,
}

/// A single truncated cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCell {
    /// Text clipped to the column width.
    pub text: String,

    /// Character ranges matching the settled query, clipped to `text`.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// A specialty tag as drawn in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    /// Tag text.
    pub label: String,

    /// Whether the tag cursor is on this chip.
    pub is_focused: bool,

    /// Character ranges of `label` matching the settled query.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Table column widths in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub widths: [usize; 7],
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,

    /// Load completion time (e.g., "Loaded 14:05 UTC"), once the records arrived.
    pub loaded: Option<String>,
}

/// Full-screen message replacing the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "Failed to load advocates").
    pub message: String,

    /// Secondary text (e.g., the failure reason).
    pub subtitle: String,

    /// Whether the message reports an error.
    pub is_error: bool,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Live query text.
    pub query: String,

    /// Query the table currently reflects; `None` when empty.
    pub searching_for: Option<String>,

    /// Whether typing goes into the search bar.
    pub is_focused: bool,

    /// Whether a debounced update is still pending.
    pub is_pending: bool,
}
