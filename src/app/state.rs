//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single source of truth for the
//! plugin: the record store, the live and settled queries, the debouncer, the
//! filtered set, and the cursor. The event handler is the only writer.
//!
//! # State Components
//!
//! - **Store**: load lifecycle and the frozen record list
//! - **Query**: live text echoed in the search bar
//! - **Settled query**: debounced projection the filtered set reflects
//! - **Filtered**: derived subset, always replaced wholesale
//! - **Cursor**: selected row plus the focused specialty tag within it
//!
//! # Example
//!
//! ```rust
//! use advocate_directory::{AppState, Theme};
//! use std::time::Duration;
//!
//! let state = AppState::new(Theme::default(), "http://localhost:3000/api/advocates", Duration::from_millis(300));
//! let viewmodel = state.compute_viewmodel(24, 120);
//! assert!(viewmodel.empty_state.is_some());
//! ```

use super::modes::InputMode;
use crate::domain::{Advocate, RowKey};
use crate::search::{self, Debouncer};
use crate::storage::{LoadStatus, RecordStore};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ColumnLayout, DisplayCell, DisplayRow, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo,
    TagChip, UIViewModel, SPECIALTIES_COLUMN,
};
use std::sync::Arc;
use std::time::Duration;

/// Rows taken by everything except table rows: blank line, title, subtitle,
/// border, 3-line search bar, column headers, results counter, border, footer.
const CHROME_ROWS: usize = 11;

/// Preferred widths of the fixed columns (all but specialties).
const FIXED_COLUMN_WIDTHS: [usize; 7] = [12, 12, 14, 8, 0, 10, 12];

/// Narrowest the specialties column is allowed to get.
const MIN_SPECIALTIES_WIDTH: usize = 12;

/// Rule that produced the current filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterSource {
    /// General matching of the settled query across every field.
    #[default]
    Query,
    /// Specialty-only matching after a tag was activated.
    Tag,
}

/// Frozen view of the rendering boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySnapshot {
    pub query: String,
    pub settled_query: String,
    pub filtered_records: Arc<[Advocate]>,
    pub load_status: LoadStatus,
    pub failure_reason: Option<String>,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Load lifecycle and the full record list.
    pub store: RecordStore,

    /// Live query text, updated on every keystroke.
    pub query: String,

    /// Debounced query the filtered set was computed from.
    pub settled_query: String,

    /// Whether `settled_query` is a free-text query or an activated tag.
    pub filter_source: FilterSource,

    /// Records visible in the table.
    ///
    /// Replaced wholesale on every recomputation, never edited in place.
    pub filtered: Arc<[Advocate]>,

    /// Defers query changes until typing pauses.
    pub debouncer: Debouncer<String>,

    /// Zero-based index of the selected row within `filtered`.
    pub selected_index: usize,

    /// Index of the focused specialty within the selected row.
    pub selected_tag: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Endpoint the advocate list is fetched from.
    pub endpoint: String,

    /// Set once the plugin is closing; no further events are applied.
    pub torn_down: bool,
}

impl AppState {
    /// Creates an idle state with no records.
    #[must_use]
    pub fn new(theme: Theme, endpoint: impl Into<String>, debounce_delay: Duration) -> Self {
        Self {
            store: RecordStore::new(),
            query: String::new(),
            settled_query: String::new(),
            filter_source: FilterSource::Query,
            filtered: Arc::from(Vec::new()),
            debouncer: Debouncer::new(debounce_delay),
            selected_index: 0,
            selected_tag: 0,
            input_mode: InputMode::Normal,
            theme,
            endpoint: endpoint.into(),
            torn_down: false,
        }
    }

    /// Returns the values exposed at the rendering boundary.
    #[must_use]
    pub fn snapshot(&self) -> DirectorySnapshot {
        DirectorySnapshot {
            query: self.query.clone(),
            settled_query: self.settled_query.clone(),
            filtered_records: Arc::clone(&self.filtered),
            load_status: self.store.status(),
            failure_reason: self.store.failure_reason().map(String::from),
        }
    }

    /// Recomputes the filtered set from the settled query.
    ///
    /// No-op unless the records are loaded. Returns `true` if the visible
    /// set changed.
    pub fn apply_filter(&mut self) -> bool {
        self.filter_source = FilterSource::Query;
        if !self.store.is_loaded() {
            tracing::debug!(status = %self.store.status(), "records not loaded, skipping filter");
            return false;
        }

        let filtered = search::filter(self.store.records(), &self.settled_query);
        self.replace_filtered(filtered)
    }

    /// Sets the filtered set to the records carrying a specialty that
    /// contains `tag`.
    pub fn apply_specialty_filter(&mut self, tag: &str) -> bool {
        self.filter_source = FilterSource::Tag;
        if !self.store.is_loaded() {
            tracing::debug!(status = %self.store.status(), "records not loaded, skipping tag filter");
            return false;
        }

        let filtered = search::filter_by_specialty(self.store.records(), tag);
        self.replace_filtered(filtered)
    }

    /// Recomputes the filtered set with whichever rule produced it last.
    ///
    /// Used when the records arrive after the settled query was set.
    pub fn refilter(&mut self) -> bool {
        match self.filter_source {
            FilterSource::Query => self.apply_filter(),
            FilterSource::Tag => {
                let tag = self.settled_query.clone();
                self.apply_specialty_filter(&tag)
            }
        }
    }

    /// Shows every loaded record.
    pub fn show_all(&mut self) -> bool {
        self.filter_source = FilterSource::Query;
        let all = self.store.records().to_vec();
        self.replace_filtered(all)
    }

    /// Swaps in a new filtered set, keeping the cursor on the same row when
    /// that row is still visible.
    fn replace_filtered(&mut self, filtered: Vec<Advocate>) -> bool {
        if self.filtered.as_ref() == filtered.as_slice() {
            tracing::debug!("filtered set unchanged");
            return false;
        }

        let selected_key: Option<RowKey> = self.selected_advocate().map(Advocate::row_key);
        self.filtered = Arc::from(filtered);

        let kept = selected_key
            .and_then(|key| self.filtered.iter().position(|a| a.has_key(&key)));
        match kept {
            Some(index) => self.selected_index = index,
            None => {
                self.selected_index = self
                    .selected_index
                    .min(self.filtered.len().saturating_sub(1));
                self.selected_tag = 0;
            }
        }
        self.clamp_tag_cursor();

        tracing::debug!(
            filtered_count = self.filtered.len(),
            selected_index = self.selected_index,
            "filtered set replaced"
        );
        true
    }

    /// Moves the cursor down one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered.len();
        self.selected_tag = 0;
    }

    /// Moves the cursor up one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered.len() - 1;
        } else {
            self.selected_index -= 1;
        }
        self.selected_tag = 0;
    }

    /// Moves the tag cursor right within the selected row, wrapping.
    pub fn move_tag_next(&mut self) {
        let count = self.selected_specialty_count();
        if count > 0 {
            self.selected_tag = (self.selected_tag + 1) % count;
        }
    }

    /// Moves the tag cursor left within the selected row, wrapping.
    pub fn move_tag_previous(&mut self) {
        let count = self.selected_specialty_count();
        if count > 0 {
            self.selected_tag = (self.selected_tag + count - 1) % count;
        }
    }

    fn selected_specialty_count(&self) -> usize {
        self.selected_advocate().map_or(0, |a| a.specialties.len())
    }

    fn clamp_tag_cursor(&mut self) {
        let count = self.selected_specialty_count();
        if self.selected_tag >= count {
            self.selected_tag = 0;
        }
    }

    /// Returns the advocate under the cursor, if any.
    #[must_use]
    pub fn selected_advocate(&self) -> Option<&Advocate> {
        self.filtered.get(self.selected_index)
    }

    /// Returns the specialty under the tag cursor, if any.
    #[must_use]
    pub fn focused_tag(&self) -> Option<&str> {
        self.selected_advocate()
            .and_then(|a| a.specialties.get(self.selected_tag))
            .map(String::as_str)
    }

    /// Computes a renderable view model for a `rows` x `cols` pane.
    ///
    /// While the records are not loaded the table is replaced by a loading
    /// or error message. Otherwise a window of rows centered on the cursor
    /// is produced, with cells truncated to the column layout and matches of
    /// the settled query highlighted.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let columns = Self::compute_columns(cols);

        let mut vm = UIViewModel {
            header: Self::compute_header(),
            search_bar: self.compute_search_bar(),
            columns,
            rows: vec![],
            selected_index: 0,
            no_results: None,
            results_counter: None,
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
        };

        if vm.empty_state.is_some() {
            return vm;
        }

        if self.filtered.is_empty() {
            vm.no_results = Some("No advocates found matching your search criteria.".to_string());
            return vm;
        }

        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);
        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.filtered.len());
        if visible_end - visible_start < available_rows && self.filtered.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        vm.rows = self.filtered[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, advocate)| {
                self.compute_display_row(advocate, visible_start + offset, &columns)
            })
            .collect();
        vm.selected_index = self.selected_index.saturating_sub(visible_start);

        let count = self.filtered.len();
        let noun = if count == 1 { "advocate" } else { "advocates" };
        vm.results_counter = Some(format!("Showing {count} {noun}"));

        vm
    }

    fn compute_display_row(&self, advocate: &Advocate, absolute_idx: usize, columns: &ColumnLayout) -> DisplayRow {
        let is_selected = absolute_idx == self.selected_index;
        let query = self.settled_query.as_str();

        // Highlights follow the rule that admitted the row.
        let (text_query, years_query, phone_query) = match self.filter_source {
            FilterSource::Tag => ("", "", ""),
            FilterSource::Query if search::is_numeric(query) => {
                let years = if advocate.years_of_experience == query { query } else { "" };
                (query, years, query)
            }
            FilterSource::Query => (query, "", ""),
        };

        let fields = [
            (0, advocate.first_name.as_str(), text_query),
            (1, advocate.last_name.as_str(), text_query),
            (2, advocate.city.as_str(), text_query),
            (3, advocate.degree.as_str(), text_query),
            (5, advocate.years_of_experience.as_str(), years_query),
            (6, advocate.phone_number.as_str(), phone_query),
        ];
        let cells = fields
            .iter()
            .map(|&(column, text, query)| Self::compute_cell(text, query, columns.widths[column]))
            .collect();

        let focused = is_selected.then_some(self.selected_tag);
        let (specialties, hidden_specialties) = Self::fit_chips(
            &advocate.specialties,
            query,
            focused,
            columns.widths[SPECIALTIES_COLUMN],
        );

        DisplayRow {
            cells,
            specialties,
            hidden_specialties,
            is_selected,
        }
    }

    /// Truncates `text` to `width` characters and clips its highlight ranges.
    fn compute_cell(text: &str, query: &str, width: usize) -> DisplayCell {
        let char_count = text.chars().count();
        let (text, visible) = if char_count > width {
            let keep = width.saturating_sub(1);
            let mut clipped: String = text.chars().take(keep).collect();
            clipped.push('…');
            (clipped, keep)
        } else {
            (text.to_string(), char_count)
        };

        DisplayCell {
            highlight_ranges: clip_ranges(search::match_ranges(&text, query), visible),
            text,
        }
    }

    /// Lays out specialty chips (`[label]` separated by a space) in `width`
    /// cells.
    ///
    /// Starts from the first chip, or from the focused chip if it would not
    /// otherwise fit. Labels wider than the column are truncated. Returns the
    /// chips drawn and how many were left out.
    fn fit_chips(specialties: &[String], query: &str, focused: Option<usize>, width: usize) -> (Vec<TagChip>, usize) {
        const OVERFLOW_RESERVE: usize = 4;

        if specialties.is_empty() {
            return (vec![], 0);
        }

        let budget = width.saturating_sub(OVERFLOW_RESERVE);
        let max_label = budget.saturating_sub(2).max(1);
        let chip_width = |label: &str| label.chars().count().min(max_label) + 2;
        let fits_from = |start: usize| -> usize {
            let mut used = 0;
            let mut count = 0;
            for label in &specialties[start..] {
                let needed = chip_width(label.as_str()) + usize::from(count > 0);
                if used + needed > budget && count > 0 {
                    break;
                }
                used += needed;
                count += 1;
            }
            count
        };

        let mut start = 0;
        let mut count = fits_from(0);
        if let Some(focus) = focused {
            if focus >= count && focus < specialties.len() {
                start = focus;
                count = fits_from(focus);
            }
        }

        let chips = specialties[start..start + count]
            .iter()
            .enumerate()
            .map(|(offset, label)| {
                let cell = Self::compute_cell(label, query, max_label);
                TagChip {
                    label: cell.text,
                    is_focused: focused == Some(start + offset),
                    highlight_ranges: cell.highlight_ranges,
                }
            })
            .collect();

        (chips, specialties.len() - count)
    }

    /// Splits `cols` into the seven table columns.
    ///
    /// Fixed columns keep their preferred widths; specialties take the rest
    /// but never less than its minimum.
    #[must_use]
    pub fn compute_columns(cols: usize) -> ColumnLayout {
        let separators = FIXED_COLUMN_WIDTHS.len() - 1;
        let fixed: usize = FIXED_COLUMN_WIDTHS.iter().sum::<usize>() + separators;

        let mut widths = FIXED_COLUMN_WIDTHS;
        widths[SPECIALTIES_COLUMN] = cols.saturating_sub(fixed).max(MIN_SPECIALTIES_WIDTH);
        ColumnLayout { widths }
    }

    fn compute_header() -> HeaderInfo {
        HeaderInfo {
            title: " Solace Advocates ".to_string(),
            subtitle: "Find the right advocate for your needs".to_string(),
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        SearchBarInfo {
            query: self.query.clone(),
            searching_for: (!self.settled_query.is_empty()).then(|| self.settled_query.clone()),
            is_focused: self.input_mode.is_typing(),
            is_pending: self.debouncer.is_pending(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search => "Type to search  Enter/Esc: done  Ctrl+r: reset",
            InputMode::Normal => {
                "/: search  j/k: move  h/l: tag  Enter: filter by tag  r: reset  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
            loaded: self
                .store
                .loaded_at()
                .map(|at| format!("Loaded {} UTC", at.format("%H:%M"))),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        match self.store.status() {
            LoadStatus::Idle | LoadStatus::Loading => Some(EmptyState {
                message: "Loading advocates...".to_string(),
                subtitle: format!("Fetching {}", self.endpoint),
                is_error: false,
            }),
            LoadStatus::Error => Some(EmptyState {
                message: "Failed to load advocates".to_string(),
                subtitle: self.store.failure_reason().unwrap_or_default().to_string(),
                is_error: true,
            }),
            LoadStatus::Success => None,
        }
    }
}

/// Drops ranges starting past `visible` characters and shortens the rest.
fn clip_ranges(ranges: Vec<(usize, usize)>, visible: usize) -> Vec<(usize, usize)> {
    ranges
        .into_iter()
        .filter(|&(start, _)| start < visible)
        .map(|(start, end)| (start, end.min(visible)))
        .collect()
}
