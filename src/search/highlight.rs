//! Match highlight ranges for rendering.
//!
//! Computes which characters of a displayed field matched the settled query so
//! the table can highlight them. Ranges are in character indices (not bytes),
//! matching what [`crate::ui::helpers::highlighted_text`] expects.

/// Returns non-overlapping `(start, end)` character ranges (exclusive end) of
/// case-insensitive occurrences of `query` in `text`.
///
/// Returns no ranges when the query is empty or when lower-casing changes the
/// character count of `text` (a few Unicode letters expand when lowered), in
/// which case indices could not be mapped back safely.
///
/// # Examples
///
/// ```
/// use advocate_directory::search::match_ranges;
///
/// assert_eq!(match_ranges("Bipolar Bip", "bip"), vec![(0, 3), (8, 11)]);
/// assert!(match_ranges("Anxiety", "").is_empty());
/// ```
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    let text_lower: Vec<char> = text.to_lowercase().chars().collect();
    if text_lower.len() != text.chars().count() {
        return vec![];
    }

    let needle: Vec<char> = query.to_lowercase().chars().collect();
    if needle.len() > text_lower.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= text_lower.len() {
        if text_lower[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }

    ranges
}
