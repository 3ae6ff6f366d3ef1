//! The filter engine.
//!
//! Pure functions mapping the full record list and a query to the visible
//! subset. Matching is boolean inclusion only: no scoring, no re-ordering.

use crate::domain::Advocate;

/// Returns `true` if `query` is non-empty and made only of ASCII digits.
///
/// ```
/// use advocate_directory::search::is_numeric;
///
/// assert!(is_numeric("555123"));
/// assert!(!is_numeric("12a"));
/// assert!(!is_numeric(""));
/// ```
#[must_use]
pub fn is_numeric(query: &str) -> bool {
    !query.is_empty() && query.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` if `advocate` matches `query`.
///
/// `query_lower` must be `query.to_lowercase()`; it is passed in so callers
/// filtering many records lower-case the query once.
///
/// A record matches when any of these hold:
/// - first name, last name, city or degree contains the query (case-insensitive);
/// - any specialty contains the query (case-insensitive);
/// - the query is all digits and either the years of experience equal it
///   exactly or the phone number contains it.
#[must_use]
pub fn matches(advocate: &Advocate, query: &str, query_lower: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(query_lower);

    if contains(&advocate.first_name)
        || contains(&advocate.last_name)
        || contains(&advocate.city)
        || contains(&advocate.degree)
    {
        return true;
    }

    if advocate.specialties.iter().any(|s| contains(s)) {
        return true;
    }

    is_numeric(query)
        && (advocate.years_of_experience == query || advocate.phone_number.contains(query))
}

/// Filters `records` by `query`, preserving the original order.
///
/// The empty string returns every record. No trimming is applied: `" "` is a
/// real query that matches fields containing a space.
///
/// # Examples
///
/// ```
/// use advocate_directory::search::filter;
///
/// assert!(filter(&[], "anything").is_empty());
/// ```
#[must_use]
pub fn filter(records: &[Advocate], query: &str) -> Vec<Advocate> {
    let _span = tracing::debug_span!(
        "filter",
        total_records = records.len(),
        query_len = query.len()
    )
    .entered();

    if query.is_empty() {
        return records.to_vec();
    }

    let query_lower = query.to_lowercase();
    let filtered: Vec<Advocate> = records
        .iter()
        .filter(|advocate| matches(advocate, query, &query_lower))
        .cloned()
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "filter applied");
    filtered
}

/// Filters `records` to those having a specialty that contains `tag`,
/// case-insensitively.
///
/// This is the narrower rule applied when a specialty tag is activated; it
/// ignores every other field.
#[must_use]
pub fn filter_by_specialty(records: &[Advocate], tag: &str) -> Vec<Advocate> {
    let tag_lower = tag.to_lowercase();

    let filtered: Vec<Advocate> = records
        .iter()
        .filter(|advocate| {
            advocate
                .specialties
                .iter()
                .any(|s| s.to_lowercase().contains(&tag_lower))
        })
        .cloned()
        .collect();

    tracing::debug!(
        tag = %tag,
        filtered_count = filtered.len(),
        "specialty filter applied"
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advocate(first: &str, last: &str, years: &str, phone: &str, specialties: &[&str]) -> Advocate {
        Advocate {
            first_name: first.into(),
            last_name: last.into(),
            city: "Springfield".into(),
            degree: "MSW".into(),
            specialties: specialties.iter().map(|s| (*s).to_string()).collect(),
            years_of_experience: years.into(),
            phone_number: phone.into(),
        }
    }

    fn names(records: &[Advocate]) -> Vec<&str> {
        records.iter().map(|a| a.first_name.as_str()).collect()
    }

    fn sample() -> Vec<Advocate> {
        vec![
            advocate("Jane", "Doe", "5", "5551234567", &["Bipolar"]),
            advocate("Tom", "Lee", "12", "5559876543", &["Anxiety"]),
            advocate("Ana", "Ruiz", "120", "5550001212", &["Bipolar disorder", "Trauma"]),
        ]
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let records = sample();
        assert_eq!(filter(&records, ""), records);
    }

    #[test]
    fn whitespace_query_is_not_trimmed() {
        // Only "Bipolar disorder" contains a space.
        assert_eq!(names(&filter(&sample(), " ")), vec!["Ana"]);
        assert!(filter(&sample(), " jane").is_empty());
        assert!(filter(&sample(), "jane ").is_empty());
    }

    #[test]
    fn matches_text_fields_case_insensitively() {
        let records = sample();
        assert_eq!(names(&filter(&records, "JANE")), vec!["Jane"]);
        assert_eq!(names(&filter(&records, "ruiz")), vec!["Ana"]);
        assert_eq!(filter(&records, "springfield").len(), 3);
        assert_eq!(filter(&records, "msw").len(), 3);
    }

    #[test]
    fn matches_specialty_substrings() {
        assert_eq!(names(&filter(&sample(), "bipo")), vec!["Jane", "Ana"]);
        assert_eq!(names(&filter(&sample(), "trauma")), vec!["Ana"]);
    }

    #[test]
    fn numeric_query_matches_exact_years_not_prefixes() {
        // "12" equals Tom's years; Ana has 120 years and a phone containing "12".
        assert_eq!(names(&filter(&sample(), "12")), vec!["Jane", "Tom", "Ana"]);
        assert_eq!(names(&filter(&sample(), "120")), vec!["Ana"]);
    }

    #[test]
    fn numeric_query_matches_phone_substring() {
        assert_eq!(names(&filter(&sample(), "555123")), vec!["Jane"]);
    }

    #[test]
    fn mixed_query_skips_numeric_branch() {
        let records = vec![advocate("Tom", "Lee", "12", "5559876543", &[])];
        assert!(filter(&records, "12a").is_empty());
    }

    #[test]
    fn non_matching_query_yields_empty() {
        assert!(filter(&sample(), "zz").is_empty());
    }

    #[test]
    fn specialty_filter_ignores_other_fields() {
        let records = sample();
        assert_eq!(names(&filter_by_specialty(&records, "Bipolar")), vec!["Jane", "Ana"]);
        assert!(filter_by_specialty(&records, "Jane").is_empty());
        assert_eq!(names(&filter_by_specialty(&records, "ANXIETY")), vec!["Tom"]);
    }

    #[test]
    fn is_numeric_rejects_non_ascii_digits() {
        assert!(is_numeric("0"));
        assert!(!is_numeric("١٢"));
        assert!(!is_numeric("-1"));
    }
}
