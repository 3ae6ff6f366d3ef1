//! Property tests for the filter engine and the debouncer.

use crate::domain::Advocate;
use crate::search::{filter, filter_by_specialty, is_numeric, Debouncer};
use proptest::collection::vec;
use proptest::prelude::*;
use std::time::Duration;

/// Advocates whose text fields are lowercase letters only, so digits in a
/// query can only ever match through the numeric branch.
fn advocate() -> impl Strategy<Value = Advocate> {
    (
        "[a-z]{1,8}",
        "[a-z]{1,8}",
        "[a-z]{1,8}",
        "[a-z]{2,3}",
        vec("[a-z]{3,10}", 0..4),
        "[0-9]{1,2}",
        "[0-9]{10}",
    )
        .prop_map(
            |(first_name, last_name, city, degree, specialties, years, phone)| Advocate {
                first_name,
                last_name,
                city,
                degree,
                specialties,
                years_of_experience: years,
                phone_number: phone,
            },
        )
}

fn is_subsequence(filtered: &[Advocate], records: &[Advocate]) -> bool {
    let mut remaining = records.iter();
    filtered
        .iter()
        .all(|wanted| remaining.any(|candidate| candidate == wanted))
}

proptest! {
    /// The empty query is the identity.
    #[test]
    fn empty_query_returns_input(records in vec(advocate(), 0..20)) {
        prop_assert_eq!(filter(&records, ""), records);
    }

    /// Results are an order-preserving subset of the input.
    #[test]
    fn results_preserve_order(records in vec(advocate(), 0..20), query in "[a-z0-9 ]{0,4}") {
        let filtered = filter(&records, &query);
        prop_assert!(filtered.len() <= records.len());
        prop_assert!(is_subsequence(&filtered, &records));
    }

    /// Alphabetic queries ignore case.
    #[test]
    fn alphabetic_queries_ignore_case(records in vec(advocate(), 0..20), query in "[a-zA-Z]{1,4}") {
        prop_assert_eq!(
            filter(&records, &query.to_lowercase()),
            filter(&records, &query.to_uppercase())
        );
    }

    /// All-digit queries match exactly the records whose years equal the
    /// query or whose phone contains it.
    #[test]
    fn numeric_queries_use_years_and_phone(records in vec(advocate(), 0..20), query in "[0-9]{1,4}") {
        prop_assert!(is_numeric(&query));

        let expected: Vec<Advocate> = records
            .iter()
            .filter(|a| a.years_of_experience == query || a.phone_number.contains(query.as_str()))
            .cloned()
            .collect();
        prop_assert_eq!(filter(&records, &query), expected);
    }

    /// A digit-then-letter query never activates the numeric branch.
    #[test]
    fn mixed_queries_skip_numeric_branch(records in vec(advocate(), 1..20), suffix in "[a-z]") {
        let query = format!("{}{}", records[0].years_of_experience, suffix);
        prop_assert!(!is_numeric(&query));
        prop_assert!(filter(&records, &query).is_empty());
    }

    /// Specialty filtering returns records that carry a matching specialty.
    #[test]
    fn specialty_filter_requires_matching_specialty(records in vec(advocate(), 0..20), tag in "[a-z]{1,3}") {
        for advocate in filter_by_specialty(&records, &tag) {
            prop_assert!(advocate.specialties.iter().any(|s| s.contains(tag.as_str())));
        }
    }

    /// However long the burst, only the last value is emitted, once.
    #[test]
    fn debounce_burst_emits_last_value_once(values in vec(any::<u32>(), 1..30)) {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        for value in &values {
            debouncer.schedule(*value);
        }

        let emitted: Vec<u32> = values.iter().filter_map(|_| debouncer.on_timer()).collect();
        prop_assert_eq!(emitted, vec![*values.last().unwrap()]);
        prop_assert_eq!(debouncer.on_timer(), None);
    }
}
