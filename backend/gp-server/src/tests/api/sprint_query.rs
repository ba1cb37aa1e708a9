use crate::SprintQuery;

use gp_core::SprintPage;

fn query(pairs: &[(&str, &str)]) -> SprintQuery {
    SprintQuery(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[test]
fn test_first_occurrence_of_repeated_key_wins() {
    let q = query(&[("count", "3"), ("start", "1"), ("count", "7")]);

    assert_eq!(q.first("count"), Some("3"));
    assert_eq!(q.page(), SprintPage::clamped(1, 3));
}

#[test]
fn test_missing_and_malformed_values_clamp_to_defaults() {
    assert_eq!(query(&[]).page(), SprintPage::clamped(0, 10));
    assert_eq!(
        query(&[("count", "many"), ("start", "")]).page(),
        SprintPage::clamped(0, 10)
    );
    assert_eq!(
        query(&[("count", "50"), ("start", "-3")]).page(),
        SprintPage::clamped(0, 10)
    );
}

#[test]
fn test_unrelated_keys_are_ignored() {
    let q = query(&[("sort", "name"), ("count", "2")]);

    assert_eq!(q.first("start"), None);
    assert_eq!(q.page(), SprintPage::clamped(0, 2));
}
