use crate::{MAX_PAGE_SIZE, SprintPage};

use proptest::prelude::*;

#[test]
fn test_in_range_values_pass_through() {
    let page = SprintPage::clamped(5, 3);
    assert_eq!(page.start(), 5);
    assert_eq!(page.count(), 3);
}

#[test]
fn test_out_of_range_values_are_clamped() {
    let page = SprintPage::clamped(-3, 50);
    assert_eq!(page.start(), 0);
    assert_eq!(page.count(), 10);

    assert_eq!(SprintPage::clamped(0, 0).count(), 10);
    assert_eq!(SprintPage::clamped(0, -1).count(), 10);
    assert_eq!(SprintPage::clamped(0, 11).count(), 10);
    assert_eq!(SprintPage::clamped(0, 1).count(), 1);
    assert_eq!(SprintPage::clamped(0, 10).count(), 10);
}

#[test]
fn test_from_query_treats_missing_and_malformed_as_zero() {
    assert_eq!(SprintPage::from_query(None, None), SprintPage::clamped(0, 0));
    assert_eq!(
        SprintPage::from_query(Some("abc"), Some("ten")),
        SprintPage::clamped(0, 10)
    );
    assert_eq!(
        SprintPage::from_query(Some("2"), Some("4")),
        SprintPage::clamped(2, 4)
    );
    assert_eq!(SprintPage::default(), SprintPage::clamped(0, 10));
}

// =========================================================================
// Property-Based Tests - Clamping
// =========================================================================

proptest! {
    #[test]
    fn given_any_window_when_clamped_then_in_range(start in any::<i64>(), count in any::<i64>()) {
        let page = SprintPage::clamped(start, count);
        prop_assert!(page.start() >= 0);
        prop_assert!((1..=MAX_PAGE_SIZE).contains(&page.count()));
    }

    #[test]
    fn given_any_count_text_when_parsed_then_matches_numeric_clamp(count in any::<i64>()) {
        let text = count.to_string();
        let page = SprintPage::from_query(None, Some(&text));
        prop_assert_eq!(page, SprintPage::clamped(0, count));
    }

    #[test]
    fn given_non_numeric_count_when_parsed_then_default_size(count in "[a-z]{1,8}") {
        let page = SprintPage::from_query(None, Some(&count));
        prop_assert_eq!(page.count(), MAX_PAGE_SIZE);
    }
}
