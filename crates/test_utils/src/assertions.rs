//! Custom Test Assertions
//!
//! Helpers that print the relevant values when they fail.

use chrono::{DateTime, Duration, Utc};
use domain_policy::{InsurancePolicy, PolicyError};

/// Asserts that `actual` lies within `tolerance` of the current instant
pub fn assert_date_time_close_to_now(actual: DateTime<Utc>, tolerance: Duration) {
    let now = Utc::now();
    let diff = (now - actual).abs();
    assert!(
        diff <= tolerance,
        "Expected {} to be within {} of now ({}), difference was {}",
        actual,
        tolerance,
        now,
        diff
    );
}

/// Asserts that the error is `InvalidInput` reporting exactly these fields, in order
pub fn assert_field_errors(error: &PolicyError, expected_fields: &[&str]) {
    assert!(
        matches!(error, PolicyError::InvalidInput { .. }),
        "Expected InvalidInput, got {:?}",
        error
    );
    let actual: Vec<&str> = error
        .field_errors()
        .iter()
        .map(|e| e.field_name.as_str())
        .collect();
    assert_eq!(
        actual, expected_fields,
        "Field errors mismatch: {:?}",
        error.field_errors()
    );
}

/// Asserts that two policies hold the same user-supplied content
///
/// Identifiers and timestamps are not compared.
pub fn assert_same_content(actual: &InsurancePolicy, expected: &InsurancePolicy) {
    assert_eq!(actual.name, expected.name, "name mismatch");
    assert_eq!(actual.status, expected.status, "status mismatch");
    assert_eq!(actual.start_date, expected.start_date, "start_date mismatch");
    assert_eq!(actual.end_date, expected.end_date, "end_date mismatch");
}

/// Asserts that policies are ordered by name, then id
pub fn assert_sorted_by_name(policies: &[InsurancePolicy]) {
    for pair in policies.windows(2) {
        let ordered = (pair[0].name.as_str(), pair[0].id) <= (pair[1].name.as_str(), pair[1].id);
        assert!(
            ordered,
            "Policies out of order: {:?} ({:?}) before {:?} ({:?})",
            pair[0].name, pair[0].id, pair[1].name, pair[1].id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::InsurancePolicyBuilder;
    use domain_policy::FieldError;

    #[test]
    fn test_close_to_now_accepts_current_instant() {
        assert_date_time_close_to_now(Utc::now(), Duration::seconds(5));
    }

    #[test]
    #[should_panic(expected = "to be within")]
    fn test_close_to_now_rejects_old_instant() {
        assert_date_time_close_to_now(Utc::now() - Duration::hours(1), Duration::seconds(5));
    }

    #[test]
    fn test_field_errors_in_order() {
        let error = PolicyError::InvalidInput {
            field_errors: vec![FieldError::new("name", "a"), FieldError::new("status", "b")],
        };
        assert_field_errors(&error, &["name", "status"]);
    }

    #[test]
    fn test_sorted_by_name() {
        let policies = vec![
            InsurancePolicyBuilder::new().with_id(2).with_name("A").build(),
            InsurancePolicyBuilder::new().with_id(1).with_name("B").build(),
            InsurancePolicyBuilder::new().with_id(3).with_name("B").build(),
        ];
        assert_sorted_by_name(&policies);
    }
}
