//! Property-Based Test Generators
//!
//! Proptest strategies for policy inputs.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use domain_policy::{CreateInsurancePolicyAction, InsurancePolicyStatus};

/// Names accepted by validation: 1 to 200 characters, not blank
pub fn valid_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,199}"
}

/// Status names accepted by validation
pub fn valid_status_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(InsurancePolicyStatus::Active.to_string()),
        Just(InsurancePolicyStatus::Inactive.to_string()),
    ]
}

/// Upper-case words that are not a status name
pub fn invalid_status_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{1,12}".prop_filter("must not be a status name", |s| {
        s.parse::<InsurancePolicyStatus>().is_err()
    })
}

/// Dates between 2000 and roughly 2054
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..20_000).prop_map(|offset| base_date() + Duration::days(offset))
}

/// `(start, end)` with `end` strictly after `start`
pub fn ordered_period_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (date_strategy(), 1i64..3_650).prop_map(|(start, length)| (start, start + Duration::days(length)))
}

/// `(start, end)` with `end` on or before `start`
pub fn unordered_period_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (date_strategy(), 0i64..3_650).prop_map(|(start, back)| (start, start - Duration::days(back)))
}

/// Create actions that pass validation
pub fn valid_create_action_strategy() -> impl Strategy<Value = CreateInsurancePolicyAction> {
    (valid_name_strategy(), valid_status_strategy(), ordered_period_strategy()).prop_map(
        |(name, status, (start, end))| CreateInsurancePolicyAction {
            name: Some(name),
            status: Some(status),
            start_date: Some(start),
            end_date: Some(end),
        },
    )
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn ordered_periods_are_ordered((start, end) in ordered_period_strategy()) {
            prop_assert!(end > start);
        }

        #[test]
        fn unordered_periods_are_not_ordered((start, end) in unordered_period_strategy()) {
            prop_assert!(end <= start);
        }

        #[test]
        fn valid_names_fit(name in valid_name_strategy()) {
            prop_assert!(!name.trim().is_empty());
            prop_assert!(name.chars().count() <= 200);
        }
    }
}
