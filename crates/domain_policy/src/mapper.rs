//! Conversions from validated commands to persistable policies
//!
//! The use cases call these only after validation succeeded. A missing or
//! unparseable field still yields `PolicyError::InvalidInput` rather than a
//! panic, with the same message validation would have produced.

use chrono::{DateTime, Utc};

use crate::commands::{CreateInsurancePolicyAction, EditInsurancePolicyAction};
use crate::error::PolicyError;
use crate::policy::{InsurancePolicy, InsurancePolicyStatus};
use crate::validation::{fields, invalid_enum_value_message, no_value_provided_message, FieldError};

/// Builds a new, not yet persisted policy
///
/// `creation` and `last_update` are both set to `now`; the store assigns the id.
pub fn to_new_policy(
    action: CreateInsurancePolicyAction,
    now: DateTime<Utc>,
) -> Result<InsurancePolicy, PolicyError> {
    Ok(InsurancePolicy {
        id: None,
        name: required(action.name, fields::NAME)?,
        status: parse_status(action.status)?,
        start_date: required(action.start_date, fields::START_DATE)?,
        end_date: required(action.end_date, fields::END_DATE)?,
        creation: now,
        last_update: now,
    })
}

/// Applies an edit to a stored policy
///
/// Identifier and creation instant come from `stored`; everything else is
/// replaced and `last_update` is set to `now`.
pub fn to_updated_policy(
    stored: InsurancePolicy,
    action: EditInsurancePolicyAction,
    now: DateTime<Utc>,
) -> Result<InsurancePolicy, PolicyError> {
    Ok(InsurancePolicy {
        id: stored.id,
        name: required(action.name, fields::NAME)?,
        status: parse_status(action.status)?,
        start_date: required(action.start_date, fields::START_DATE)?,
        end_date: required(action.end_date, fields::END_DATE)?,
        creation: stored.creation,
        last_update: now,
    })
}

fn required<T>(value: Option<T>, field_name: &str) -> Result<T, PolicyError> {
    value.ok_or_else(|| {
        PolicyError::invalid_field(FieldError::new(field_name, no_value_provided_message(field_name)))
    })
}

fn parse_status(value: Option<String>) -> Result<InsurancePolicyStatus, PolicyError> {
    required(value, fields::STATUS)?.parse().map_err(|_| {
        PolicyError::invalid_field(FieldError::new(
            fields::STATUS,
            invalid_enum_value_message::<InsurancePolicyStatus>(fields::STATUS),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, TimeZone};
    use core_kernel::PolicyId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_action() -> CreateInsurancePolicyAction {
        CreateInsurancePolicyAction {
            name: Some("Home cover".to_string()),
            status: Some("ACTIVE".to_string()),
            start_date: Some(date(2024, 1, 1)),
            end_date: Some(date(2024, 12, 31)),
        }
    }

    #[test]
    fn test_new_policy_stamps_both_timestamps() {
        let now = Utc.with_ymd_and_hms(2024, 10, 28, 10, 0, 0).unwrap();
        let policy = to_new_policy(create_action(), now).unwrap();

        assert_eq!(policy.id, None);
        assert_eq!(policy.name, "Home cover");
        assert_eq!(policy.status, InsurancePolicyStatus::Active);
        assert_eq!(policy.creation, now);
        assert_eq!(policy.last_update, now);
    }

    #[test]
    fn test_updated_policy_keeps_id_and_creation() {
        let created = Utc.with_ymd_and_hms(2024, 10, 28, 10, 0, 0).unwrap();
        let stored = InsurancePolicy {
            id: Some(PolicyId::new(5)),
            ..to_new_policy(create_action(), created).unwrap()
        };
        let later = created + Duration::days(3);
        let action = EditInsurancePolicyAction {
            id: Some(PolicyId::new(5)),
            name: Some("Renamed".to_string()),
            status: Some("INACTIVE".to_string()),
            start_date: Some(date(2025, 1, 1)),
            end_date: Some(date(2025, 12, 31)),
        };

        let updated = to_updated_policy(stored, action, later).unwrap();

        assert_eq!(updated.id, Some(PolicyId::new(5)));
        assert_eq!(updated.creation, created);
        assert_eq!(updated.last_update, later);
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.status, InsurancePolicyStatus::Inactive);
        assert_eq!(updated.start_date, date(2025, 1, 1));
    }

    #[test]
    fn test_unvalidated_status_is_rejected_not_panicking() {
        let action = CreateInsurancePolicyAction {
            status: Some("PENDING".to_string()),
            ..create_action()
        };
        let error = to_new_policy(action, Utc::now()).unwrap_err();
        assert_eq!(error.field_errors()[0].field_name, "status");
    }
}
