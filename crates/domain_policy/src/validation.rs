//! Field validation rules
//!
//! Each rule checks one constraint on one field and returns
//! `Some(FieldError)` when the constraint is violated. Rules never stop at
//! the first failure: callers evaluate every rule and hand the results to
//! [`validate_input`], which rejects the input with all collected errors.
//!
//! # Rules
//!
//! - [`validate_mandatory_value`]: the value must be present
//! - [`validate_mandatory_not_blank_string`]: present and not only whitespace
//! - [`validate_string_length`]: at most `max` characters (absent is exempt)
//! - [`validate_enum_value`]: a case-exact enum member (absent is exempt)
//! - [`validate_date_order`]: end strictly after start (checked only when both are present)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PolicyError;
use crate::policy::InsurancePolicyStatus;

/// Wire names of the policy fields, used in error messages
pub mod fields {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const NAME_MAX_LENGTH: usize = 200;
    pub const STATUS: &str = "status";
    pub const START_DATE: &str = "startDate";
    pub const END_DATE: &str = "endDate";
}

/// A validation failure on a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field_name: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            message: message.into(),
        }
    }
}

/// Closed set of named values that can be checked by [`validate_enum_value`]
pub trait EnumeratedValue: Sized + Copy + 'static {
    /// Every member, in declaration order
    fn members() -> &'static [Self];

    /// Canonical name of the member
    fn name(&self) -> &'static str;
}

impl EnumeratedValue for InsurancePolicyStatus {
    fn members() -> &'static [Self] {
        &InsurancePolicyStatus::ALL
    }

    fn name(&self) -> &'static str {
        self.as_str()
    }
}

pub fn no_value_provided_message(field_name: &str) -> String {
    format!("No value was provided for the required field {}", field_name)
}

pub fn blank_string_message(field_name: &str) -> String {
    format!("The provided value was blank for the field {}", field_name)
}

pub fn string_too_long_message(field_name: &str, max_length: usize) -> String {
    format!(
        "The field {} cannot contain more then {} characters",
        field_name, max_length
    )
}

pub fn invalid_enum_value_message<E: EnumeratedValue>(field_name: &str) -> String {
    format!(
        "The value for the field {} can only one of: {}",
        field_name,
        valid_enum_values::<E>()
    )
}

pub fn invalid_date_order_message(end_field_name: &str, start_field_name: &str) -> String {
    format!(
        "The date value for the field {} must be after the value of the field {}",
        end_field_name, start_field_name
    )
}

fn valid_enum_values<E: EnumeratedValue>() -> String {
    E::members()
        .iter()
        .map(EnumeratedValue::name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rejects the input if any rule produced an error
///
/// # Errors
///
/// Returns `PolicyError::InvalidInput` carrying every collected field error,
/// in rule order.
pub fn validate_input(
    results: impl IntoIterator<Item = Option<FieldError>>,
) -> Result<(), PolicyError> {
    let field_errors: Vec<FieldError> = results.into_iter().flatten().collect();
    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(PolicyError::InvalidInput { field_errors })
    }
}

pub fn validate_mandatory_value<T>(value: Option<&T>, field_name: &str) -> Option<FieldError> {
    check(value.is_some(), field_name, || no_value_provided_message(field_name))
}

/// Presence is checked first; the blank check only runs on a present value
///
/// Blank means only Unicode `White_Space` characters, as `str::trim` strips.
pub fn validate_mandatory_not_blank_string(
    value: Option<&str>,
    field_name: &str,
) -> Option<FieldError> {
    validate_mandatory_value(value.as_ref(), field_name).or_else(|| {
        check(
            value.is_some_and(|v| !v.trim().is_empty()),
            field_name,
            || blank_string_message(field_name),
        )
    })
}

/// Length is counted in `char`s, the unit `VARCHAR(n)` limits
pub fn validate_string_length(
    value: Option<&str>,
    max_length: usize,
    field_name: &str,
) -> Option<FieldError> {
    check(
        value.map_or(true, |v| v.chars().count() <= max_length),
        field_name,
        || string_too_long_message(field_name, max_length),
    )
}

pub fn validate_enum_value<E: EnumeratedValue>(
    value: Option<&str>,
    field_name: &str,
) -> Option<FieldError> {
    check(
        value.map_or(true, |v| E::members().iter().any(|m| m.name() == v)),
        field_name,
        || invalid_enum_value_message::<E>(field_name),
    )
}

/// The error, when any, is reported on the end date field
pub fn validate_date_order(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    start_field_name: &str,
    end_field_name: &str,
) -> Option<FieldError> {
    let in_order = match (start_date, end_date) {
        (Some(start), Some(end)) => end > start,
        _ => true,
    };
    check(in_order, end_field_name, || {
        invalid_date_order_message(end_field_name, start_field_name)
    })
}

/// Rules shared by creation and edition, in reporting order
pub fn policy_content_rules(
    name: Option<&str>,
    status: Option<&str>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> [Option<FieldError>; 7] {
    [
        validate_mandatory_not_blank_string(name, fields::NAME),
        validate_string_length(name, fields::NAME_MAX_LENGTH, fields::NAME),
        validate_mandatory_value(status.as_ref(), fields::STATUS),
        validate_enum_value::<InsurancePolicyStatus>(status, fields::STATUS),
        validate_mandatory_value(start_date.as_ref(), fields::START_DATE),
        validate_mandatory_value(end_date.as_ref(), fields::END_DATE),
        validate_date_order(start_date, end_date, fields::START_DATE, fields::END_DATE),
    ]
}

fn check(
    condition: bool,
    field_name: &str,
    message: impl FnOnce() -> String,
) -> Option<FieldError> {
    if condition {
        None
    } else {
        Some(FieldError::new(field_name, message()))
    }
}
