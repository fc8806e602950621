//! Insurance policy entity
//!
//! The [`InsurancePolicy`] value is the only entity managed by the service.
//! It is created by the create use case (the store assigns its identifier)
//! and replaced wholesale by the edit use case.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use core_kernel::PolicyId;

/// An insurance policy as persisted by the store
///
/// Invariants held by every persisted value:
/// - `end_date` is strictly after `start_date`
/// - `creation <= last_update`
/// - `id` is `Some` and never changes once assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsurancePolicy {
    /// Store-assigned identifier, `None` until first save
    pub id: Option<PolicyId>,
    /// Display name, at most 200 characters
    pub name: String,
    /// Lifecycle status
    pub status: InsurancePolicyStatus,
    /// First day of cover
    pub start_date: NaiveDate,
    /// Last day of cover
    pub end_date: NaiveDate,
    /// Instant of first persistence
    pub creation: DateTime<Utc>,
    /// Instant of the latest successful write
    pub last_update: DateTime<Utc>,
}

/// Status of an insurance policy
///
/// Declaration order is significant: validation messages list the values
/// in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsurancePolicyStatus {
    Active,
    Inactive,
}

/// Error returned when a status name is not a case-exact enum member
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown insurance policy status: {0}")]
pub struct UnknownStatus(pub String);

impl InsurancePolicyStatus {
    /// Every status, in declaration order
    pub const ALL: [InsurancePolicyStatus; 2] =
        [InsurancePolicyStatus::Active, InsurancePolicyStatus::Inactive];

    /// Returns the canonical name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            InsurancePolicyStatus::Active => "ACTIVE",
            InsurancePolicyStatus::Inactive => "INACTIVE",
        }
    }
}

impl fmt::Display for InsurancePolicyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InsurancePolicyStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
