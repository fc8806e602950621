//! Test Data Builders
//!
//! Builders start from a valid value and let tests override only the fields
//! they care about.

use chrono::{DateTime, NaiveDate, Utc};
use core_kernel::PolicyId;
use domain_policy::{
    CreateInsurancePolicyAction, EditInsurancePolicyAction, InsurancePolicy, InsurancePolicyStatus,
};

use crate::fixtures::{NameFixtures, TemporalFixtures};

/// Builder for stored policies
#[derive(Debug, Clone)]
pub struct InsurancePolicyBuilder {
    policy: InsurancePolicy,
}

impl Default for InsurancePolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InsurancePolicyBuilder {
    /// An active, unpersisted policy over the 2024 period
    pub fn new() -> Self {
        let at = TemporalFixtures::reference_instant();
        Self {
            policy: InsurancePolicy {
                id: None,
                name: NameFixtures::home().to_string(),
                status: InsurancePolicyStatus::Active,
                start_date: TemporalFixtures::policy_start(),
                end_date: TemporalFixtures::policy_end(),
                creation: at,
                last_update: at,
            },
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.policy.id = Some(PolicyId::new(id));
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.policy.name = name.into();
        self
    }

    pub fn with_status(mut self, status: InsurancePolicyStatus) -> Self {
        self.policy.status = status;
        self
    }

    pub fn with_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.policy.start_date = start;
        self.policy.end_date = end;
        self
    }

    /// Sets both `creation` and `last_update`
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.policy.creation = at;
        self.policy.last_update = at;
        self
    }

    pub fn last_updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.policy.last_update = at;
        self
    }

    pub fn build(self) -> InsurancePolicy {
        self.policy
    }
}

/// Builder for create actions
#[derive(Debug, Clone)]
pub struct CreateActionBuilder {
    action: CreateInsurancePolicyAction,
}

impl Default for CreateActionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateActionBuilder {
    /// A valid action for an active policy over the 2024 period
    pub fn new() -> Self {
        Self {
            action: CreateInsurancePolicyAction {
                name: Some(NameFixtures::home().to_string()),
                status: Some(InsurancePolicyStatus::Active.to_string()),
                start_date: Some(TemporalFixtures::policy_start()),
                end_date: Some(TemporalFixtures::policy_end()),
            },
        }
    }

    /// An action with every field absent
    pub fn empty() -> Self {
        Self {
            action: CreateInsurancePolicyAction::default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.action.name = Some(name.into());
        self
    }

    pub fn without_name(mut self) -> Self {
        self.action.name = None;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.action.status = Some(status.into());
        self
    }

    pub fn without_status(mut self) -> Self {
        self.action.status = None;
        self
    }

    pub fn period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.action.start_date = Some(start);
        self.action.end_date = Some(end);
        self
    }

    pub fn build(self) -> CreateInsurancePolicyAction {
        self.action
    }
}

/// Builder for edit actions
#[derive(Debug, Clone)]
pub struct EditActionBuilder {
    action: EditInsurancePolicyAction,
}

impl EditActionBuilder {
    /// A valid action targeting `id`, moving the policy to the 2025 period
    pub fn new(id: i32) -> Self {
        Self {
            action: EditInsurancePolicyAction {
                id: Some(PolicyId::new(id)),
                name: Some(NameFixtures::car().to_string()),
                status: Some(InsurancePolicyStatus::Inactive.to_string()),
                start_date: Some(TemporalFixtures::renewal_start()),
                end_date: Some(TemporalFixtures::renewal_end()),
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.action.name = Some(name.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.action.status = Some(status.into());
        self
    }

    pub fn period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.action.start_date = Some(start);
        self.action.end_date = Some(end);
        self
    }

    pub fn build(self) -> EditInsurancePolicyAction {
        self.action
    }
}
