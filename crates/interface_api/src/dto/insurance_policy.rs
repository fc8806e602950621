//! Insurance policy DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::PolicyId;
use domain_policy::{
    CreateInsurancePolicyAction, EditInsurancePolicyAction, InsurancePolicy, InsurancePolicyStatus,
};

/// Body of create and edit requests
///
/// Fields are optional so that missing values are reported by validation
/// rather than rejected as malformed JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditInsurancePolicyDto {
    pub name: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl EditInsurancePolicyDto {
    pub fn into_create_action(self) -> CreateInsurancePolicyAction {
        CreateInsurancePolicyAction {
            name: self.name,
            status: self.status,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    pub fn into_edit_action(self, id: PolicyId) -> EditInsurancePolicyAction {
        EditInsurancePolicyAction {
            id: Some(id),
            name: self.name,
            status: self.status,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// Policy as returned by the API
///
/// `creation` and `lastUpdate` are the UTC calendar dates of the stored
/// timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePolicyDto {
    pub id: Option<i32>,
    pub name: String,
    pub status: InsurancePolicyStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub creation: NaiveDate,
    pub last_update: NaiveDate,
}

impl From<InsurancePolicy> for InsurancePolicyDto {
    fn from(policy: InsurancePolicy) -> Self {
        Self {
            id: policy.id.map(i32::from),
            name: policy.name,
            status: policy.status,
            start_date: policy.start_date,
            end_date: policy.end_date,
            creation: policy.creation.date_naive(),
            last_update: policy.last_update.date_naive(),
        }
    }
}
