//! Commands and queries accepted by the policy use cases
//!
//! Every field is optional so that absent values from the transport layer
//! reach validation, which reports them as field errors.

use chrono::NaiveDate;

use core_kernel::PolicyId;

/// Query listing every policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAllInsurancePoliciesQuery;

/// Query fetching a single policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetInsurancePolicyByIdQuery {
    pub id: Option<PolicyId>,
}

impl GetInsurancePolicyByIdQuery {
    pub fn new(id: PolicyId) -> Self {
        Self { id: Some(id) }
    }
}

/// Action creating a new policy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateInsurancePolicyAction {
    pub name: Option<String>,
    /// Raw status name, checked against the status enumeration
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Action replacing the content of an existing policy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditInsurancePolicyAction {
    pub id: Option<PolicyId>,
    pub name: Option<String>,
    /// Raw status name, checked against the status enumeration
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
