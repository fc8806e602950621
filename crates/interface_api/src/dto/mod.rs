//! Request and response bodies

pub mod insurance_policy;

pub use insurance_policy::{EditInsurancePolicyDto, InsurancePolicyDto};
