//! Repository implementations
//!
//! Repositories own the SQL and the row types. They run on a borrowed
//! connection so the caller decides the transaction boundary.

pub mod insurance_policy;

pub use insurance_policy::{
    InsurancePolicyRepository, InsurancePolicyRow, InsurancePolicyStatusDb, NewInsurancePolicy,
};
