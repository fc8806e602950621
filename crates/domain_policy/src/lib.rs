//! Insurance Policy Domain
//!
//! This crate implements the policy service core, following the hexagonal
//! architecture used across the workspace. It is infrastructure-agnostic:
//! persistence is reached only through the [`PolicyStore`] port.
//!
//! # Pipeline
//!
//! ```text
//! command -> validation -> transformation -> store -> InsurancePolicy
//!               │
//!               └─ InvalidInput (all field errors, no writes)
//! ```
//!
//! - **Validation**: field rules that collect every violation
//! - **Transformation**: stamps `creation` / `last_update` from a [`Clock`](core_kernel::Clock)
//! - **Use cases**: list, get by id, create, edit; each in one store transaction
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{CreateInsurancePolicyAction, InsurancePolicyPort, InsurancePolicyService};
//!
//! let created = service
//!     .create_insurance_policy(CreateInsurancePolicyAction {
//!         name: Some("Home cover".into()),
//!         status: Some("ACTIVE".into()),
//!         start_date: Some(start),
//!         end_date: Some(end),
//!     })
//!     .await?;
//! ```

pub mod commands;
pub mod error;
pub mod mapper;
pub mod policy;
pub mod ports;
pub mod service;
pub mod use_cases;
pub mod validation;

pub use commands::{
    CreateInsurancePolicyAction, EditInsurancePolicyAction, GetAllInsurancePoliciesQuery,
    GetInsurancePolicyByIdQuery,
};
pub use error::{ErrorType, PolicyError};
pub use policy::{InsurancePolicy, InsurancePolicyStatus, UnknownStatus};
pub use ports::memory::InMemoryPolicyStore;
pub use ports::{InsurancePolicyPort, PolicyStore, PolicyTransaction};
pub use service::InsurancePolicyService;
pub use validation::FieldError;
