//! Policy Domain Ports
//!
//! This module defines the two port interfaces of the policy domain.
//!
//! # Primary port
//!
//! [`InsurancePolicyPort`] is what the interface layer calls: one operation
//! per capability (list, get, create, edit). It is implemented by
//! [`InsurancePolicyService`](crate::service::InsurancePolicyService).
//!
//! # Secondary port
//!
//! [`PolicyStore`] is what the domain needs from persistence. Every use case
//! runs inside one [`PolicyTransaction`] obtained from [`PolicyStore::begin`]:
//!
//! - **Internal Adapter**: PostgreSQL (`infra_db::PostgresPolicyStore`)
//! - **In-memory Adapter**: [`memory::InMemoryPolicyStore`], for tests and local runs
//!
//! Dropping a transaction without calling [`PolicyTransaction::commit`]
//! discards every write made through it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_policy::ports::PolicyStore;
//! use std::sync::Arc;
//!
//! let store: Arc<dyn PolicyStore> = Arc::new(PostgresPolicyStore::new(pool));
//! let mut tx = store.begin().await?;
//! let saved = tx.save(policy).await?;
//! tx.commit().await?;
//! ```

pub mod memory;

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, PolicyId, PortError};

use crate::commands::{
    CreateInsurancePolicyAction, EditInsurancePolicyAction, GetAllInsurancePoliciesQuery,
    GetInsurancePolicyByIdQuery,
};
use crate::error::PolicyError;
use crate::policy::InsurancePolicy;

/// Transport-facing operations on insurance policies
#[async_trait]
pub trait InsurancePolicyPort: DomainPort + HealthCheckable {
    /// Lists every policy, ordered by name
    async fn get_all_insurance_policies(
        &self,
        query: GetAllInsurancePoliciesQuery,
    ) -> Result<Vec<InsurancePolicy>, PolicyError>;

    /// Fetches one policy
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the id is absent, `NotFound` if no policy has it.
    async fn get_insurance_policy_by_id(
        &self,
        query: GetInsurancePolicyByIdQuery,
    ) -> Result<InsurancePolicy, PolicyError>;

    /// Creates a policy and returns it with its assigned id
    async fn create_insurance_policy(
        &self,
        action: CreateInsurancePolicyAction,
    ) -> Result<InsurancePolicy, PolicyError>;

    /// Replaces the content of an existing policy
    async fn edit_insurance_policy(
        &self,
        action: EditInsurancePolicyAction,
    ) -> Result<InsurancePolicy, PolicyError>;
}

/// Persistence collaborator of the policy domain
#[async_trait]
pub trait PolicyStore: DomainPort + HealthCheckable {
    /// Opens a transaction; every use case runs inside exactly one
    async fn begin(&self) -> Result<Box<dyn PolicyTransaction>, PortError>;
}

/// Unit of work over the policy store
///
/// Reads observe the writes already made through the same transaction.
#[async_trait]
pub trait PolicyTransaction: Send {
    /// Looks up a policy by identifier
    async fn get_by_id(&mut self, id: PolicyId) -> Result<Option<InsurancePolicy>, PortError>;

    /// Looks up a policy and locks it until the transaction ends
    ///
    /// Concurrent edits of the same policy queue behind the lock.
    async fn get_by_id_for_update(
        &mut self,
        id: PolicyId,
    ) -> Result<Option<InsurancePolicy>, PortError>;

    /// Returns every policy ordered by name, then id
    async fn get_all(&mut self) -> Result<Vec<InsurancePolicy>, PortError>;

    /// Inserts the policy when it has no id, overwrites the matching row otherwise
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` if the policy has an id that matches no row.
    async fn save(&mut self, policy: InsurancePolicy) -> Result<InsurancePolicy, PortError>;

    /// Makes every write of the transaction visible
    async fn commit(self: Box<Self>) -> Result<(), PortError>;
}
