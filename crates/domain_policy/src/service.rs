//! Insurance policy application service
//!
//! [`InsurancePolicyService`] wires the four use cases to one store and one
//! clock and exposes them through the [`InsurancePolicyPort`] primary port.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, SharedClock};

use crate::commands::{
    CreateInsurancePolicyAction, EditInsurancePolicyAction, GetAllInsurancePoliciesQuery,
    GetInsurancePolicyByIdQuery,
};
use crate::error::PolicyError;
use crate::policy::InsurancePolicy;
use crate::ports::{InsurancePolicyPort, PolicyStore};
use crate::use_cases::{
    CreateInsurancePolicyUseCase, EditInsurancePolicyUseCase, GetAllInsurancePoliciesUseCase,
    GetInsurancePolicyByIdUseCase, UseCase,
};

/// Primary port implementation backed by the policy use cases
///
/// # Example
///
/// ```rust,ignore
/// use domain_policy::{InsurancePolicyService, InMemoryPolicyStore};
/// use core_kernel::SystemClock;
/// use std::sync::Arc;
///
/// let service = InsurancePolicyService::new(Arc::new(InMemoryPolicyStore::new()), SystemClock::shared());
/// let policies = service.get_all_insurance_policies(Default::default()).await?;
/// ```
pub struct InsurancePolicyService {
    store: Arc<dyn PolicyStore>,
    get_all: GetAllInsurancePoliciesUseCase,
    get_by_id: GetInsurancePolicyByIdUseCase,
    create: CreateInsurancePolicyUseCase,
    edit: EditInsurancePolicyUseCase,
}

impl InsurancePolicyService {
    /// Creates the service over the given store and clock
    pub fn new(store: Arc<dyn PolicyStore>, clock: SharedClock) -> Self {
        Self {
            get_all: GetAllInsurancePoliciesUseCase::new(store.clone()),
            get_by_id: GetInsurancePolicyByIdUseCase::new(store.clone()),
            create: CreateInsurancePolicyUseCase::new(store.clone(), clock.clone()),
            edit: EditInsurancePolicyUseCase::new(store.clone(), clock),
            store,
        }
    }
}

impl std::fmt::Debug for InsurancePolicyService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsurancePolicyService").finish_non_exhaustive()
    }
}

impl DomainPort for InsurancePolicyService {}

#[async_trait]
impl HealthCheckable for InsurancePolicyService {
    async fn health_check(&self) -> HealthCheckResult {
        self.store.health_check().await
    }
}

#[async_trait]
impl InsurancePolicyPort for InsurancePolicyService {
    #[instrument(skip(self, query))]
    async fn get_all_insurance_policies(
        &self,
        query: GetAllInsurancePoliciesQuery,
    ) -> Result<Vec<InsurancePolicy>, PolicyError> {
        self.get_all.execute(query).await
    }

    #[instrument(skip(self, query), fields(policy_id = ?query.id))]
    async fn get_insurance_policy_by_id(
        &self,
        query: GetInsurancePolicyByIdQuery,
    ) -> Result<InsurancePolicy, PolicyError> {
        self.get_by_id.execute(query).await
    }

    #[instrument(skip(self, action))]
    async fn create_insurance_policy(
        &self,
        action: CreateInsurancePolicyAction,
    ) -> Result<InsurancePolicy, PolicyError> {
        self.create.execute(action).await
    }

    #[instrument(skip(self, action), fields(policy_id = ?action.id))]
    async fn edit_insurance_policy(
        &self,
        action: EditInsurancePolicyAction,
    ) -> Result<InsurancePolicy, PolicyError> {
        self.edit.execute(action).await
    }
}
