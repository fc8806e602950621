//! Policy use cases
//!
//! Each capability is a [`UseCase`]: a `validate` step followed by a
//! `process` step, both run by the provided [`UseCase::execute`] inside a
//! single store transaction. The transaction is committed only when both
//! steps succeed; on every other path it is dropped, which rolls it back.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use core_kernel::SharedClock;

use crate::commands::{
    CreateInsurancePolicyAction, EditInsurancePolicyAction, GetAllInsurancePoliciesQuery,
    GetInsurancePolicyByIdQuery,
};
use crate::error::PolicyError;
use crate::mapper;
use crate::policy::InsurancePolicy;
use crate::ports::{PolicyStore, PolicyTransaction};
use crate::validation::{
    fields, no_value_provided_message, policy_content_rules, validate_input,
    validate_mandatory_value, FieldError,
};

/// A validate-then-process operation run inside one transaction
#[async_trait]
pub trait UseCase: Send + Sync {
    type Input: Send + 'static;
    type Output: Send + 'static;

    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Store providing the transaction
    fn store(&self) -> &dyn PolicyStore;

    /// Checks the input; must not touch the store
    fn validate(&self, input: &Self::Input) -> Result<(), PolicyError>;

    /// Runs the operation on a validated input
    async fn process(
        &self,
        tx: &mut dyn PolicyTransaction,
        input: Self::Input,
    ) -> Result<Self::Output, PolicyError>;

    /// Validates then processes the input as one atomic unit
    async fn execute(&self, input: Self::Input) -> Result<Self::Output, PolicyError> {
        let mut tx = self.store().begin().await?;

        if let Err(error) = self.validate(&input) {
            warn!(
                use_case = self.name(),
                field_errors = error.field_errors().len(),
                "Input rejected"
            );
            return Err(error);
        }

        let output = self.process(tx.as_mut(), input).await?;
        tx.commit().await?;
        Ok(output)
    }
}

/// Lists every policy ordered by name
pub struct GetAllInsurancePoliciesUseCase {
    store: Arc<dyn PolicyStore>,
}

impl GetAllInsurancePoliciesUseCase {
    pub fn new(store: Arc<dyn PolicyStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UseCase for GetAllInsurancePoliciesUseCase {
    type Input = GetAllInsurancePoliciesQuery;
    type Output = Vec<InsurancePolicy>;

    fn name(&self) -> &'static str {
        "get_all_insurance_policies"
    }

    fn store(&self) -> &dyn PolicyStore {
        self.store.as_ref()
    }

    fn validate(&self, _query: &Self::Input) -> Result<(), PolicyError> {
        Ok(())
    }

    async fn process(
        &self,
        tx: &mut dyn PolicyTransaction,
        _query: Self::Input,
    ) -> Result<Self::Output, PolicyError> {
        Ok(tx.get_all().await?)
    }
}

/// Fetches one policy by identifier
pub struct GetInsurancePolicyByIdUseCase {
    store: Arc<dyn PolicyStore>,
}

impl GetInsurancePolicyByIdUseCase {
    pub fn new(store: Arc<dyn PolicyStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UseCase for GetInsurancePolicyByIdUseCase {
    type Input = GetInsurancePolicyByIdQuery;
    type Output = InsurancePolicy;

    fn name(&self) -> &'static str {
        "get_insurance_policy_by_id"
    }

    fn store(&self) -> &dyn PolicyStore {
        self.store.as_ref()
    }

    fn validate(&self, query: &Self::Input) -> Result<(), PolicyError> {
        validate_input([validate_mandatory_value(query.id.as_ref(), fields::ID)])
    }

    async fn process(
        &self,
        tx: &mut dyn PolicyTransaction,
        query: Self::Input,
    ) -> Result<Self::Output, PolicyError> {
        let id = query.id.ok_or_else(missing_id)?;
        tx.get_by_id(id)
            .await?
            .ok_or_else(|| PolicyError::not_found(id))
    }
}

/// Creates a policy
pub struct CreateInsurancePolicyUseCase {
    store: Arc<dyn PolicyStore>,
    clock: SharedClock,
}

impl CreateInsurancePolicyUseCase {
    pub fn new(store: Arc<dyn PolicyStore>, clock: SharedClock) -> Self {
        Self { store, clock }
    }
}

#[async_trait]
impl UseCase for CreateInsurancePolicyUseCase {
    type Input = CreateInsurancePolicyAction;
    type Output = InsurancePolicy;

    fn name(&self) -> &'static str {
        "create_insurance_policy"
    }

    fn store(&self) -> &dyn PolicyStore {
        self.store.as_ref()
    }

    fn validate(&self, action: &Self::Input) -> Result<(), PolicyError> {
        validate_input(policy_content_rules(
            action.name.as_deref(),
            action.status.as_deref(),
            action.start_date,
            action.end_date,
        ))
    }

    async fn process(
        &self,
        tx: &mut dyn PolicyTransaction,
        action: Self::Input,
    ) -> Result<Self::Output, PolicyError> {
        let policy = mapper::to_new_policy(action, self.clock.now())?;
        let saved = tx.save(policy).await?;
        info!(policy_id = ?saved.id, name = %saved.name, "Insurance policy created");
        Ok(saved)
    }
}

/// Replaces the content of an existing policy
pub struct EditInsurancePolicyUseCase {
    store: Arc<dyn PolicyStore>,
    clock: SharedClock,
}

impl EditInsurancePolicyUseCase {
    pub fn new(store: Arc<dyn PolicyStore>, clock: SharedClock) -> Self {
        Self { store, clock }
    }
}

#[async_trait]
impl UseCase for EditInsurancePolicyUseCase {
    type Input = EditInsurancePolicyAction;
    type Output = InsurancePolicy;

    fn name(&self) -> &'static str {
        "edit_insurance_policy"
    }

    fn store(&self) -> &dyn PolicyStore {
        self.store.as_ref()
    }

    fn validate(&self, action: &Self::Input) -> Result<(), PolicyError> {
        let id_rule = validate_mandatory_value(action.id.as_ref(), fields::ID);
        let content_rules = policy_content_rules(
            action.name.as_deref(),
            action.status.as_deref(),
            action.start_date,
            action.end_date,
        );
        validate_input(std::iter::once(id_rule).chain(content_rules))
    }

    async fn process(
        &self,
        tx: &mut dyn PolicyTransaction,
        action: Self::Input,
    ) -> Result<Self::Output, PolicyError> {
        let id = action.id.ok_or_else(missing_id)?;
        let stored = tx
            .get_by_id_for_update(id)
            .await?
            .ok_or_else(|| PolicyError::not_found(id))?;

        let mut now = self.clock.now();
        if now < stored.last_update {
            // Never move last_update backwards, even if the clock does
            now = stored.last_update;
        }

        let policy = mapper::to_updated_policy(stored, action, now)?;
        let saved = tx.save(policy).await?;
        info!(policy_id = %id, "Insurance policy edited");
        Ok(saved)
    }
}

fn missing_id() -> PolicyError {
    PolicyError::invalid_field(FieldError::new(fields::ID, no_value_provided_message(fields::ID)))
}
