//! In-memory policy store
//!
//! A single async mutex guards the data, and a transaction holds it from
//! `begin` until commit or drop, so transactions are fully serialised.
//! Writes are staged in the transaction and applied on commit only.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;

use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PolicyId, PortError,
};

use super::{PolicyStore, PolicyTransaction};
use crate::policy::InsurancePolicy;

const ADAPTER_ID: &str = "in-memory-policy-store";

#[derive(Debug, Default)]
struct MemoryState {
    rows: BTreeMap<PolicyId, InsurancePolicy>,
    last_id: i32,
}

/// In-memory implementation of [`PolicyStore`]
///
/// Identifiers are assigned sequentially starting at 1. Cloning the store
/// shares the underlying data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPolicyStore {
    state: Arc<Mutex<MemoryState>>,
    fail_saves: Arc<AtomicBool>,
}

impl InMemoryPolicyStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the store, assigning ids to policies that have none
    pub async fn with_policies(policies: Vec<InsurancePolicy>) -> Self {
        let store = Self::new();
        {
            let mut state = store.state.lock().await;
            for mut policy in policies {
                let id = match policy.id {
                    Some(id) => id,
                    None => PolicyId::new(state.last_id + 1),
                };
                state.last_id = state.last_id.max(id.value());
                policy.id = Some(id);
                state.rows.insert(id, policy);
            }
        }
        store
    }

    /// Returns the committed policies in id order
    pub async fn snapshot(&self) -> Vec<InsurancePolicy> {
        self.state.lock().await.rows.values().cloned().collect()
    }

    /// Returns the number of committed policies
    pub async fn len(&self) -> usize {
        self.state.lock().await.rows.len()
    }

    /// Returns true when no policy has been committed
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Makes every subsequent `save` fail with an internal error
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl DomainPort for InMemoryPolicyStore {}

#[async_trait]
impl HealthCheckable for InMemoryPolicyStore {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult {
            adapter_id: ADAPTER_ID.to_string(),
            status: AdapterHealth::Healthy,
            latency_ms: 0,
            message: Some("In-memory store always healthy".to_string()),
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl PolicyStore for InMemoryPolicyStore {
    async fn begin(&self) -> Result<Box<dyn PolicyTransaction>, PortError> {
        let guard = self.state.clone().lock_owned().await;
        let last_id = guard.last_id;
        debug!(adapter = ADAPTER_ID, "Transaction started");
        Ok(Box::new(InMemoryTransaction {
            guard,
            staged: BTreeMap::new(),
            last_id,
            fail_saves: self.fail_saves.clone(),
        }))
    }
}

struct InMemoryTransaction {
    guard: OwnedMutexGuard<MemoryState>,
    staged: BTreeMap<PolicyId, InsurancePolicy>,
    last_id: i32,
    fail_saves: Arc<AtomicBool>,
}

impl InMemoryTransaction {
    fn lookup(&self, id: PolicyId) -> Option<InsurancePolicy> {
        self.staged
            .get(&id)
            .or_else(|| self.guard.rows.get(&id))
            .cloned()
    }
}

#[async_trait]
impl PolicyTransaction for InMemoryTransaction {
    async fn get_by_id(&mut self, id: PolicyId) -> Result<Option<InsurancePolicy>, PortError> {
        Ok(self.lookup(id))
    }

    async fn get_by_id_for_update(
        &mut self,
        id: PolicyId,
    ) -> Result<Option<InsurancePolicy>, PortError> {
        // The transaction already holds the store-wide lock
        Ok(self.lookup(id))
    }

    async fn get_all(&mut self) -> Result<Vec<InsurancePolicy>, PortError> {
        let mut merged = self.guard.rows.clone();
        merged.extend(self.staged.iter().map(|(id, policy)| (*id, policy.clone())));

        let mut policies: Vec<InsurancePolicy> = merged.into_values().collect();
        policies.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(policies)
    }

    async fn save(&mut self, mut policy: InsurancePolicy) -> Result<InsurancePolicy, PortError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(PortError::internal("Simulated save failure"));
        }

        let id = match policy.id {
            Some(id) if self.lookup(id).is_some() => id,
            Some(id) => return Err(PortError::not_found("InsurancePolicy", id)),
            None => {
                self.last_id += 1;
                PolicyId::new(self.last_id)
            }
        };

        policy.id = Some(id);
        self.staged.insert(id, policy.clone());
        Ok(policy)
    }

    async fn commit(self: Box<Self>) -> Result<(), PortError> {
        let InMemoryTransaction { mut guard, staged, last_id, .. } = *self;
        let count = staged.len();
        guard.rows.extend(staged);
        guard.last_id = last_id;
        debug!(adapter = ADAPTER_ID, writes = count, "Transaction committed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::InsurancePolicyStatus;
    use chrono::NaiveDate;

    fn policy(name: &str) -> InsurancePolicy {
        let now = Utc::now();
        InsurancePolicy {
            id: None,
            name: name.to_string(),
            status: InsurancePolicyStatus::Active,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            creation: now,
            last_update: now,
        }
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let store = InMemoryPolicyStore::new();
        let mut tx = store.begin().await.unwrap();
        let first = tx.save(policy("A")).await.unwrap();
        let second = tx.save(policy("B")).await.unwrap();
        tx.commit().await.unwrap();

        assert_eq!(first.id, Some(PolicyId::new(1)));
        assert_eq!(second.id, Some(PolicyId::new(2)));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_dropped_transaction_discards_writes() {
        let store = InMemoryPolicyStore::new();
        {
            let mut tx = store.begin().await.unwrap();
            tx.save(policy("A")).await.unwrap();
        }
        assert!(store.is_empty().await);

        // The id consumed by the rolled back insert is reused
        let mut tx = store.begin().await.unwrap();
        let saved = tx.save(policy("A")).await.unwrap();
        tx.commit().await.unwrap();
        assert_eq!(saved.id, Some(PolicyId::new(1)));
    }

    #[tokio::test]
    async fn test_reads_see_staged_writes() {
        let store = InMemoryPolicyStore::new();
        let mut tx = store.begin().await.unwrap();
        let saved = tx.save(policy("A")).await.unwrap();

        let found = tx.get_by_id(saved.id.unwrap()).await.unwrap();
        assert_eq!(found, Some(saved));
        assert_eq!(tx.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_with_unknown_id_fails() {
        let store = InMemoryPolicyStore::new();
        let mut tx = store.begin().await.unwrap();
        let orphan = InsurancePolicy {
            id: Some(PolicyId::new(42)),
            ..policy("A")
        };

        let error = tx.save(orphan).await.unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn test_with_policies_continues_id_sequence() {
        let seeded = InsurancePolicy {
            id: Some(PolicyId::new(10)),
            ..policy("Seeded")
        };
        let store = InMemoryPolicyStore::with_policies(vec![seeded]).await;

        let mut tx = store.begin().await.unwrap();
        let saved = tx.save(policy("Next")).await.unwrap();
        assert_eq!(saved.id, Some(PolicyId::new(11)));
    }
}
