//! PostgreSQL Policy Store
//!
//! [`PostgresPolicyStore`] implements the domain's `PolicyStore` port. Each
//! [`PolicyStore::begin`] opens a database transaction which is wrapped in a
//! [`PostgresPolicyTransaction`]; dropping it without committing rolls the
//! transaction back.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, instrument};

use core_kernel::{AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PolicyId, PortError};
use domain_policy::{InsurancePolicy, InsurancePolicyStatus, PolicyStore, PolicyTransaction};

use crate::error::DatabaseError;
use crate::repositories::{
    InsurancePolicyRepository, InsurancePolicyRow, InsurancePolicyStatusDb, NewInsurancePolicy,
};

const ADAPTER_ID: &str = "postgres-policy-store";

/// Policy store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PostgresPolicyStore {
    pool: PgPool,
}

impl PostgresPolicyStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl DomainPort for PostgresPolicyStore {}

#[async_trait]
impl HealthCheckable for PostgresPolicyStore {
    /// Runs `SELECT 1` on a pooled connection
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(_) => HealthCheckResult {
                adapter_id: ADAPTER_ID.to_string(),
                status: AdapterHealth::Healthy,
                latency_ms,
                message: None,
                checked_at: Utc::now(),
            },
            Err(e) => HealthCheckResult {
                adapter_id: ADAPTER_ID.to_string(),
                status: AdapterHealth::Unhealthy,
                latency_ms,
                message: Some(format!("Database error: {}", e)),
                checked_at: Utc::now(),
            },
        }
    }
}

#[async_trait]
impl PolicyStore for PostgresPolicyStore {
    #[instrument(skip(self))]
    async fn begin(&self) -> Result<Box<dyn PolicyTransaction>, PortError> {
        let tx = self.pool.begin().await.map_err(db_to_port_error)?;
        Ok(Box::new(PostgresPolicyTransaction { tx }))
    }
}

/// An open database transaction
pub struct PostgresPolicyTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl PolicyTransaction for PostgresPolicyTransaction {
    #[instrument(skip(self), fields(policy_id = %id))]
    async fn get_by_id(&mut self, id: PolicyId) -> Result<Option<InsurancePolicy>, PortError> {
        let row = InsurancePolicyRepository::find_by_id(&mut self.tx, id.value()).await?;
        Ok(row.map(row_to_policy))
    }

    #[instrument(skip(self), fields(policy_id = %id))]
    async fn get_by_id_for_update(
        &mut self,
        id: PolicyId,
    ) -> Result<Option<InsurancePolicy>, PortError> {
        let row = InsurancePolicyRepository::find_by_id_for_update(&mut self.tx, id.value()).await?;
        Ok(row.map(row_to_policy))
    }

    #[instrument(skip(self))]
    async fn get_all(&mut self) -> Result<Vec<InsurancePolicy>, PortError> {
        let rows = InsurancePolicyRepository::find_all(&mut self.tx).await?;
        Ok(rows.into_iter().map(row_to_policy).collect())
    }

    #[instrument(skip(self, policy), fields(policy_id = ?policy.id))]
    async fn save(&mut self, policy: InsurancePolicy) -> Result<InsurancePolicy, PortError> {
        let values = policy_to_new_row(&policy);
        let row = match policy.id {
            Some(id) => InsurancePolicyRepository::update(&mut self.tx, id.value(), &values).await?,
            None => InsurancePolicyRepository::insert(&mut self.tx, &values).await?,
        };
        Ok(row_to_policy(row))
    }

    async fn commit(self: Box<Self>) -> Result<(), PortError> {
        self.tx.commit().await.map_err(db_to_port_error)?;
        debug!("Transaction committed");
        Ok(())
    }
}

// =============================================================================
// Conversion Functions
// =============================================================================

fn db_to_port_error(e: sqlx::Error) -> PortError {
    DatabaseError::from(e).into()
}

fn row_to_policy(row: InsurancePolicyRow) -> InsurancePolicy {
    InsurancePolicy {
        id: Some(PolicyId::new(row.id)),
        name: row.name,
        status: match row.status {
            InsurancePolicyStatusDb::Active => InsurancePolicyStatus::Active,
            InsurancePolicyStatusDb::Inactive => InsurancePolicyStatus::Inactive,
        },
        start_date: row.start_date,
        end_date: row.end_date,
        creation: row.creation,
        last_update: row.last_update,
    }
}

fn policy_to_new_row(policy: &InsurancePolicy) -> NewInsurancePolicy {
    NewInsurancePolicy {
        name: policy.name.clone(),
        status: match policy.status {
            InsurancePolicyStatus::Active => InsurancePolicyStatusDb::Active,
            InsurancePolicyStatus::Inactive => InsurancePolicyStatusDb::Inactive,
        },
        start_date: policy.start_date,
        end_date: policy.end_date,
        creation: policy.creation,
        last_update: policy.last_update,
    }
}
