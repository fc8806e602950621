//! Insurance policy repository
//!
//! Queries against the `insurance_policy` table. Every function takes a
//! `&mut PgConnection`, which callers obtain from a pool connection or from
//! an open transaction (`&mut *tx`).

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgConnection;
use tracing::debug;

use crate::error::DatabaseError;

const SELECT_COLUMNS: &str =
    "SELECT id, name, status, start_date, end_date, creation, last_update FROM insurance_policy";

/// Stateless access to the `insurance_policy` table
#[derive(Debug, Clone, Copy, Default)]
pub struct InsurancePolicyRepository;

impl InsurancePolicyRepository {
    /// Returns every row ordered by name, then id
    pub async fn find_all(
        conn: &mut PgConnection,
    ) -> Result<Vec<InsurancePolicyRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, InsurancePolicyRow>(&format!(
            "{SELECT_COLUMNS} ORDER BY name ASC, id ASC"
        ))
        .fetch_all(conn)
        .await?;

        debug!(count = rows.len(), "Loaded insurance policies");
        Ok(rows)
    }

    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: i32,
    ) -> Result<Option<InsurancePolicyRow>, DatabaseError> {
        let row = sqlx::query_as::<_, InsurancePolicyRow>(&format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(conn)
            .await?;

        Ok(row)
    }

    /// Like [`find_by_id`](Self::find_by_id), holding a row lock until the
    /// surrounding transaction ends
    pub async fn find_by_id_for_update(
        conn: &mut PgConnection,
        id: i32,
    ) -> Result<Option<InsurancePolicyRow>, DatabaseError> {
        let row = sqlx::query_as::<_, InsurancePolicyRow>(&format!(
            "{SELECT_COLUMNS} WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(conn)
        .await?;

        Ok(row)
    }

    /// Inserts a row and returns it with its generated id
    pub async fn insert(
        conn: &mut PgConnection,
        policy: &NewInsurancePolicy,
    ) -> Result<InsurancePolicyRow, DatabaseError> {
        let row = sqlx::query_as::<_, InsurancePolicyRow>(
            r#"
            INSERT INTO insurance_policy (name, status, start_date, end_date, creation, last_update)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, status, start_date, end_date, creation, last_update
            "#,
        )
        .bind(&policy.name)
        .bind(policy.status)
        .bind(policy.start_date)
        .bind(policy.end_date)
        .bind(policy.creation)
        .bind(policy.last_update)
        .fetch_one(conn)
        .await?;

        debug!(policy_id = row.id, "Inserted insurance policy");
        Ok(row)
    }

    /// Overwrites every column of an existing row
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no row has the given id.
    pub async fn update(
        conn: &mut PgConnection,
        id: i32,
        policy: &NewInsurancePolicy,
    ) -> Result<InsurancePolicyRow, DatabaseError> {
        let row = sqlx::query_as::<_, InsurancePolicyRow>(
            r#"
            UPDATE insurance_policy
            SET name = $2,
                status = $3,
                start_date = $4,
                end_date = $5,
                creation = $6,
                last_update = $7
            WHERE id = $1
            RETURNING id, name, status, start_date, end_date, creation, last_update
            "#,
        )
        .bind(id)
        .bind(&policy.name)
        .bind(policy.status)
        .bind(policy.start_date)
        .bind(policy.end_date)
        .bind(policy.creation)
        .bind(policy.last_update)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| DatabaseError::not_found("InsurancePolicy", id))?;

        debug!(policy_id = row.id, "Updated insurance policy");
        Ok(row)
    }
}

/// Values of the `insurance_policy_status` PostgreSQL enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "insurance_policy_status", rename_all = "UPPERCASE")]
pub enum InsurancePolicyStatusDb {
    Active,
    Inactive,
}

/// A row of the `insurance_policy` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct InsurancePolicyRow {
    pub id: i32,
    pub name: String,
    pub status: InsurancePolicyStatusDb,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub creation: DateTime<Utc>,
    pub last_update: DateTime<Utc>,
}

/// Column values written by insert and update
#[derive(Debug, Clone)]
pub struct NewInsurancePolicy {
    pub name: String,
    pub status: InsurancePolicyStatusDb,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub creation: DateTime<Utc>,
    pub last_update: DateTime<Utc>,
}
