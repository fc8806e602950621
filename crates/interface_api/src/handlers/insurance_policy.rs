//! Insurance policy handlers
//!
//! Body and path extraction failures are taken as `Result`s so they are
//! reported through [`ApiError`] like every other failure.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use core_kernel::PolicyId;
use domain_policy::{GetAllInsurancePoliciesQuery, GetInsurancePolicyByIdQuery};

use crate::dto::{EditInsurancePolicyDto, InsurancePolicyDto};
use crate::{error::ApiError, AppState};

/// Lists every policy, ordered by name
pub async fn list_insurance_policies(
    State(state): State<AppState>,
) -> Result<Json<Vec<InsurancePolicyDto>>, ApiError> {
    let policies = state
        .policies
        .get_all_insurance_policies(GetAllInsurancePoliciesQuery)
        .await?;

    Ok(Json(policies.into_iter().map(InsurancePolicyDto::from).collect()))
}

pub async fn get_insurance_policy(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<InsurancePolicyDto>, ApiError> {
    let Path(id) = path?;
    let policy = state
        .policies
        .get_insurance_policy_by_id(GetInsurancePolicyByIdQuery::new(PolicyId::new(id)))
        .await?;

    Ok(Json(policy.into()))
}

pub async fn create_insurance_policy(
    State(state): State<AppState>,
    body: Result<Json<EditInsurancePolicyDto>, JsonRejection>,
) -> Result<Json<InsurancePolicyDto>, ApiError> {
    let Json(dto) = body?;
    let policy = state
        .policies
        .create_insurance_policy(dto.into_create_action())
        .await?;

    Ok(Json(policy.into()))
}

/// Replaces name, status and dates of the policy at `id`
pub async fn edit_insurance_policy(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<EditInsurancePolicyDto>, JsonRejection>,
) -> Result<Json<InsurancePolicyDto>, ApiError> {
    let Path(id) = path?;
    let Json(dto) = body?;
    let policy = state
        .policies
        .edit_insurance_policy(dto.into_edit_action(PolicyId::new(id)))
        .await?;

    Ok(Json(policy.into()))
}
