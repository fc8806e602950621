//! End-to-end tests: HTTP router, policy service and PostgreSQL store
//!
//! Run with: `cargo test -p interface_api -- --ignored`

use axum::body::Body;
use axum::http::{Request, StatusCode};
use core_kernel::SystemClock;
use domain_policy::InsurancePolicyService;
use infra_db::PostgresPolicyStore;
use interface_api::config::ApiConfig;
use interface_api::create_router;
use interface_api::dto::InsurancePolicyDto;
use interface_api::error::ErrorDto;
use serde_json::json;
use std::sync::Arc;
use test_utils::{create_isolated_test_database, TestDatabase};
use tower::ServiceExt;

async fn app() -> (TestDatabase, axum::Router) {
    let db = create_isolated_test_database()
        .await
        .expect("Failed to start test database");
    let store = Arc::new(PostgresPolicyStore::new(db.pool().clone()));
    let service = Arc::new(InsurancePolicyService::new(store, SystemClock::shared()));
    (db, create_router(service, ApiConfig::default()))
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_create_edit_and_read_back() {
    let (_db, router) = app().await;

    let response = router
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/insurance-policies",
            json!({"name": "A", "status": "ACTIVE", "startDate": "2024-01-01", "endDate": "2024-12-31"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let created: InsurancePolicyDto = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(created.id, Some(1));

    let response = router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/v1/insurance-policies/1",
            json!({"name": "B", "status": "INACTIVE", "startDate": "2025-01-01", "endDate": "2025-12-31"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/v1/insurance-policies")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let policies: Vec<InsurancePolicyDto> = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(policies.len(), 1);
    assert_eq!(policies[0].name, "B");
    assert_eq!(policies[0].creation, created.creation);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_unknown_id_is_404() {
    let (_db, router) = app().await;

    let response = router
        .oneshot(
            Request::builder()
                .uri("/v1/insurance-policies/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let error: ErrorDto = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error.key, "insurance_policy_not_found");
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_readiness_against_database() {
    let (_db, router) = app().await;

    let response = router
        .oneshot(Request::builder().uri("/health/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
