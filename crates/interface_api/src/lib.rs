//! HTTP API Layer
//!
//! REST API for insurance policies, built on Axum.
//!
//! # Architecture
//!
//! - **Handlers**: one per policy operation, plus health checks
//! - **DTOs**: JSON request and response bodies
//! - **Error Handling**: domain errors mapped to status codes and error payloads
//! - **Middleware**: request ids, tracing, request logging, panic recovery
//!
//! Handlers only see the domain through [`InsurancePolicyPort`], so the router
//! runs the same against PostgreSQL or the in-memory store.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(Arc::new(service), config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{middleware as axum_middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_policy::InsurancePolicyPort;

use crate::config::ApiConfig;
use crate::error::panic_response;
use crate::handlers::{health, insurance_policy};
use crate::middleware::{request_logging_middleware, MakeRequestUuidV7};

/// Base path of the policy resource
pub const INSURANCE_POLICIES_PATH: &str = "/v1/insurance-policies";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub policies: Arc<dyn InsurancePolicyPort>,
    pub config: ApiConfig,
}

/// Builds the router with every route and middleware layer
pub fn create_router(policies: Arc<dyn InsurancePolicyPort>, config: ApiConfig) -> Router {
    let state = AppState { policies, config };

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let policy_routes = Router::new()
        .route(
            "/",
            get(insurance_policy::list_insurance_policies)
                .post(insurance_policy::create_insurance_policy),
        )
        .route(
            "/:id",
            get(insurance_policy::get_insurance_policy)
                .put(insurance_policy::edit_insurance_policy),
        );

    Router::new()
        .merge(health_routes)
        .nest(INSURANCE_POLICIES_PATH, policy_routes)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(axum_middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
