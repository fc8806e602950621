//! Domain Adapters
//!
//! Implementations of the policy domain's ports on top of PostgreSQL.
//!
//! ```rust,ignore
//! use domain_policy::PolicyStore;
//! use infra_db::adapters::PostgresPolicyStore;
//! use std::sync::Arc;
//!
//! let store: Arc<dyn PolicyStore> = Arc::new(PostgresPolicyStore::new(pool));
//! ```

pub mod insurance_policy;

pub use insurance_policy::{PostgresPolicyStore, PostgresPolicyTransaction};
