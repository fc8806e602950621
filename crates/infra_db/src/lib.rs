//! Infrastructure Database Layer
//!
//! PostgreSQL persistence for the insurance policy service, built on SQLx.
//!
//! # Architecture
//!
//! - [`pool`]: connection pool configuration and creation
//! - [`migrations`]: schema migrations embedded in the binary
//! - [`repositories`]: SQL queries and row types
//! - [`adapters`]: [`PostgresPolicyStore`], the implementation of the
//!   domain's `PolicyStore` port
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresPolicyStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/insurance")).await?;
//! run_migrations(&pool).await?;
//! let store = PostgresPolicyStore::new(pool);
//! ```

pub mod adapters;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repositories;

pub use adapters::PostgresPolicyStore;
pub use error::DatabaseError;
pub use migrations::run_migrations;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::InsurancePolicyRepository;
