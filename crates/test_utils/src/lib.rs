//! Test Utilities Crate
//!
//! Shared test infrastructure for the insurance policy service.
//!
//! # Modules
//!
//! - `fixtures`: fixed dates, instants and names
//! - `builders`: builders for policies, create actions and edit actions
//! - `database`: PostgreSQL test containers with the schema applied
//! - `assertions`: assertion helpers with descriptive failure messages
//! - `generators`: proptest strategies for policy inputs

pub mod assertions;
pub mod builders;
pub mod database;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use database::*;
pub use fixtures::*;
pub use generators::*;
