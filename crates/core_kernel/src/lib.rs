//! Core Kernel - Foundational types shared by the insurance policy service
//!
//! This crate provides the building blocks used by the domain, persistence
//! and API layers:
//! - Strongly-typed identifiers
//! - Port infrastructure (errors, health checks) for hexagonal adapters
//! - A clock abstraction so timestamps can be controlled in tests

pub mod identifiers;
pub mod ports;
pub mod temporal;

pub use identifiers::PolicyId;
pub use ports::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError,
};
pub use temporal::{Clock, FixedClock, SharedClock, SystemClock};
