//! Policy domain errors
//!
//! This module defines the error taxonomy of the policy use cases. Every
//! variant carries enough detail (field errors, missing identifier) for the
//! interface layer to translate it verbatim.

use thiserror::Error;

use core_kernel::{PolicyId, PortError};

use crate::validation::FieldError;

/// Functional key of [`PolicyError::InvalidInput`]
pub const INVALID_INPUT_KEY: &str = "invalid_input";

/// Functional key of [`PolicyError::NotFound`]
pub const INSURANCE_POLICY_NOT_FOUND_KEY: &str = "insurance_policy_not_found";

/// Functional key of every unexpected failure
pub const INTERNAL_ERROR_KEY: &str = "internal_error";

/// Broad classification used to pick a transport status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// The caller sent data that breaks a rule
    InvalidData,
    /// The caller referenced data that does not exist
    NotFoundData,
    /// Anything the caller cannot fix
    Internal,
}

/// Errors that can occur in the policy use cases
#[derive(Debug, Error)]
pub enum PolicyError {
    /// One or more fields failed validation
    #[error("Invalid input received: {} error(s) encountered", .field_errors.len())]
    InvalidInput {
        field_errors: Vec<FieldError>,
    },

    /// No policy exists with the given identifier
    #[error("The insurance policy with id {id} cannot be found")]
    NotFound {
        id: PolicyId,
    },

    /// The store failed
    #[error(transparent)]
    Port(#[from] PortError),
}

impl PolicyError {
    /// Creates a NotFound error for the given identifier
    pub fn not_found(id: PolicyId) -> Self {
        PolicyError::NotFound { id }
    }

    /// Creates an InvalidInput error carrying a single field error
    pub fn invalid_field(field_error: FieldError) -> Self {
        PolicyError::InvalidInput {
            field_errors: vec![field_error],
        }
    }

    /// Returns the key identifying the error kind on the wire
    pub fn functional_key(&self) -> &'static str {
        match self {
            PolicyError::InvalidInput { .. } => INVALID_INPUT_KEY,
            PolicyError::NotFound { .. } => INSURANCE_POLICY_NOT_FOUND_KEY,
            PolicyError::Port(_) => INTERNAL_ERROR_KEY,
        }
    }

    pub fn error_type(&self) -> ErrorType {
        match self {
            PolicyError::InvalidInput { .. } => ErrorType::InvalidData,
            PolicyError::NotFound { .. } => ErrorType::NotFoundData,
            PolicyError::Port(_) => ErrorType::Internal,
        }
    }

    /// Field errors carried by the error, empty for kinds without any
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            PolicyError::InvalidInput { field_errors } => field_errors,
            _ => &[],
        }
    }
}
