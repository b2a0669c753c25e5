//! Error types for the engine.

use aastest_contract::ContractError;
use aastest_profiles::ProfileError;
use thiserror::Error;

/// Configuration errors, raised before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// No contract exists for the requested API version.
    #[error("unknown version {version}, must be one of {supported}")]
    UnknownVersion { version: String, supported: String },

    /// Profile lookup or resolution failed.
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// A resolved operation id is missing from the contract.
    #[error("unknown operation {0}")]
    UnknownOperation(String),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Failure of a prerequisite lookup during test case setup.
///
/// Aborts only the execute phase of the affected operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// A prerequisite request did not return 200.
    #[error("cannot look up {what}, got status {status}")]
    UnexpectedStatus { what: String, status: u16 },

    /// The prerequisite response lacks a required field.
    #[error("cannot look up {path}: {reason}")]
    MissingField { path: String, reason: String },

    /// The prerequisite response body is not JSON.
    #[error("invalid response body: {0}")]
    InvalidBody(String),

    /// No submodel element of the required type exists on the server.
    #[error("no submodel element of type '{0}' found")]
    MissingElement(String),

    /// The prerequisite operation is not part of the contract.
    #[error("operation {0} is not part of the contract")]
    UnknownOperation(String),

    #[error(transparent)]
    Contract(#[from] ContractError),

    /// The prerequisite request could not be sent.
    #[error("request failed: {0}")]
    Transport(String),
}

/// Result type for setup steps.
pub type SetupResult<T> = Result<T, SetupError>;
