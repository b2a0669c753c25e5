//! Error types for the contract collaborator.

use thiserror::Error;

/// Errors raised while building requests from the contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// A path template placeholder has no value.
    #[error("missing value for path parameter '{parameter}' of {operation}")]
    MissingPathParameter { operation: String, parameter: String },

    /// No valid request can be formed for the operation.
    #[error("cannot generate a valid request for {0}")]
    NoValidRequest(String),
}

/// Result type for contract operations.
pub type ContractResult<T> = Result<T, ContractError>;

/// Errors raised by a [`crate::Transport`].
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP client error (connection refused, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server address and request path do not form a valid URL.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Other(String),
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;
