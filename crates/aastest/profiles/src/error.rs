//! Error types for profile resolution.

use thiserror::Error;

/// Errors raised while loading or resolving profiles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// The requested name is not a key of the profile table.
    #[error("unknown profile '{name}', must be one of:\n{available}")]
    UnknownProfile { name: String, available: String },

    /// The name is reachable from itself.
    #[error("profile '{name}' is cyclic: {}", cycle.join(" -> "))]
    CyclicProfile { name: String, cycle: Vec<String> },

    /// A profile table could not be parsed.
    #[error("invalid profile table: {0}")]
    InvalidTable(String),
}

/// Result type for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;
