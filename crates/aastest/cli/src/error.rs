//! CLI error types

use aastest_contract::TransportError;
use aastest_engine::EngineError;
use aastest_profiles::ProfileError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid run configuration (version, profile, operation)
    #[error("{0}")]
    Engine(#[from] EngineError),

    /// Profile table error
    #[error("{0}")]
    Profile(#[from] ProfileError),

    /// HTTP client setup error
    #[error("{0}")]
    Transport(#[from] TransportError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
