//! CLI configuration

use crate::error::{CliError, CliResult};
use aastest_profiles::ProfileRegistry;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,

    /// Verify TLS certificates of the server under test
    pub verify_tls: Option<bool>,

    /// API version used when `--version` is not given
    pub default_version: Option<String>,

    /// YAML profile table replacing the built-in one
    pub profiles_file: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from file
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: CliConfig =
                toml::from_str(&contents).map_err(|e| CliError::Config(e.to_string()))?;
            Ok(config)
        } else {
            Ok(CliConfig::default())
        }
    }

    /// Get the default configuration file path
    fn default_config_path() -> CliResult<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| CliError::Config("Cannot find config directory".into()))?;
        Ok(config_dir.join("aastest").join("config.toml"))
    }

    /// Profile registry from `profiles_file`, or the built-in table
    pub fn registry(&self) -> CliResult<ProfileRegistry> {
        match &self.profiles_file {
            Some(path) => {
                let contents = std::fs::read_to_string(path)?;
                Ok(ProfileRegistry::from_yaml_str(&contents)?)
            }
            None => Ok(ProfileRegistry::builtin()),
        }
    }
}
