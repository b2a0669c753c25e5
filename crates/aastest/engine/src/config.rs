//! Execution configuration.

use aastest_contract::{TransportConfig, DEFAULT_VERSION};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for one conformance run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecConf {
    /// Resolve and report, but send no request.
    pub dry: bool,

    /// Verify TLS certificates of the server under test.
    pub verify: bool,

    /// Timeout for individual requests
    pub timeout: Duration,

    /// API version whose contract is used.
    pub version: String,
}

impl Default for ExecConf {
    fn default() -> Self {
        Self {
            dry: false,
            verify: true,
            timeout: Duration::from_secs(30),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl ExecConf {
    /// Transport settings derived from this configuration.
    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig {
            timeout: self.timeout,
            verify: self.verify,
        }
    }
}
