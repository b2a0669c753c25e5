//! API conformance command

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{print_reports, OutputFormat};
use aastest_contract::{HttpTransport, DEFAULT_VERSION};
use aastest_engine::{ExecConf, Orchestrator};
use aastest_profiles::ProfileRegistry;
use clap::Args;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Arguments of `aastest api`
#[derive(Debug, Args)]
pub struct ApiArgs {
    /// Base URL of the server under test, e.g. http://localhost:5001/api/v3.0
    pub server: String,

    /// Profile to check; every known profile when omitted
    #[arg(short, long, env = "AASTEST_PROFILE")]
    pub profile: Option<String>,

    /// API version of the contract
    #[arg(long = "version")]
    pub api_version: Option<String>,

    /// Resolve and report without sending any request
    #[arg(long)]
    pub dry: bool,

    /// Do not verify TLS certificates
    #[arg(long)]
    pub no_verify: bool,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl ApiArgs {
    /// Flags take precedence over the configuration file
    pub fn exec_conf(&self, config: &CliConfig) -> ExecConf {
        ExecConf {
            dry: self.dry,
            verify: !self.no_verify && config.verify_tls.unwrap_or(true),
            timeout: Duration::from_secs(
                self.timeout
                    .or(config.timeout_seconds)
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            version: self
                .api_version
                .clone()
                .or_else(|| config.default_version.clone())
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        }
    }
}

/// Run the checks; returns whether every report is ok
pub async fn execute(
    args: ApiArgs,
    config: &CliConfig,
    registry: ProfileRegistry,
    format: OutputFormat,
) -> CliResult<bool> {
    let conf = args.exec_conf(config);
    let profiles: Vec<String> = match &args.profile {
        Some(profile) => vec![profile.clone()],
        None => registry.profile_names().into_iter().map(String::from).collect(),
    };

    let transport = HttpTransport::new(conf.transport_config())?;
    let orchestrator = Orchestrator::new(Arc::new(registry), Arc::new(transport), conf);

    let mut reports = Vec::with_capacity(profiles.len());
    for profile in &profiles {
        info!("Checking {} against {}", args.server, profile);
        reports.push(orchestrator.run(&args.server, profile).await?);
    }

    print_reports(&reports, format)?;
    Ok(reports.iter().all(|r| r.ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ApiArgs {
        ApiArgs {
            server: "http://localhost".into(),
            profile: None,
            api_version: None,
            dry: false,
            no_verify: false,
            timeout: None,
        }
    }

    #[test]
    fn test_defaults_without_config() {
        let conf = args().exec_conf(&CliConfig::default());
        assert_eq!(conf, ExecConf::default());
    }

    #[test]
    fn test_flags_override_config() {
        let config = CliConfig {
            timeout_seconds: Some(5),
            verify_tls: Some(true),
            default_version: Some("3.0".into()),
            profiles_file: None,
        };
        let mut args = args();
        args.timeout = Some(9);
        args.no_verify = true;
        args.api_version = Some("3.1".into());

        let conf = args.exec_conf(&config);
        assert_eq!(conf.timeout, Duration::from_secs(9));
        assert!(!conf.verify);
        assert_eq!(conf.version, "3.1");
    }

    #[test]
    fn test_config_applies_without_flags() {
        let config = CliConfig {
            timeout_seconds: Some(5),
            verify_tls: Some(false),
            ..CliConfig::default()
        };
        let conf = args().exec_conf(&config);
        assert_eq!(conf.timeout, Duration::from_secs(5));
        assert!(!conf.verify);
    }
}
