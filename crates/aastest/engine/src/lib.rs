//! Test orchestration engine for AAS HTTP API profile conformance.
//!
//! Given a server address and a profile name, the [`Orchestrator`]
//! resolves the profile into operation ids, probes the server and runs one
//! [`OperationTestCase`] per operation. Each case mines real identifiers
//! from the server, sends well-formed and malformed requests and classifies
//! the responses:
//!
//! - **semantic tests** (valid requests) expect a status below 400;
//! - **syntactic tests** (invalid requests) expect a 4xx status;
//! - any 5xx status is recorded as a server crash.
//!
//! Results are collected in a [`ResultNode`](aastest_types::ResultNode)
//! tree and counted in a [`ConfusionMatrix`](aastest_types::ConfusionMatrix).
//!
//! # Example
//!
//! ```rust,ignore
//! use aastest_contract::HttpTransport;
//! use aastest_engine::{ExecConf, Orchestrator};
//! use aastest_profiles::ProfileRegistry;
//! use std::sync::Arc;
//!
//! let conf = ExecConf::default();
//! let transport = HttpTransport::new(conf.transport_config())?;
//! let orchestrator = Orchestrator::new(Arc::new(ProfileRegistry::builtin()), Arc::new(transport), conf);
//! let report = orchestrator.run("http://localhost:5001/api/v3.0", "Description API").await?;
//! println!("{}", report.to_text());
//! ```

pub mod case;
pub mod config;
pub mod context;
pub mod elements;
pub mod error;
pub mod lookup;
pub mod orchestrator;
pub mod report;

pub use case::{Harness, OperationTestCase, TestCaseKind};
pub use config::ExecConf;
pub use context::RunContext;
pub use error::{EngineError, EngineResult, SetupError, SetupResult};
pub use orchestrator::Orchestrator;
pub use report::RunReport;
