//! Conformance run orchestration.

use crate::case::{Harness, OperationTestCase};
use crate::config::ExecConf;
use crate::context::RunContext;
use crate::error::{EngineError, EngineResult};
use crate::report::RunReport;
use aastest_contract::{ApiContract, ParameterGenerator, RequestGenerator, Transport};
use aastest_profiles::{normalize_name, ProfileRegistry};
use aastest_types::{ConfusionMatrix, ResultNode};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Runs the operations of a profile against a server.
pub struct Orchestrator {
    registry: Arc<ProfileRegistry>,
    generator: Arc<dyn RequestGenerator>,
    transport: Arc<dyn Transport>,
    conf: ExecConf,
}

impl Orchestrator {
    /// Create an orchestrator using the [`ParameterGenerator`].
    pub fn new(registry: Arc<ProfileRegistry>, transport: Arc<dyn Transport>, conf: ExecConf) -> Self {
        Self {
            registry,
            generator: Arc::new(ParameterGenerator),
            transport,
            conf,
        }
    }

    /// Replace the request generator.
    pub fn with_generator(mut self, generator: Arc<dyn RequestGenerator>) -> Self {
        self.generator = generator;
        self
    }

    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    pub fn conf(&self) -> &ExecConf {
        &self.conf
    }

    /// Check `server` against `profile`.
    ///
    /// Configuration problems are returned as errors before any request is
    /// sent; everything observed on the wire ends up in the report.
    #[instrument(skip(self), fields(version = %self.conf.version, dry = self.conf.dry))]
    pub async fn run(&self, server: &str, profile: &str) -> EngineResult<RunReport> {
        let contract = self.contract()?;
        let suite = normalize_name(profile);
        let operation_ids = self.operation_ids(&contract, &suite)?;

        info!("Checking {} operations of {}", operation_ids.len(), suite);

        let mut root = ResultNode::new(format!("Checking compliance to {suite}"));
        root.append(self.check_server(server).await);
        if !root.ok() {
            warn!(server, "Server unreachable, skipping operations");
            return Ok(RunReport::new(suite, server, root, ConfusionMatrix::default()));
        }

        let harness = Harness {
            server,
            suite: &suite,
            contract: &contract,
            generator: self.generator.as_ref(),
            transport: self.transport.as_ref(),
        };
        let mut ctx = RunContext::new();

        for operation in contract.operations() {
            if !operation_ids.contains(&operation.id) {
                continue;
            }
            let mut result = ResultNode::new(format!("Checking {} ({})", operation.path, operation.id));
            if self.conf.dry {
                result.append(ResultNode::warning("Skipped due to dry run"));
                root.append(result);
                continue;
            }

            let mut case = OperationTestCase::new(harness, operation);

            let mut setup = ResultNode::new("Setup");
            match case.setup(&mut ctx, &mut setup).await {
                Ok(()) => setup.append(ResultNode::new(format!("Valid values: {}", case.bindings()))),
                Err(e) => {
                    warn!(operation = %operation.id, error = %e, "Setup failed");
                    setup.append(ResultNode::error(format!("Failed: {e}")));
                }
            }
            result.append(setup);

            if result.ok() {
                let mut negative = ResultNode::new("Syntactic tests");
                let mut positive = ResultNode::new("Semantic tests");
                case.execute(&mut ctx, &mut positive, &mut negative).await;
                result.append(negative);
                result.append(positive);
            }
            case.teardown();
            root.append(result);
        }

        root.append(summary(&ctx.matrix));

        info!(
            "Conformance run complete: {} / {} syntactic, {} / {} semantic",
            ctx.matrix.invalid_rejected,
            ctx.matrix.total_invalid(),
            ctx.matrix.valid_accepted,
            ctx.matrix.total_valid()
        );

        Ok(RunReport::new(suite, server, root, ctx.matrix))
    }

    fn contract(&self) -> EngineResult<ApiContract> {
        let version = &self.conf.version;
        ApiContract::builtin(version).ok_or_else(|| EngineError::UnknownVersion {
            version: version.clone(),
            supported: ApiContract::supported_versions().join(", "),
        })
    }

    fn operation_ids(&self, contract: &ApiContract, suite: &str) -> EngineResult<BTreeSet<String>> {
        let operation_ids = self.registry.resolve(suite)?;
        if let Some(unknown) = operation_ids.iter().find(|id| !contract.contains(id)) {
            return Err(EngineError::UnknownOperation(unknown.clone()));
        }
        Ok(operation_ids)
    }

    async fn check_server(&self, server: &str) -> ResultNode {
        let mut result = ResultNode::new(format!("Trying to reach {server}"));
        if self.conf.dry {
            result.append(ResultNode::warning("Skipped due to dry run"));
            return result;
        }
        match self.transport.probe(server).await {
            Ok(_) => result.append(ResultNode::new("OK")),
            Err(e) => result.append(ResultNode::error(format!("Failed to reach: {e}"))),
        }
        result
    }
}

fn summary(matrix: &ConfusionMatrix) -> ResultNode {
    let mut result = ResultNode::new("Summary");
    result.append(ResultNode::new(passed_line(
        "Syntactic",
        matrix.invalid_rejected,
        matrix.total_invalid(),
        matrix.syntactic_pass_rate(),
    )));
    result.append(ResultNode::new(passed_line(
        "Semantic",
        matrix.valid_accepted,
        matrix.total_valid(),
        matrix.semantic_pass_rate(),
    )));
    result
}

fn passed_line(kind: &str, passed: u64, total: u64, rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{kind} tests passed: {passed} / {total} ({:.1}%)", rate * 100.0),
        None => format!("{kind} tests passed: {passed} / {total}"),
    }
}
