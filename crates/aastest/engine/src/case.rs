//! Per-operation test cases.
//!
//! An [`OperationTestCase`] runs three phases against one operation:
//!
//! - **setup** mines server-resident values (identifiers, element paths)
//!   that requests for the operation must address;
//! - **execute** sends every generated request and classifies the
//!   response against the request's ground truth;
//! - **teardown** releases whatever setup created.
//!
//! How setup mines and how execute classifies depends on the
//! [`TestCaseKind`] registered for the operation id.

use crate::context::RunContext;
use crate::elements::{self, ElementPaths, ALL_TYPES, FILE};
use crate::error::{SetupError, SetupResult};
use crate::lookup::Fragment::{Index, Key};
use crate::lookup::{lookup, lookup_str};
use aastest_contract::{
    b64url, ApiContract, HttpResponse, Operation, Request, RequestGenerator, Transport,
    ValueBindings,
};
use aastest_types::ResultNode;
use serde_json::{json, Value};
use tracing::{debug, trace};

const LIST_SHELLS: &str = "GetAllAssetAdministrationShells";
const LIST_ELEMENTS: &str = "GetAllSubmodelElements_AasRepository";
const PREVIEW_LEN: usize = 300;

/// Mining and classification strategy of a test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestCaseKind {
    /// Generated requests only.
    Default,
    /// Page size, cursor and idShort of a listing call.
    Listing,
    /// Identifier of the first shell.
    ById,
    /// Identifiers of the first shell and its first submodel.
    BySuperpath,
    /// As [`TestCaseKind::BySuperpath`], then one idShortPath per element
    /// type, each exercised separately.
    ElementBySuperpath,
    /// As [`TestCaseKind::BySuperpath`], then the paths of `File` elements.
    FileBySuperpath,
    /// Shell and submodel identifier lists.
    Serialization,
    /// Checks that the advertised profiles contain the suite.
    SelfDescription,
}

impl TestCaseKind {
    /// Kind registered for `operation_id`; [`TestCaseKind::Default`] if none.
    pub fn for_operation(operation_id: &str) -> Self {
        match operation_id {
            "GetAllAssetAdministrationShells" | "GetAllAssetAdministrationShells-Reference" => {
                Self::Listing
            }

            "GetAssetAdministrationShellById"
            | "GetAssetAdministrationShellById-Reference_AasRepository"
            | "GetAllSubmodelReferences_AasRepository"
            | "GetAssetInformation_AasRepository"
            | "GetThumbnail_AasRepository" => Self::ById,

            "GetSubmodelById_AasRepository"
            | "GetSubmodelById-Metadata_AasRepository"
            | "GetSubmodelById-ValueOnly_AasRepository"
            | "GetSubmodelById-Reference_AasRepository"
            | "GetSubmodelById-Path_AasRepository"
            | "GetAllSubmodelElements_AasRepository"
            | "GetAllSubmodelElements-Metadata_AasRepository"
            | "GetAllSubmodelElements-ValueOnly_AasRepository"
            | "GetAllSubmodelElements-Reference_AasRepository"
            | "GetAllSubmodelElements-Path_AasRepository" => Self::BySuperpath,

            "GetSubmodelElementByPath_AasRepository"
            | "GetSubmodelElementByPath-Metadata_AasRepository"
            | "GetSubmodelElementByPath-ValueOnly_AasRepository"
            | "GetSubmodelElementByPath-Reference_AasRepository"
            | "GetSubmodelElementByPath-Path_AasRepository" => Self::ElementBySuperpath,

            "GetFileByPath_AasRepository" => Self::FileBySuperpath,
            "GenerateSerializationByIds" => Self::Serialization,
            "GetSelfDescription" => Self::SelfDescription,
            _ => Self::Default,
        }
    }
}

/// Status class a response must fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expectation {
    Success,
    ClientError,
}

impl Expectation {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "2xx",
            Self::ClientError => "4xx",
        }
    }
}

/// Collaborators and run parameters shared by every test case of a run.
#[derive(Clone, Copy)]
pub struct Harness<'a> {
    pub server: &'a str,
    /// Normalized name of the profile under test.
    pub suite: &'a str,
    pub contract: &'a ApiContract,
    pub generator: &'a dyn RequestGenerator,
    pub transport: &'a dyn Transport,
}

/// Node for one sent request.
pub fn invoke_node(request: &Request) -> ResultNode {
    ResultNode::new(format!("Invoke: {request}"))
}

/// Test case for a single operation.
pub struct OperationTestCase<'a> {
    harness: Harness<'a>,
    operation: &'a Operation,
    kind: TestCaseKind,
    bindings: ValueBindings,
    elements: ElementPaths,
}

impl<'a> OperationTestCase<'a> {
    /// Test case with the kind registered for the operation.
    pub fn new(harness: Harness<'a>, operation: &'a Operation) -> Self {
        Self::with_kind(harness, operation, TestCaseKind::for_operation(&operation.id))
    }

    pub fn with_kind(harness: Harness<'a>, operation: &'a Operation, kind: TestCaseKind) -> Self {
        Self {
            harness,
            operation,
            kind,
            bindings: ValueBindings::new(),
            elements: ElementPaths::default(),
        }
    }

    pub fn kind(&self) -> TestCaseKind {
        self.kind
    }

    pub fn operation(&self) -> &Operation {
        self.operation
    }

    /// Values mined during setup.
    pub fn bindings(&self) -> &ValueBindings {
        &self.bindings
    }

    /// Mine the values the operation's requests need.
    ///
    /// Every prerequisite request is recorded in `result`.
    pub async fn setup(&mut self, ctx: &mut RunContext, result: &mut ResultNode) -> SetupResult<()> {
        self.bindings = match self.kind {
            TestCaseKind::Default | TestCaseKind::SelfDescription => ValueBindings::new(),
            TestCaseKind::Listing => {
                let data = self.list_shells(ctx, result, "idShort").await?;
                ValueBindings::new()
                    .with("limit", vec![json!(1)])
                    .with(
                        "cursor",
                        vec![lookup(&data, &[Key("paging_metadata"), Key("cursor")])?.clone()],
                    )
                    .with(
                        "idShort",
                        vec![lookup(&data, &[Key("result"), Index(0), Key("idShort")])?.clone()],
                    )
            }
            TestCaseKind::ById => {
                let data = self.list_shells(ctx, result, "aasIdentifier").await?;
                ValueBindings::new().with("aasIdentifier", vec![Value::String(shell_id(&data)?)])
            }
            TestCaseKind::BySuperpath => {
                let data = self.list_shells(ctx, result, "submodelIdentifier").await?;
                superpath_bindings(&data)?
            }
            TestCaseKind::ElementBySuperpath => {
                let (bindings, elements) = self.discover_elements(ctx, result).await?;
                self.elements = elements;
                bindings.with(
                    "idShortPath",
                    self.elements
                        .representatives()
                        .into_iter()
                        .map(Value::String)
                        .collect(),
                )
            }
            TestCaseKind::FileBySuperpath => {
                let (bindings, elements) = self.discover_elements(ctx, result).await?;
                let files: Vec<Value> = elements
                    .of_type(FILE)
                    .iter()
                    .cloned()
                    .map(Value::String)
                    .collect();
                if files.is_empty() {
                    return Err(SetupError::MissingElement(FILE.to_string()));
                }
                self.elements = elements;
                bindings.with("idShortPath", files)
            }
            TestCaseKind::Serialization => {
                let data = self.list_shells(ctx, result, "submodelIdentifier").await?;
                let (aas, submodel) = (shell_id(&data)?, submodel_id(&data)?);
                ValueBindings::new()
                    .with("aasIds", vec![json!([aas])])
                    .with("submodelIds", vec![json!([submodel])])
            }
        };
        debug!(operation = %self.operation.id, bindings = %self.bindings, "Setup complete");
        Ok(())
    }

    /// Send every generated request and classify the responses.
    ///
    /// Valid requests go to `positive` (semantic tests), invalid ones to
    /// `negative` (syntactic tests).
    pub async fn execute(
        &mut self,
        ctx: &mut RunContext,
        positive: &mut ResultNode,
        negative: &mut ResultNode,
    ) {
        match self.kind {
            TestCaseKind::ElementBySuperpath => self.execute_per_element(ctx, positive, negative).await,
            _ => {
                let graph = self.harness.generator.generate_all(
                    self.operation,
                    &mut ctx.sample_cache,
                    &self.bindings,
                );
                for path in graph {
                    if path.is_valid {
                        let response = self.semantic_test(ctx, &path.request, positive).await;
                        if self.kind == TestCaseKind::SelfDescription {
                            if let Some(response) = response {
                                self.check_profiles(&response, positive);
                            }
                        }
                    } else {
                        self.syntactic_test(ctx, &path.request, negative).await;
                    }
                }
            }
        }
    }

    /// Release what setup created. No current kind creates resources.
    pub fn teardown(&mut self) {
        trace!(operation = %self.operation.id, "Teardown");
    }

    async fn execute_per_element(
        &mut self,
        ctx: &mut RunContext,
        positive: &mut ResultNode,
        negative: &mut ResultNode,
    ) {
        let graph =
            self.harness
                .generator
                .generate_all(self.operation, &mut ctx.sample_cache, &self.bindings);
        for path in graph.invalid() {
            self.syntactic_test(ctx, path, negative).await;
        }

        for model_type in ALL_TYPES {
            let mut node = ResultNode::new(format!("Checking {model_type}"));
            match self.elements.representative(model_type) {
                None => node.append(ResultNode::warning("No such element present")),
                Some(id_short_path) => {
                    let bindings = self
                        .bindings
                        .clone()
                        .with("idShortPath", vec![json!(id_short_path)]);
                    let graph = self.harness.generator.generate_all(
                        self.operation,
                        &mut ctx.sample_cache,
                        &bindings,
                    );
                    for request in graph.valid() {
                        let expect = if elements::is_semantic(model_type, request) {
                            Expectation::Success
                        } else {
                            Expectation::ClientError
                        };
                        self.classify(ctx, request, true, expect, &mut node).await;
                    }
                }
            }
            positive.append(node);
        }
    }

    /// Expect a success status for a valid request.
    pub async fn semantic_test(
        &self,
        ctx: &mut RunContext,
        request: &Request,
        result: &mut ResultNode,
    ) -> Option<HttpResponse> {
        self.classify(ctx, request, true, Expectation::Success, result)
            .await
    }

    /// Expect a client error status for an invalid request.
    pub async fn syntactic_test(
        &self,
        ctx: &mut RunContext,
        request: &Request,
        result: &mut ResultNode,
    ) -> Option<HttpResponse> {
        self.classify(ctx, request, false, Expectation::ClientError, result)
            .await
    }

    /// Send `request`, check its status against `expect` and count it
    /// under `is_valid`.
    ///
    /// The request counts as accepted when a success was expected and
    /// received, or when a client error was expected but not received.
    async fn classify(
        &self,
        ctx: &mut RunContext,
        request: &Request,
        is_valid: bool,
        expect: Expectation,
        result: &mut ResultNode,
    ) -> Option<HttpResponse> {
        let mut node = invoke_node(request);
        let response = self.send(request, &mut node).await;
        if let Some(response) = &response {
            let status = response.status;
            let body = response.preview(PREVIEW_LEN);
            let passed = match expect {
                Expectation::Success => status < 400,
                Expectation::ClientError => (400..500).contains(&status),
            };
            node.append(if status >= 500 {
                ResultNode::critical(format!("Server crashed with code {status}: {body}"))
            } else if passed {
                ResultNode::new(format!("Ok ({status}): {body}"))
            } else {
                ResultNode::error(format!(
                    "Got status code {status}, but expected {}: {body}",
                    expect.class()
                ))
            });
            let accepted = match expect {
                Expectation::Success => passed,
                Expectation::ClientError => !passed,
            };
            ctx.matrix.add(is_valid, accepted);
        }
        result.append(node);
        response
    }

    async fn send(&self, request: &Request, node: &mut ResultNode) -> Option<HttpResponse> {
        match self.harness.transport.send(self.harness.server, request).await {
            Ok(response) => Some(response),
            Err(e) => {
                debug!(request = %request, error = %e, "Request failed");
                node.append(ResultNode::error(format!("Request failed: {e}")));
                None
            }
        }
    }

    fn check_profiles(&self, response: &HttpResponse, result: &mut ResultNode) {
        if response.status >= 400 {
            return;
        }
        let suite = self.harness.suite;
        match advertised_profiles(response) {
            Ok(profiles) if profiles.iter().any(|p| p == suite) => {}
            Ok(_) => result.append(ResultNode::error(format!(
                "Suite {suite} not part of profiles"
            ))),
            Err(reason) => result.append(ResultNode::error(format!(
                "Cannot read profiles: {reason}"
            ))),
        }
    }

    /// First page (size 1) of the shell listing.
    async fn list_shells(
        &self,
        ctx: &mut RunContext,
        result: &mut ResultNode,
        what: &str,
    ) -> SetupResult<Value> {
        let bindings = ValueBindings::new().with("limit", vec![json!(1)]);
        self.fetch(ctx, result, LIST_SHELLS, &bindings, what).await
    }

    async fn discover_elements(
        &self,
        ctx: &mut RunContext,
        result: &mut ResultNode,
    ) -> SetupResult<(ValueBindings, ElementPaths)> {
        let data = self.list_shells(ctx, result, "submodelIdentifier").await?;
        let bindings = superpath_bindings(&data)?;
        let data = self
            .fetch(ctx, result, LIST_ELEMENTS, &bindings, "idShortPath")
            .await?;
        let elements = ElementPaths::collect(lookup(&data, &[Key("result")])?)?;
        Ok((bindings, elements))
    }

    /// Send one valid request for `operation_id` and return its JSON body.
    async fn fetch(
        &self,
        ctx: &mut RunContext,
        result: &mut ResultNode,
        operation_id: &str,
        bindings: &ValueBindings,
        what: &str,
    ) -> SetupResult<Value> {
        let operation = self
            .harness
            .contract
            .operation(operation_id)
            .ok_or_else(|| SetupError::UnknownOperation(operation_id.to_string()))?;
        let request =
            self.harness
                .generator
                .generate_one_valid(operation, &mut ctx.sample_cache, bindings)?;
        result.append(invoke_node(&request));
        let response = self
            .harness
            .transport
            .send(self.harness.server, &request)
            .await
            .map_err(|e| SetupError::Transport(e.to_string()))?;
        if response.status != 200 {
            return Err(SetupError::UnexpectedStatus {
                what: what.to_string(),
                status: response.status,
            });
        }
        response
            .json()
            .map_err(|e| SetupError::InvalidBody(e.to_string()))
    }
}

fn shell_id(data: &Value) -> SetupResult<String> {
    Ok(b64url(lookup_str(data, &[Key("result"), Index(0), Key("id")])?))
}

fn submodel_id(data: &Value) -> SetupResult<String> {
    Ok(b64url(lookup_str(
        data,
        &[
            Key("result"),
            Index(0),
            Key("submodels"),
            Index(0),
            Key("keys"),
            Index(0),
            Key("value"),
        ],
    )?))
}

fn superpath_bindings(data: &Value) -> SetupResult<ValueBindings> {
    Ok(ValueBindings::new()
        .with("aasIdentifier", vec![Value::String(shell_id(data)?)])
        .with("submodelIdentifier", vec![Value::String(submodel_id(data)?)]))
}

/// The `Profiles` list of a self-description; `profiles` is accepted too.
fn advertised_profiles(response: &HttpResponse) -> Result<Vec<String>, String> {
    let data: Value = response.json().map_err(|e| e.to_string())?;
    let profiles = data
        .get("Profiles")
        .or_else(|| data.get("profiles"))
        .ok_or_else(|| "key 'Profiles' does not exist".to_string())?
        .as_array()
        .ok_or_else(|| "'Profiles' should be an array".to_string())?;
    Ok(profiles
        .iter()
        .filter_map(|p| p.as_str().map(str::to_string))
        .collect())
}
