//! Request generation.
//!
//! A [`RequestGraph`] is the set of concrete requests derived from one
//! operation. Each [`GraphPath`] carries a ground-truth flag: `is_valid`
//! requests are well-formed and address existing resources (as far as the
//! bindings allow), invalid ones violate exactly one parameter's contract.

use crate::error::{ContractError, ContractResult};
use crate::operation::{Operation, ParamKind, ParamLocation, Parameter};
use crate::request::{Request, RequestBody, SampleCache, ValueBindings};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::trace;

/// One generated request with its ground truth.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphPath {
    pub request: Request,
    pub is_valid: bool,
}

/// All requests generated for one operation.
#[derive(Debug, Clone, Default)]
pub struct RequestGraph {
    paths: Vec<GraphPath>,
}

impl RequestGraph {
    pub fn new(paths: Vec<GraphPath>) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &[GraphPath] {
        &self.paths
    }

    pub fn valid(&self) -> impl Iterator<Item = &Request> {
        self.paths.iter().filter(|p| p.is_valid).map(|p| &p.request)
    }

    pub fn invalid(&self) -> impl Iterator<Item = &Request> {
        self.paths.iter().filter(|p| !p.is_valid).map(|p| &p.request)
    }
}

impl IntoIterator for RequestGraph {
    type Item = GraphPath;
    type IntoIter = std::vec::IntoIter<GraphPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

/// Produces concrete requests for an operation.
pub trait RequestGenerator: Send + Sync {
    /// Every valid and invalid request for `operation`.
    fn generate_all(
        &self,
        operation: &Operation,
        cache: &mut SampleCache,
        bindings: &ValueBindings,
    ) -> RequestGraph;

    /// A single valid request, used for prerequisite lookups.
    fn generate_one_valid(
        &self,
        operation: &Operation,
        cache: &mut SampleCache,
        bindings: &ValueBindings,
    ) -> ContractResult<Request> {
        self.generate_all(operation, cache, bindings)
            .into_iter()
            .find(|p| p.is_valid)
            .map(|p| p.request)
            .ok_or_else(|| ContractError::NoValidRequest(operation.id.clone()))
    }
}

/// Generator driven by the declared parameter kinds.
///
/// Valid paths:
/// 1. the base request: first binding of every bound parameter, first
///    example of every other required parameter, optional ones omitted;
/// 2. one request per additional binding candidate;
/// 3. one request per example of each unbound optional query parameter.
///
/// Invalid paths: the base request with one parameter replaced by one of its
/// kind's malformed samples, and with each required query parameter omitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterGenerator;

impl ParameterGenerator {
    pub fn new() -> Self {
        Self
    }
}

type Assignment = Vec<Option<Value>>;

impl RequestGenerator for ParameterGenerator {
    fn generate_all(
        &self,
        operation: &Operation,
        cache: &mut SampleCache,
        bindings: &ValueBindings,
    ) -> RequestGraph {
        let params = &operation.parameters;

        let mut base: Assignment = Vec::with_capacity(params.len());
        for param in params {
            let value = match bindings.get(&param.name) {
                Some(candidates) => candidates.first().cloned(),
                None if param.required => cache.samples(param.kind).first().cloned(),
                None => None,
            };
            if value.is_none() && param.required {
                trace!(operation = %operation.id, parameter = %param.name, "No value for required parameter");
                return RequestGraph::default();
            }
            base.push(value);
        }

        let mut valid: Vec<Assignment> = vec![base.clone()];
        for (i, param) in params.iter().enumerate() {
            match bindings.get(&param.name) {
                Some(candidates) => {
                    for candidate in candidates.iter().skip(1) {
                        valid.push(replace(&base, i, candidate.clone()));
                    }
                }
                None if !param.required && param.location == ParamLocation::Query => {
                    for sample in cache.samples(param.kind).to_vec() {
                        valid.push(replace(&base, i, sample));
                    }
                }
                None => {}
            }
        }

        let mut invalid: Vec<(Assignment, Option<usize>)> = Vec::new();
        for (i, param) in params.iter().enumerate() {
            for sample in param.kind.invalid_samples() {
                invalid.push((replace(&base, i, sample), Some(i)));
            }
            if param.required && param.location == ParamLocation::Query {
                let mut omitted = base.clone();
                omitted[i] = None;
                invalid.push((omitted, None));
            }
        }

        let mut paths = Vec::with_capacity(valid.len() + invalid.len());
        for assignment in &valid {
            if let Ok(request) = build(operation, assignment, None) {
                paths.push(GraphPath {
                    request,
                    is_valid: true,
                });
            }
        }
        for (assignment, malformed) in &invalid {
            if let Ok(request) = build(operation, assignment, *malformed) {
                paths.push(GraphPath {
                    request,
                    is_valid: false,
                });
            }
        }
        trace!(operation = %operation.id, paths = paths.len(), "Generated request graph");
        RequestGraph::new(paths)
    }
}

fn replace(base: &Assignment, index: usize, value: Value) -> Assignment {
    let mut out = base.clone();
    out[index] = Some(value);
    out
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Turn an assignment into a request. `malformed` is the index of the
/// parameter carrying an invalid sample, if any.
fn build(
    operation: &Operation,
    assignment: &Assignment,
    malformed: Option<usize>,
) -> ContractResult<Request> {
    let mut path_values = BTreeMap::new();
    let mut query = Vec::new();
    let mut body = None;

    for (i, (param, value)) in operation.parameters.iter().zip(assignment).enumerate() {
        let Some(value) = value else { continue };
        match param.location {
            ParamLocation::Path => {
                path_values.insert(param.name.clone(), scalar(value));
            }
            ParamLocation::Query => push_query(&mut query, param, value),
            ParamLocation::Body => {
                body = Some(match value {
                    Value::String(raw) if malformed == Some(i) && param.kind == ParamKind::Json => {
                        RequestBody::Raw(raw.clone())
                    }
                    other => RequestBody::Json(other.clone()),
                });
            }
        }
    }

    Ok(Request {
        operation_id: operation.id.clone(),
        method: operation.method,
        path: operation.build_path(&path_values)?,
        query,
        body,
    })
}

/// Arrays are exploded into repeated `name=value` pairs.
fn push_query(query: &mut Vec<(String, String)>, param: &Parameter, value: &Value) {
    match value {
        Value::Array(items) => {
            for item in items {
                push_query(query, param, item);
            }
        }
        other => query.push((param.name.clone(), scalar(other))),
    }
}
