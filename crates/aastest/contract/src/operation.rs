//! Operation descriptors.

use crate::encoding::b64url;
use crate::error::{ContractError, ContractResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fmt;

/// HTTP method of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamLocation {
    Path,
    Query,
    Body,
}

/// Value domain of a parameter, which determines its example values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamKind {
    /// A base64url-encoded identifier.
    Identifier,
    /// A list of base64url-encoded identifiers (exploded query parameter).
    IdentifierList,
    /// Dot/bracket separated path of idShorts.
    IdShortPath,
    IdShort,
    /// Page size.
    Limit,
    /// Opaque paging cursor handed out by the server.
    Cursor,
    /// `deep` or `core`.
    Level,
    /// `withBlobValue` or `withoutBlobValue`.
    Extent,
    Flag,
    Text,
    /// JSON request payload.
    Json,
}

const EXAMPLE_ID: &str = "https://example.com/ids/aastest/0000";
const INVALID_TOKEN: &str = "@@@";

impl ParamKind {
    /// Example values the server must accept syntactically.
    pub fn valid_samples(&self) -> Vec<Value> {
        match self {
            Self::Identifier => vec![json!(b64url(EXAMPLE_ID))],
            Self::IdentifierList => vec![json!([b64url(EXAMPLE_ID)])],
            Self::IdShortPath => vec![json!("ExampleProperty")],
            Self::IdShort => vec![json!("ExampleShell")],
            Self::Limit => vec![json!(10)],
            Self::Cursor => vec![],
            Self::Level => vec![json!("deep"), json!("core")],
            Self::Extent => vec![json!("withBlobValue"), json!("withoutBlobValue")],
            Self::Flag => vec![json!(true), json!(false)],
            Self::Text => vec![json!("example")],
            Self::Json => vec![json!({})],
        }
    }

    /// Malformed values the server must reject with 4xx.
    pub fn invalid_samples(&self) -> Vec<Value> {
        match self {
            Self::Identifier | Self::Cursor => vec![json!(INVALID_TOKEN)],
            Self::IdentifierList => vec![json!([INVALID_TOKEN])],
            Self::IdShortPath => vec![json!("..invalid")],
            Self::Limit => vec![json!(-1), json!("one")],
            Self::Level | Self::Extent => vec![json!("invalid")],
            Self::Flag => vec![json!("maybe")],
            Self::Json => vec![json!("{ not json")],
            Self::IdShort | Self::Text => vec![],
        }
    }
}

/// One formal parameter of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub location: ParamLocation,
    pub required: bool,
    pub kind: ParamKind,
}

impl Parameter {
    /// A path parameter; always required.
    pub fn path(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            location: ParamLocation::Path,
            required: true,
            kind,
        }
    }

    /// An optional query parameter.
    pub fn query(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            location: ParamLocation::Query,
            required: false,
            kind,
        }
    }

    /// A required JSON request body.
    pub fn body() -> Self {
        Self {
            name: "body".to_string(),
            location: ParamLocation::Body,
            required: true,
            kind: ParamKind::Json,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// One endpoint + method pair of the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub id: String,
    pub method: Method,
    /// Path template with `{name}` placeholders.
    pub path: String,
    pub parameters: Vec<Parameter>,
}

impl Operation {
    pub fn new(id: impl Into<String>, method: Method, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            method,
            path: path.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Substitute every `{name}` placeholder of the path template.
    pub fn build_path(&self, values: &BTreeMap<String, String>) -> ContractResult<String> {
        let mut out = String::with_capacity(self.path.len());
        let mut rest = self.path.as_str();
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            let name = &rest[start + 1..start + len];
            let value = values
                .get(name)
                .ok_or_else(|| ContractError::MissingPathParameter {
                    operation: self.id.clone(),
                    parameter: name.to_string(),
                })?;
            out.push_str(&rest[..start]);
            out.push_str(value);
            rest = &rest[start + len + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn superpath_op() -> Operation {
        Operation::new(
            "GetSubmodelById_AasRepository",
            Method::Get,
            "/shells/{aasIdentifier}/submodels/{submodelIdentifier}",
        )
        .with_parameter(Parameter::path("aasIdentifier", ParamKind::Identifier))
        .with_parameter(Parameter::path("submodelIdentifier", ParamKind::Identifier))
    }

    #[test]
    fn test_build_path() {
        let values = BTreeMap::from([
            ("aasIdentifier".to_string(), "YQ".to_string()),
            ("submodelIdentifier".to_string(), "Yg".to_string()),
        ]);
        assert_eq!(
            superpath_op().build_path(&values).unwrap(),
            "/shells/YQ/submodels/Yg"
        );
    }

    #[test]
    fn test_build_path_missing_value() {
        let values = BTreeMap::from([("aasIdentifier".to_string(), "YQ".to_string())]);
        let err = superpath_op().build_path(&values).unwrap_err();
        assert_eq!(
            err,
            ContractError::MissingPathParameter {
                operation: "GetSubmodelById_AasRepository".into(),
                parameter: "submodelIdentifier".into(),
            }
        );
    }

    #[test]
    fn test_literal_dollar_segments_survive() {
        let op = Operation::new("X", Method::Get, "/shells/{aasIdentifier}/$reference");
        let values = BTreeMap::from([("aasIdentifier".to_string(), "YQ".to_string())]);
        assert_eq!(op.build_path(&values).unwrap(), "/shells/YQ/$reference");
    }

    #[test]
    fn test_every_invalid_sample_differs_from_valid() {
        let kinds = [
            ParamKind::Identifier,
            ParamKind::IdentifierList,
            ParamKind::IdShortPath,
            ParamKind::Limit,
            ParamKind::Level,
            ParamKind::Extent,
            ParamKind::Flag,
            ParamKind::Json,
        ];
        for kind in kinds {
            let valid = kind.valid_samples();
            for invalid in kind.invalid_samples() {
                assert!(!valid.contains(&invalid), "{kind:?}");
            }
        }
    }
}
