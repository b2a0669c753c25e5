//! Concrete requests and the value tables used to build them.

use crate::operation::{Method, ParamKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Payload of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RequestBody {
    Json(Value),
    /// Sent verbatim with a JSON content type; used for malformed payloads.
    Raw(String),
}

/// One concrete request produced by a [`crate::RequestGenerator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub operation_id: String,
    pub method: Method,
    /// Path with all placeholders substituted.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl Request {
    /// Whether the query string carries `name`.
    pub fn has_query(&self, name: &str) -> bool {
        self.query.iter().any(|(k, _)| k == name)
    }

    /// Path plus encoded query string.
    pub fn target(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish();
        format!("{}?{}", self.path, query)
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.target())
    }
}

/// Parameter name → ordered candidate values mined from the server.
///
/// The generator prefers these over its own examples so that "valid"
/// requests address resources that actually exist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueBindings(BTreeMap<String, Vec<Value>>);

impl ValueBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the candidates of `name`.
    pub fn set(&mut self, name: impl Into<String>, values: Vec<Value>) {
        self.0.insert(name.into(), values);
    }

    /// Builder form of [`ValueBindings::set`].
    pub fn with(mut self, name: impl Into<String>, values: Vec<Value>) -> Self {
        self.set(name, values);
        self
    }

    pub fn get(&self, name: &str) -> Option<&[Value]> {
        self.0.get(name).map(Vec::as_slice).filter(|v| !v.is_empty())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<Value>)> {
        self.0.iter()
    }
}

impl fmt::Display for ValueBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(&self.0) {
            Ok(s) => f.write_str(&s),
            Err(_) => write!(f, "{:?}", self.0),
        }
    }
}

/// Run-scoped cache of example values per parameter kind.
#[derive(Debug, Default)]
pub struct SampleCache {
    samples: HashMap<ParamKind, Vec<Value>>,
}

impl SampleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Valid example values for `kind`, derived on first use.
    pub fn samples(&mut self, kind: ParamKind) -> &[Value] {
        self.samples
            .entry(kind)
            .or_insert_with(|| kind.valid_samples())
    }

    /// Override the examples used for `kind`.
    pub fn insert(&mut self, kind: ParamKind, values: Vec<Value>) {
        self.samples.insert(kind, values);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_target_encodes_query() {
        let request = Request {
            operation_id: "GetAllAssetAdministrationShells".into(),
            method: Method::Get,
            path: "/shells".into(),
            query: vec![
                ("limit".into(), "1".into()),
                ("idShort".into(), "a b".into()),
            ],
            body: None,
        };
        assert_eq!(request.target(), "/shells?limit=1&idShort=a+b");
        assert_eq!(request.to_string(), "GET /shells?limit=1&idShort=a+b");
        assert!(request.has_query("limit"));
        assert!(!request.has_query("cursor"));
    }

    #[test]
    fn test_bindings_ignore_empty_candidates() {
        let bindings = ValueBindings::new()
            .with("limit", vec![json!(1)])
            .with("cursor", vec![]);
        assert!(bindings.contains("limit"));
        assert!(!bindings.contains("cursor"));
        assert_eq!(bindings.to_string(), r#"{"cursor":[],"limit":[1]}"#);
    }

    #[test]
    fn test_sample_cache_memoizes() {
        let mut cache = SampleCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.samples(ParamKind::Level).len(), 2);
        cache.insert(ParamKind::Level, vec![json!("core")]);
        assert_eq!(cache.samples(ParamKind::Level), &[json!("core")]);
        assert_eq!(cache.len(), 1);
    }
}
