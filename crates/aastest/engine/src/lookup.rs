//! Path lookups into JSON response bodies.

use crate::error::{SetupError, SetupResult};
use serde_json::Value;
use std::fmt;

/// One step of a lookup path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    Key(&'a str),
    Index(usize),
}

impl fmt::Display for Fragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Key(key) => f.write_str(key),
            Fragment::Index(index) => write!(f, "{index}"),
        }
    }
}

fn stringify(path: &[Fragment<'_>]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/")
}

fn missing(path: &[Fragment<'_>], reason: impl Into<String>) -> SetupError {
    SetupError::MissingField {
        path: stringify(path),
        reason: reason.into(),
    }
}

/// Follow `path` into `value`.
pub fn lookup<'v>(value: &'v Value, path: &[Fragment<'_>]) -> SetupResult<&'v Value> {
    let mut current = value;
    for fragment in path {
        current = match *fragment {
            Fragment::Key(key) => current
                .as_object()
                .ok_or_else(|| missing(path, "should be an object"))?
                .get(key)
                .ok_or_else(|| missing(path, format!("key '{key}' does not exist")))?,
            Fragment::Index(index) => current
                .as_array()
                .ok_or_else(|| missing(path, "should be an array"))?
                .get(index)
                .ok_or_else(|| missing(path, "array too short"))?,
        };
    }
    Ok(current)
}

/// Follow `path` into `value` and require a string.
pub fn lookup_str<'v>(value: &'v Value, path: &[Fragment<'_>]) -> SetupResult<&'v str> {
    lookup(value, path)?
        .as_str()
        .ok_or_else(|| missing(path, "should be a string"))
}

#[cfg(test)]
mod tests {
    use super::Fragment::{Index, Key};
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_lookup() {
        let data = json!({"result": [{"id": "urn:a", "submodels": [{"keys": [{"value": "urn:s"}]}]}]});
        assert_eq!(lookup_str(&data, &[Key("result"), Index(0), Key("id")]).unwrap(), "urn:a");
        assert_eq!(
            lookup_str(
                &data,
                &[Key("result"), Index(0), Key("submodels"), Index(0), Key("keys"), Index(0), Key("value")]
            )
            .unwrap(),
            "urn:s"
        );
    }

    #[test]
    fn test_lookup_failures() {
        let data = json!({"result": [], "paging_metadata": {}});
        let err = lookup(&data, &[Key("result"), Index(0), Key("id")]).unwrap_err();
        assert_eq!(
            err,
            SetupError::MissingField {
                path: "result/0/id".into(),
                reason: "array too short".into(),
            }
        );

        let err = lookup(&data, &[Key("paging_metadata"), Key("cursor")]).unwrap_err();
        assert!(err.to_string().contains("key 'cursor' does not exist"));

        let err = lookup(&data, &[Key("result"), Key("id")]).unwrap_err();
        assert!(err.to_string().contains("should be an object"));

        let err = lookup(&data, &[Key("paging_metadata"), Index(0)]).unwrap_err();
        assert!(err.to_string().contains("should be an array"));

        let err = lookup_str(&json!({"id": 1}), &[Key("id")]).unwrap_err();
        assert!(err.to_string().contains("should be a string"));
    }

    #[test]
    fn test_empty_path_is_identity() {
        let data = json!([1, 2]);
        assert_eq!(lookup(&data, &[]).unwrap(), &data);
    }
}
