//! Submodel element discovery and the modifier classification rule.

use crate::error::{SetupError, SetupResult};
use crate::lookup::{lookup_str, Fragment};
use aastest_contract::Request;
use serde_json::Value;

pub const SUBMODEL_ELEMENT_COLLECTION: &str = "SubmodelElementCollection";
pub const SUBMODEL_ELEMENT_LIST: &str = "SubmodelElementList";
pub const ENTITY: &str = "Entity";
pub const BLOB: &str = "Blob";
pub const FILE: &str = "File";

/// Every submodel element type, in the order they are checked.
pub const ALL_TYPES: [&str; 14] = [
    SUBMODEL_ELEMENT_COLLECTION,
    SUBMODEL_ELEMENT_LIST,
    ENTITY,
    "BasicEventElement",
    "Capability",
    "Operation",
    "Property",
    "MultiLanguageProperty",
    "Range",
    "ReferenceElement",
    "RelationshipElement",
    "AnnotatedRelationshipElement",
    BLOB,
    FILE,
];

/// idShortPaths of discovered elements, grouped by `modelType` in
/// discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementPaths {
    groups: Vec<(String, Vec<String>)>,
}

impl ElementPaths {
    /// Walk a `GetAllSubmodelElements` result list.
    ///
    /// Collections contribute `parent.child` paths, lists `parent[i]`.
    pub fn collect(elements: &Value) -> SetupResult<Self> {
        let mut paths = Self::default();
        paths.collect_named(elements, "")?;
        Ok(paths)
    }

    fn collect_named(&mut self, elements: &Value, prefix: &str) -> SetupResult<()> {
        let items = elements.as_array().ok_or_else(|| SetupError::MissingField {
            path: format!("{prefix}value"),
            reason: "should be an array".into(),
        })?;
        for item in items {
            let id_short = lookup_str(item, &[Fragment::Key("idShort")])?;
            self.visit(item, format!("{prefix}{id_short}"))?;
        }
        Ok(())
    }

    fn visit(&mut self, item: &Value, path: String) -> SetupResult<()> {
        let model_type = lookup_str(item, &[Fragment::Key("modelType")])?;
        self.push(model_type, path.clone());
        let children = item.get("value").filter(|v| !v.is_null());
        match (model_type, children) {
            (SUBMODEL_ELEMENT_COLLECTION, Some(children)) => {
                self.collect_named(children, &format!("{path}."))?;
            }
            (SUBMODEL_ELEMENT_LIST, Some(Value::Array(children))) => {
                for (i, child) in children.iter().enumerate() {
                    self.visit(child, format!("{path}[{i}]"))?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn push(&mut self, model_type: &str, path: String) {
        match self.groups.iter_mut().find(|(t, _)| t == model_type) {
            Some((_, paths)) => paths.push(path),
            None => self.groups.push((model_type.to_string(), vec![path])),
        }
    }

    /// All paths of `model_type`.
    pub fn of_type(&self, model_type: &str) -> &[String] {
        self.groups
            .iter()
            .find(|(t, _)| t == model_type)
            .map(|(_, paths)| paths.as_slice())
            .unwrap_or_default()
    }

    /// First discovered path of `model_type`.
    pub fn representative(&self, model_type: &str) -> Option<&str> {
        self.of_type(model_type).first().map(String::as_str)
    }

    /// One path per discovered type.
    pub fn representatives(&self) -> Vec<String> {
        self.groups
            .iter()
            .filter_map(|(_, paths)| paths.first().cloned())
            .collect()
    }
}

/// Whether a valid request against an element of `model_type` gets a
/// semantic check.
///
/// Requests carrying `level` or `extent` are only checked syntactically,
/// except for composite types (always semantic) and `Blob` (semantic
/// unless `level` is present).
pub fn is_semantic(model_type: &str, request: &Request) -> bool {
    let has_extent = request.has_query("extent");
    let has_level = request.has_query("level");
    (!has_extent && !has_level)
        || matches!(model_type, SUBMODEL_ELEMENT_COLLECTION | SUBMODEL_ELEMENT_LIST | ENTITY)
        || (model_type == BLOB && !has_level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aastest_contract::Method;
    use serde_json::json;

    fn request(query: &[(&str, &str)]) -> Request {
        Request {
            operation_id: "GetSubmodelElementByPath_AasRepository".into(),
            method: Method::Get,
            path: "/x".into(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: None,
        }
    }

    #[test]
    fn test_collect_groups_and_recurses() {
        let elements = json!([
            {"idShort": "Temperature", "modelType": "Property"},
            {"idShort": "Nameplate", "modelType": "SubmodelElementCollection", "value": [
                {"idShort": "Serial", "modelType": "Property"},
                {"idShort": "Manual", "modelType": "File"},
            ]},
            {"idShort": "Readings", "modelType": "SubmodelElementList", "value": [
                {"modelType": "Range"},
                {"modelType": "SubmodelElementCollection", "value": [
                    {"idShort": "Raw", "modelType": "Blob"},
                ]},
            ]},
        ]);
        let paths = ElementPaths::collect(&elements).unwrap();
        assert_eq!(paths.of_type("Property"), ["Temperature", "Nameplate.Serial"]);
        assert_eq!(paths.representative("File"), Some("Nameplate.Manual"));
        assert_eq!(paths.representative("Range"), Some("Readings[0]"));
        assert_eq!(paths.representative("Blob"), Some("Readings[1].Raw"));
        assert_eq!(paths.of_type("SubmodelElementCollection"), ["Nameplate", "Readings[1]"]);
        assert_eq!(
            paths.representatives(),
            vec!["Temperature", "Nameplate", "Nameplate.Manual", "Readings", "Readings[0]", "Readings[1].Raw"]
        );
        assert!(paths.representative("Entity").is_none());
    }

    #[test]
    fn test_collection_without_value() {
        let paths = ElementPaths::collect(&json!([
            {"idShort": "Empty", "modelType": "SubmodelElementCollection"}
        ]))
        .unwrap();
        assert_eq!(paths.representatives(), vec!["Empty"]);
    }

    #[test]
    fn test_collect_requires_id_short_and_type() {
        assert!(matches!(
            ElementPaths::collect(&json!([{"modelType": "Property"}])),
            Err(SetupError::MissingField { .. })
        ));
        assert!(matches!(
            ElementPaths::collect(&json!([{"idShort": "p"}])),
            Err(SetupError::MissingField { .. })
        ));
        assert!(ElementPaths::collect(&json!({})).is_err());
    }

    #[test]
    fn test_modifier_rule() {
        let plain = request(&[]);
        let level = request(&[("level", "core")]);
        let extent = request(&[("extent", "withBlobValue")]);

        for model_type in ALL_TYPES {
            assert!(is_semantic(model_type, &plain), "{model_type}");
        }
        for composite in [SUBMODEL_ELEMENT_COLLECTION, SUBMODEL_ELEMENT_LIST, ENTITY] {
            assert!(is_semantic(composite, &level));
            assert!(is_semantic(composite, &extent));
        }
        assert!(is_semantic(BLOB, &extent));
        assert!(!is_semantic(BLOB, &level));
        assert!(!is_semantic("Property", &level));
        assert!(!is_semantic("Property", &extent));
        assert!(!is_semantic(FILE, &extent));
    }
}
