//! Versioned API contracts.

use crate::operation::Operation;
use crate::v3_0;
use std::collections::HashMap;

/// Version used when none is requested.
pub const DEFAULT_VERSION: &str = "3.0";

const SUPPORTED_VERSIONS: &[&str] = &["3.0"];

/// The operations of one API version, in declaration order.
#[derive(Debug, Clone)]
pub struct ApiContract {
    version: String,
    operations: Vec<Operation>,
    index: HashMap<String, usize>,
}

impl ApiContract {
    /// Build a contract; a later operation with a duplicate id is ignored.
    pub fn new(version: impl Into<String>, operations: Vec<Operation>) -> Self {
        let mut index = HashMap::with_capacity(operations.len());
        let mut kept = Vec::with_capacity(operations.len());
        for operation in operations {
            if index.contains_key(&operation.id) {
                continue;
            }
            index.insert(operation.id.clone(), kept.len());
            kept.push(operation);
        }
        Self {
            version: version.into(),
            operations: kept,
            index,
        }
    }

    /// The built-in contract for `version`, if supported.
    pub fn builtin(version: &str) -> Option<Self> {
        match version {
            "3.0" => Some(Self::new(version, v3_0::operations())),
            _ => None,
        }
    }

    pub fn supported_versions() -> &'static [&'static str] {
        SUPPORTED_VERSIONS
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn operation(&self, id: &str) -> Option<&Operation> {
        self.index.get(id).map(|&i| &self.operations[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Operations in declaration order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Method;

    #[test]
    fn test_builtin_versions() {
        for version in ApiContract::supported_versions() {
            let contract = ApiContract::builtin(version).unwrap();
            assert_eq!(contract.version(), *version);
            assert!(!contract.operations().is_empty());
        }
        assert!(ApiContract::builtin("1.0RC01").is_none());
        assert!(ApiContract::supported_versions().contains(&DEFAULT_VERSION));
    }

    #[test]
    fn test_declaration_order_and_duplicates() {
        let contract = ApiContract::new(
            "test",
            vec![
                Operation::new("B", Method::Get, "/b"),
                Operation::new("A", Method::Get, "/a"),
                Operation::new("B", Method::Delete, "/b2"),
            ],
        );
        let ids: Vec<&str> = contract.operations().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
        assert_eq!(contract.operation("B").unwrap().path, "/b");
        assert!(!contract.contains("C"));
    }
}
