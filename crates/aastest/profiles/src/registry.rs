//! Graph-closure resolution of profile names.

use crate::builtin::{self, SSP_PREFIX};
use crate::error::{ProfileError, ProfileResult};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Expand a short service-specification profile name to its full URI.
///
/// `SubmodelServiceSpecification/SSP-002` becomes
/// `https://admin-shell.io/aas/API/3/0/SubmodelServiceSpecification/SSP-002`.
/// Any other name is returned unchanged.
pub fn normalize_name(name: &str) -> String {
    let name = name.trim();
    if let Some((spec, ssp)) = name.split_once('/') {
        let is_short_ssp = spec.ends_with("ServiceSpecification")
            && !spec.contains(char::is_whitespace)
            && ssp.starts_with("SSP-")
            && ssp.len() > 4
            && ssp[4..].chars().all(|c| c.is_ascii_digit());
        if is_short_ssp {
            return format!("{SSP_PREFIX}{name}");
        }
    }
    name.to_string()
}

/// Immutable registry of profiles and their resolved operation sets.
///
/// Every profile is resolved once at construction; lookups afterwards only
/// read the cache.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    table: BTreeMap<String, Vec<String>>,
    resolved: BTreeMap<String, ProfileResult<BTreeSet<String>>>,
}

impl ProfileRegistry {
    /// Build a registry from `(name, members)` pairs.
    ///
    /// Names and members are normalized with [`normalize_name`]. A later
    /// entry with the same name replaces an earlier one.
    pub fn new<N, M, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, Vec<M>)>,
        N: AsRef<str>,
        M: AsRef<str>,
    {
        let table: BTreeMap<String, Vec<String>> = entries
            .into_iter()
            .map(|(name, members)| {
                (
                    normalize_name(name.as_ref()),
                    members.iter().map(|m| normalize_name(m.as_ref())).collect(),
                )
            })
            .collect();

        let resolved = table
            .keys()
            .map(|name| {
                let mut stack = Vec::new();
                (name.clone(), expand(&table, name, &mut stack))
            })
            .collect();

        debug!(profiles = table.len(), "Profile registry built");
        Self { table, resolved }
    }

    /// The AAS v3.0 profile table.
    pub fn builtin() -> Self {
        Self::new(builtin::aas_v3_0())
    }

    /// Load a table from YAML of the form `name: [member, ...]`.
    pub fn from_yaml_str(yaml: &str) -> ProfileResult<Self> {
        let table: BTreeMap<String, Vec<String>> =
            serde_yaml::from_str(yaml).map_err(|e| ProfileError::InvalidTable(e.to_string()))?;
        Ok(Self::new(table))
    }

    /// Flatten `name` into the set of leaf operation ids it covers.
    pub fn resolve(&self, name: &str) -> ProfileResult<BTreeSet<String>> {
        match self.resolved.get(&normalize_name(name)) {
            Some(result) => result.clone(),
            None => Err(ProfileError::UnknownProfile {
                name: name.to_string(),
                available: self.profile_names().join("\n"),
            }),
        }
    }

    /// Whether `name` is a key of the table.
    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(&normalize_name(name))
    }

    /// Direct members of a profile, unresolved.
    pub fn members(&self, name: &str) -> Option<&[String]> {
        self.table.get(&normalize_name(name)).map(Vec::as_slice)
    }

    /// All profile names in sorted order.
    pub fn profile_names(&self) -> Vec<&str> {
        self.table.keys().map(String::as_str).collect()
    }
}

/// Depth-first expansion; `stack` holds the names on the current path.
fn expand(
    table: &BTreeMap<String, Vec<String>>,
    name: &str,
    stack: &mut Vec<String>,
) -> ProfileResult<BTreeSet<String>> {
    if let Some(pos) = stack.iter().position(|n| n == name) {
        let mut cycle: Vec<String> = stack[pos..].to_vec();
        cycle.push(name.to_string());
        return Err(ProfileError::CyclicProfile {
            name: stack[0].clone(),
            cycle,
        });
    }

    let Some(members) = table.get(name) else {
        return Ok(BTreeSet::from([name.to_string()]));
    };

    stack.push(name.to_string());
    let mut operations = BTreeSet::new();
    for member in members {
        if table.contains_key(member) {
            operations.extend(expand(table, member, stack)?);
        } else {
            operations.insert(member.clone());
        }
    }
    stack.pop();
    Ok(operations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(entries: &[(&str, &[&str])]) -> ProfileRegistry {
        ProfileRegistry::new(entries.iter().map(|(n, m)| (*n, m.to_vec())))
    }

    #[test]
    fn test_leaf_profile() {
        let reg = registry(&[("Description API", &["GetSelfDescription"])]);
        let ops = reg.resolve("Description API").unwrap();
        assert_eq!(ops, BTreeSet::from(["GetSelfDescription".to_string()]));
    }

    #[test]
    fn test_nested_profiles_flatten() {
        let reg = registry(&[
            ("A", &["op1", "B"]),
            ("B", &["op2", "C"]),
            ("C", &["op3", "op1"]),
        ]);
        let ops = reg.resolve("A").unwrap();
        let expected: BTreeSet<String> =
            ["op1", "op2", "op3"].iter().map(|s| s.to_string()).collect();
        assert_eq!(ops, expected);
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let reg = registry(&[
            ("Top", &["Left", "Right"]),
            ("Left", &["Shared"]),
            ("Right", &["Shared"]),
            ("Shared", &["op"]),
        ]);
        assert_eq!(reg.resolve("Top").unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_profile() {
        let reg = registry(&[("A", &["op"])]);
        let err = reg.resolve("B").unwrap_err();
        assert!(matches!(err, ProfileError::UnknownProfile { ref name, .. } if name == "B"));
    }

    #[test]
    fn test_cycle_is_reported() {
        let reg = registry(&[("A", &["B"]), ("B", &["op", "A"]), ("Fine", &["op"])]);
        let err = reg.resolve("A").unwrap_err();
        match err {
            ProfileError::CyclicProfile { name, cycle } => {
                assert_eq!(name, "A");
                assert_eq!(cycle, vec!["A", "B", "A"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        // Unrelated profiles still resolve.
        assert!(reg.resolve("Fine").is_ok());
    }

    #[test]
    fn test_self_reference_is_cyclic() {
        let reg = registry(&[("Loop", &["Loop"])]);
        assert!(matches!(
            reg.resolve("Loop"),
            Err(ProfileError::CyclicProfile { .. })
        ));
    }

    #[test]
    fn test_normalize_short_ssp_name() {
        assert_eq!(
            normalize_name("SubmodelServiceSpecification/SSP-002"),
            format!("{SSP_PREFIX}SubmodelServiceSpecification/SSP-002")
        );
        assert_eq!(normalize_name("Submodel API"), "Submodel API");
        assert_eq!(normalize_name("Foo/SSP-x"), "Foo/SSP-x");
    }

    #[test]
    fn test_from_yaml() {
        let reg = ProfileRegistry::from_yaml_str(
            "Custom:\n  - GetSelfDescription\n  - Other\nOther:\n  - GetSubmodel\n",
        )
        .unwrap();
        assert_eq!(reg.resolve("Custom").unwrap().len(), 2);
        assert!(ProfileRegistry::from_yaml_str("- not a map").is_err());
    }
}
