use aastest_profiles::{ProfileError, ProfileRegistry, SSP_PREFIX};
use proptest::prelude::*;
use std::collections::BTreeSet;

#[test]
fn resolving_twice_is_identical() {
    let registry = ProfileRegistry::builtin();
    let name = format!("{SSP_PREFIX}AssetAdministrationShellRepositoryServiceSpecification/SSP-001");
    let first = registry.resolve(&name).unwrap();
    let second = registry.resolve(&name).unwrap();
    assert_eq!(first, second);
}

#[test]
fn composite_is_union_of_constituents() {
    let registry = ProfileRegistry::builtin();
    let composite = registry
        .resolve("Submodel Service Specification")
        .unwrap();

    let mut union = BTreeSet::new();
    for member in registry.members("Submodel Service Specification").unwrap() {
        union.extend(registry.resolve(member).unwrap());
    }
    assert_eq!(composite, union);
}

#[test]
fn description_api_is_single_operation() {
    let registry = ProfileRegistry::builtin();
    assert_eq!(
        registry.resolve("Description API").unwrap(),
        BTreeSet::from(["GetSelfDescription".to_string()])
    );
}

#[test]
fn unknown_profile_lists_alternatives() {
    let registry = ProfileRegistry::builtin();
    let err = registry.resolve("No Such API").unwrap_err();
    let ProfileError::UnknownProfile { available, .. } = &err else {
        panic!("unexpected error: {err}");
    };
    assert!(available.contains("Description API"));
}

proptest! {
    /// Random acyclic tables: profile `i` may only reference profiles `j > i`,
    /// so the resolved set must equal the union of its members' resolutions.
    #[test]
    fn random_acyclic_tables_resolve_to_union(
        edges in proptest::collection::vec(
            proptest::collection::vec((any::<bool>(), 0usize..8), 0..5),
            1..8,
        )
    ) {
        let count = edges.len();
        let entries: Vec<(String, Vec<String>)> = edges
            .iter()
            .enumerate()
            .map(|(i, members)| {
                let members = members
                    .iter()
                    .map(|(is_profile, target)| {
                        let target = i + 1 + target % (count + 1);
                        if *is_profile && target < count {
                            format!("P{target}")
                        } else {
                            format!("op{target}")
                        }
                    })
                    .collect();
                (format!("P{i}"), members)
            })
            .collect();
        let registry = ProfileRegistry::new(entries.clone());

        for (name, members) in &entries {
            let resolved = registry.resolve(name).unwrap();
            let mut union = BTreeSet::new();
            for member in members {
                if registry.contains(member) {
                    union.extend(registry.resolve(member).unwrap());
                } else {
                    union.insert(member.clone());
                }
            }
            prop_assert_eq!(&resolved, &union);
            prop_assert!(resolved.iter().all(|op| op.starts_with("op")));
        }
    }
}
