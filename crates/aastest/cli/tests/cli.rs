//! Command-line behaviour of the `aastest` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn aastest() -> Command {
    let mut cmd = Command::cargo_bin("aastest").unwrap();
    cmd.env_remove("AASTEST_PROFILE")
        .env("AASTEST_CONFIG", "/nonexistent/aastest/config.toml");
    cmd
}

#[test]
fn test_profiles_lists_builtin_table() {
    aastest()
        .arg("profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("Description API"))
        .stdout(predicate::str::contains(
            "https://admin-shell.io/aas/API/3/0/SubmodelServiceSpecification/SSP-002",
        ));
}

#[test]
fn test_profiles_as_json() {
    let output = aastest().args(["profiles", "--output", "json"]).output().unwrap();
    assert!(output.status.success());
    let names: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert!(names.contains(&"Submodel API".to_string()));
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn test_dry_run_sends_nothing_and_succeeds() {
    aastest()
        .args(["api", "http://127.0.0.1:1", "--profile", "Description API", "--dry"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped due to dry run"))
        .stdout(predicate::str::contains("Checking /description (GetSelfDescription)"));
}

#[test]
fn test_dry_run_without_profile_covers_every_profile() {
    aastest()
        .args(["api", "http://127.0.0.1:1", "--dry"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Checking compliance to https://admin-shell.io/aas/API/3/0/ConceptDescriptionRepositoryServiceSpecification/SSP-001",
        ))
        .stdout(predicate::str::contains("profiles conform"));
}

#[test]
fn test_dry_run_json_report() {
    let output = aastest()
        .args(["api", "http://127.0.0.1:1", "-p", "Submodel API", "--dry", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["profile"], "Submodel API");
    assert_eq!(report["matrix"]["valid_accepted"], 0);
}

#[test]
fn test_unreachable_server_exits_with_failure() {
    aastest()
        .args(["api", "http://127.0.0.1:1", "--profile", "Description API", "--timeout", "2"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Failed to reach"));
}

#[test]
fn test_unknown_profile_is_an_error() {
    aastest()
        .args(["api", "http://127.0.0.1:1", "--profile", "Nonexistent API", "--dry"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown profile"));
}

#[test]
fn test_custom_profile_table_from_config() {
    let mut profiles = tempfile::NamedTempFile::new().unwrap();
    writeln!(profiles, "Minimal API:\n  - GetSelfDescription").unwrap();
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "profiles_file = {:?}", profiles.path().to_str().unwrap()).unwrap();

    aastest()
        .env("AASTEST_CONFIG", config.path())
        .arg("profiles")
        .assert()
        .success()
        .stdout("Minimal API\n");
}
