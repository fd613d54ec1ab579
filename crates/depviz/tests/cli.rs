//! Integration tests for the `depviz` binary against offline registries.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const ENV_VARS: &[&str] = &[
    "DEPVIZ_PACKAGE",
    "DEPVIZ_VERSION",
    "DEPVIZ_FILTER",
    "DEPVIZ_URL",
    "DEPVIZ_OFFLINE",
    "DEPVIZ_OUTPUT_DIR",
    "DEPVIZ_NET_TIMEOUT",
    "DEPVIZ_LOG_LEVEL",
    "DEPVIZ_CONFIG",
    "RUST_LOG",
    "FORCE_COLOR",
];

fn write_registry(dir: &Path, content: &str) -> String {
    let path = dir.join("registry.txt");
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().to_string()
}

/// Binary running inside `dir` with a clean, colorless environment
fn depviz(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("depviz").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1");
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_graph_is_default_command() {
    let temp = TempDir::new().unwrap();
    let registry = write_registry(temp.path(), "A: B C\nB: C\nC:\n");

    depviz(temp.path())
        .args(["--offline", "--url", &registry, "--package", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B, C"))
        .stdout(predicate::str::contains("C -> (no dependencies)"))
        .stdout(predicate::str::contains("@startuml"))
        .stdout(predicate::str::contains("Node_A --> Node_B"))
        .stdout(predicate::str::contains("Diagram saved"));

    let diagram = std::fs::read_to_string(temp.path().join("A_diagram.puml")).unwrap();
    assert!(diagram.contains("component \"C\" as Node_C"));
}

#[test]
fn test_order_command() {
    let temp = TempDir::new().unwrap();
    let registry = write_registry(temp.path(), "A: B\nB: C\nC:\n");

    depviz(temp.path())
        .args(["order", "--offline", "--url", &registry, "-p", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/3] C"))
        .stdout(predicate::str::contains("[2/3] B"))
        .stdout(predicate::str::contains("[3/3] A"))
        .stdout(predicate::str::contains("Root package loads last"));
}

#[test]
fn test_cycle_is_reported_not_fatal() {
    let temp = TempDir::new().unwrap();
    let registry = write_registry(temp.path(), "A: B\nB: A\n");

    depviz(temp.path())
        .args(["order", "--offline", "--url", &registry, "-p", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/2] B"))
        .stdout(predicate::str::contains("[2/2] A"))
        .stderr(predicate::str::contains("cycle"));
}

#[test]
fn test_filter_and_output_dir() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    std::fs::create_dir(&out).unwrap();
    let registry = write_registry(temp.path(), "App: Core TestKit\nCore:\nTestKit:\n");

    depviz(temp.path())
        .args(["graph", "--offline", "--url", &registry, "-p", "App"])
        .args(["--filter", "TEST", "--output-dir", &out.to_string_lossy()])
        .assert()
        .success()
        .stdout(predicate::str::contains("App -> Core"))
        .stdout(predicate::str::contains("TestKit").not());

    assert!(out.join("App_diagram.puml").is_file());
    assert!(!temp.path().join("App_diagram.puml").exists());
}

#[test]
fn test_config_file_supplies_settings() {
    let temp = TempDir::new().unwrap();
    let registry = write_registry(temp.path(), "Lib: Dep\nDep:\n");
    std::fs::write(
        temp.path().join("config.yaml"),
        format!("package: Lib\nurl: {registry}\nmode: true\n"),
    )
    .unwrap();

    depviz(temp.path())
        .arg("deps")
        .assert()
        .success()
        .stdout(predicate::str::contains("Direct dependencies of Lib"))
        .stdout(predicate::str::contains("Dep"));
}

#[test]
fn test_packages_command() {
    let temp = TempDir::new().unwrap();
    let registry = write_registry(temp.path(), "Zeta:\nAlpha: Zeta\n");

    depviz(temp.path())
        .args(["packages", "--offline", "--url", &registry])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha"))
        .stdout(predicate::str::contains("Zeta"));
}

#[test]
fn test_unknown_root_fails() {
    let temp = TempDir::new().unwrap();
    let registry = write_registry(temp.path(), "A:\n");

    depviz(temp.path())
        .args(["--offline", "--url", &registry, "-p", "Missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'Missing' not found"));
}

#[test]
fn test_validation_errors_are_reported_together() {
    let temp = TempDir::new().unwrap();

    depviz(temp.path())
        .args(["--offline", "--url", "nowhere.txt", "-p", "A", "-t", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration validation failed"))
        .stderr(predicate::str::contains("nowhere.txt"))
        .stderr(predicate::str::contains("timeout"));
}

#[test]
fn test_env_variables_configure_the_run() {
    let temp = TempDir::new().unwrap();
    let registry = write_registry(temp.path(), "A: B\nB:\n");

    depviz(temp.path())
        .arg("order")
        .env("DEPVIZ_PACKAGE", "A")
        .env("DEPVIZ_URL", &registry)
        .env("DEPVIZ_OFFLINE", "true")
        .assert()
        .success()
        .stdout(predicate::str::contains("[2/2] A"));
}

#[test]
fn test_help_lists_subcommands() {
    let temp = TempDir::new().unwrap();

    depviz(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("graph"))
        .stdout(predicate::str::contains("order"))
        .stdout(predicate::str::contains("packages"));
}
