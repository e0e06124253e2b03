//! CLI end-to-end tests against the shared DDL fixtures.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../tests/ddl");

#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin("ddl-camelcase").expect("binary should exist")
}

// ── E2E: Full dump ──────────────────────────────────────────────────────────

#[test]
fn test_cli_e2e_convert_full_dump() {
    let dir = TempDir::new().unwrap();
    let input = format!("{FIXTURES_DIR}/schema_full.sql");
    let output = dir.path().join("convert_to_camelcase_full.sql");

    cmd()
        .args(["convert", &input])
        .args(["-o", output.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Found 7 tables:"))
        .stderr(predicate::str::contains("  - eventManagers (3 columns)"))
        .stderr(predicate::str::contains("Required follow-up"));

    let script = fs::read_to_string(&output).unwrap();
    let renames: Vec<&str> = script.lines().filter(|l| l.contains("RENAME TO")).collect();
    assert_eq!(renames.len(), 4);
    assert!(script.contains("RAISE NOTICE 'Tables processed: %', 6;"));
}

#[test]
fn test_cli_e2e_tables_listed_sorted() {
    let input = format!("{FIXTURES_DIR}/schema_full.sql");

    let out = cmd().args(["convert", &input]).assert().success();
    let stderr = String::from_utf8(out.get_output().stderr.clone()).unwrap();
    let listed: Vec<&str> = stderr
        .lines()
        .filter_map(|l| l.strip_prefix("  - "))
        .map(|l| l.split(' ').next().unwrap())
        .collect();
    let mut sorted = listed.clone();
    sorted.sort();
    assert_eq!(listed, sorted);
    assert_eq!(listed.len(), 7);
}

// ── E2E: Analyze then convert agree ─────────────────────────────────────────

#[test]
fn test_cli_e2e_analyze_full_dump() {
    let dir = TempDir::new().unwrap();
    let input = format!("{FIXTURES_DIR}/schema_full.sql");
    let output = dir.path().join("model.json");

    cmd()
        .args(["analyze", &input])
        .args(["-o", output.to_str().unwrap()])
        .assert()
        .success();

    let model: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).expect("valid JSON");
    let tables = model.as_object().expect("model is an object");
    assert_eq!(tables.len(), 7);
    assert_eq!(model["event_spaces"]["columns"][5], serde_json::json!("\"pricePerHour\""));
    assert_eq!(model["users"]["indices"], serde_json::json!([]));
}

// ── E2E: Error path ─────────────────────────────────────────────────────────

#[test]
fn test_cli_e2e_malformed_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("options.json");
    fs::write(&config, "this is not valid JSON at all {{{").unwrap();

    cmd()
        .args(["convert", &format!("{FIXTURES_DIR}/schema_full.sql")])
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn test_cli_e2e_garbage_input_still_converts() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("garbage.sql");
    fs::write(&input, "not ddl at all\n);\nCONSTRAINT nothing\n").unwrap();

    cmd()
        .args(["convert", input.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Found 0 tables:"))
        .stdout(predicate::str::contains("ALTER TABLE").not());
}
