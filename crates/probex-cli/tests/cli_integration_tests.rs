//! CLI integration tests
//!
//! Drive the built `probex` binary against a scratch database and check
//! stdout JSON, stderr error bodies and exit codes.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn db_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("data").join("probes.db")
}

fn probex(db: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_probex"))
        .env_remove("PROBEX_DB")
        .env_remove("PROBEX_LOG")
        .arg("--db")
        .arg(db)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn stderr_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stderr).expect("stderr should be JSON")
}

fn create(db: &Path, x: &str, y: &str, direction: &str) -> String {
    let output = probex(db, &["create", "--x", x, "--y", y, "--direction", direction]);
    assert!(output.status.success(), "create failed: {:?}", output);
    stdout_json(&output)["id"].as_str().unwrap().to_string()
}

#[test]
fn test_cli_create_prints_probe_at_origin() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    let output = probex(&db, &["create", "--x", "5", "--y", "5", "--direction", "NORTH"]);

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["x"], 0);
    assert_eq!(json["y"], 0);
    assert_eq!(json["direction"], "NORTH");
    assert!(db.exists(), "database created on first use");
}

#[test]
fn test_cli_reference_move() {
    // Scenario: (0,0) NORTH on 5x5, LRMRMMRRM
    // Then: (1,1) WEST, visible to a later `list`
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);
    let id = create(&db, "5", "5", "NORTH");

    let output = probex(&db, &["move", &id, "LRMRMMRRM"]);
    assert!(output.status.success(), "{:?}", output);
    let moved = stdout_json(&output);
    assert_eq!(moved["x"], 1);
    assert_eq!(moved["y"], 1);
    assert_eq!(moved["direction"], "WEST");

    let listed = stdout_json(&probex(&db, &["list"]));
    assert_eq!(listed["probes"][0], moved);
}

#[test]
fn test_cli_boundary_violation() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);
    let id = create(&db, "2", "2", "EAST");

    let output = probex(&db, &["move", &id, "MMM"]);

    assert_eq!(output.status.code(), Some(4));
    let err = stderr_json(&output);
    assert_eq!(err["code"], "ERR_BOUNDARY_VIOLATION");
    assert_eq!(err["status"], 422);
    assert_eq!(err["detail"], "Invalid move: probe would exceed grid limits.");

    // Nothing moved
    let listed = stdout_json(&probex(&db, &["list"]));
    assert_eq!(listed["probes"][0]["x"], 0);
    assert_eq!(listed["probes"][0]["direction"], "EAST");
}

#[test]
fn test_cli_input_errors() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);
    let id = create(&db, "2", "2", "EAST");

    let cases: [(&[&str], &str); 5] = [
        (&["move", "bla-bla", "M"], "Invalid probe ID format"),
        (
            &["move", id.as_str(), ""],
            "Field 'commands' is required and must be a non-empty string.",
        ),
        (
            &["move", id.as_str(), "MXR"],
            "Invalid command sequence. Allowed commands: 'M', 'L', 'R'.",
        ),
        (
            &["create", "--x", "-1", "--y", "5", "--direction", "NORTH"],
            "X must be a non-negative integer",
        ),
        (
            &["create", "--x", "5", "--y", "5", "--direction", "UP"],
            "Direction must be one of ['NORTH', 'EAST', 'SOUTH', 'WEST']",
        ),
    ];

    for (args, detail) in cases {
        let output = probex(&db, args);
        assert_eq!(output.status.code(), Some(2), "{:?}", args);
        let err = stderr_json(&output);
        assert_eq!(err["code"], "ERR_INVALID_INPUT");
        assert_eq!(err["status"], 400);
        assert_eq!(err["detail"], detail);
    }

    let listed = stdout_json(&probex(&db, &["list"]));
    assert_eq!(listed["probes"].as_array().unwrap().len(), 1);
}

#[test]
fn test_cli_unknown_probe() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_path(&temp_dir);

    let output = probex(&db, &["move", "0190b6a0-0000-7000-8000-000000000000", "M"]);

    assert_eq!(output.status.code(), Some(3));
    let err = stderr_json(&output);
    assert_eq!(err["code"], "ERR_NOT_FOUND");
    assert_eq!(err["detail"], "Probe not found");
}

#[test]
fn test_cli_list_empty() {
    let temp_dir = TempDir::new().unwrap();
    let output = probex(&db_path(&temp_dir), &["list"]);

    assert!(output.status.success());
    assert_eq!(stdout_json(&output), serde_json::json!({ "probes": [] }));
}

#[test]
fn test_cli_db_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("env.db");

    let output = Command::new(env!("CARGO_BIN_EXE_probex"))
        .current_dir(temp_dir.path())
        .env("PROBEX_DB", &db)
        .env_remove("PROBEX_LOG")
        .args(["create", "--x", "1", "--y", "1", "--direction", "SOUTH"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert!(db.exists());
}
