//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to get a dimchain command isolated from the user's config
pub fn dimchain(tmp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("dimchain"));
    cmd.current_dir(tmp.path())
        .env("XDG_CONFIG_HOME", tmp.path().join(".config"))
        .env_remove("DIMCHAIN_STRICT")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to create a project file holding the two-dimension sample chain
pub fn setup_sample_project() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    dimchain(&tmp)
        .args(["new", "chain.json", "--sample"])
        .assert()
        .success();
    let path = tmp.path().join("chain.json");
    (tmp, path)
}

/// Helper to write a raw project file
pub fn write_project(tmp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = tmp.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Helper to read a project file as JSON
pub fn read_json(path: &Path) -> Value {
    let content = fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

/// Helper to list dimension ids in a project file
pub fn dimension_ids(path: &Path) -> Vec<String> {
    read_json(path)["cotes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect()
}
