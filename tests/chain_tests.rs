//! Chain editing tests - new, show, add, set, rm, move

mod common;

use common::{dimchain, dimension_ids, read_json, setup_sample_project};
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// New / Show
// ============================================================================

#[test]
fn test_new_creates_empty_project() {
    let tmp = TempDir::new().unwrap();

    dimchain(&tmp)
        .args(["new", "empty.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"))
        .stdout(predicate::str::contains("0 dimension(s)"));

    let value = read_json(&tmp.path().join("empty.json"));
    assert_eq!(value, json!({ "cotes": [], "imageSrc": null, "positions": [] }));
}

#[test]
fn test_new_refuses_to_overwrite() {
    let (tmp, path) = setup_sample_project();

    dimchain(&tmp)
        .args(["new", "chain.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(dimension_ids(&path), vec!["L1", "L2"]);

    dimchain(&tmp)
        .args(["new", "chain.json", "--force"])
        .assert()
        .success();
    assert!(dimension_ids(&path).is_empty());
}

#[test]
fn test_sample_project_contents() {
    let (_tmp, path) = setup_sample_project();
    let value = read_json(&path);

    assert_eq!(
        value["cotes"][0],
        json!({ "id": "L1", "valeur": 120.2, "tolMin": -0.1, "tolMax": 0.1 })
    );
    assert_eq!(value["positions"][1], json!({ "x": 200.0, "y": 100.0 }));
}

#[test]
fn test_show_tsv_when_piped() {
    let (tmp, _path) = setup_sample_project();

    dimchain(&tmp)
        .args(["show", "chain.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("n\tid\tnominal"))
        .stdout(predicate::str::contains("1\tL1\t120.2\t-0.1\t0.1\t50\t100"));
}

#[test]
fn test_show_pretty_clearance() {
    let (tmp, _path) = setup_sample_project();

    dimchain(&tmp)
        .args(["show", "chain.json", "-o", "pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("160.20"))
        .stdout(predicate::str::contains("159.90 mm to"))
        .stdout(predicate::str::contains("160.60 mm"));
}

#[test]
fn test_show_json_aggregate() {
    let (tmp, _path) = setup_sample_project();

    let output = dimchain(&tmp)
        .args(["show", "chain.json", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let agg = &value["aggregate"];
    assert!((agg["nominal_sum"].as_f64().unwrap() - 160.2).abs() < 1e-9);
    assert!((agg["clearance_min"].as_f64().unwrap() - 159.9).abs() < 1e-9);
    assert!((agg["clearance_max"].as_f64().unwrap() - 160.6).abs() < 1e-9);
    assert_eq!(value["dimensions"].as_array().unwrap().len(), 2);
}

#[test]
fn test_show_decimals_flag() {
    let (tmp, _path) = setup_sample_project();

    dimchain(&tmp)
        .args(["show", "chain.json", "-o", "pretty", "--decimals", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("159.900 mm"));
}

#[test]
fn test_show_missing_file() {
    let tmp = TempDir::new().unwrap();

    dimchain(&tmp)
        .args(["show", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ============================================================================
// Add / Set
// ============================================================================

#[test]
fn test_add_defaults() {
    let (tmp, path) = setup_sample_project();

    dimchain(&tmp)
        .args(["add", "chain.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added L3 as dimension 3"))
        .stdout(predicate::str::contains("159.90 mm to"));

    let value = read_json(&path);
    assert_eq!(
        value["cotes"][2],
        json!({ "id": "L3", "valeur": 0.0, "tolMin": 0.0, "tolMax": 0.0 })
    );
    assert_eq!(value["positions"][2], json!({ "x": 350.0, "y": 100.0 }));
}

#[test]
fn test_add_with_values() {
    let (tmp, path) = setup_sample_project();

    dimchain(&tmp)
        .args([
            "add",
            "chain.json",
            "--id",
            "shaft",
            "--nominal",
            "-159.5",
            "--tol-min",
            "-0.05",
            "--tol-max",
            "0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added shaft"));

    let value = read_json(&path);
    assert_eq!(
        value["cotes"][2],
        json!({ "id": "shaft", "valeur": -159.5, "tolMin": -0.05, "tolMax": 0.0 })
    );
}

#[test]
fn test_add_invalid_value_leaves_file_untouched() {
    let (tmp, path) = setup_sample_project();
    let before = fs::read(&path).unwrap();

    dimchain(&tmp)
        .args(["add", "chain.json", "--nominal", "twelve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid numeric input"));

    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_set_numeric_field() {
    let (tmp, path) = setup_sample_project();

    dimchain(&tmp)
        .args(["set", "chain.json", "2", "tolMax", "0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("L2 tolMax = 0.5"))
        .stdout(predicate::str::contains("160.80 mm"));

    assert_eq!(read_json(&path)["cotes"][1]["tolMax"], json!(0.5));
}

#[test]
fn test_set_negative_value() {
    let (tmp, path) = setup_sample_project();

    dimchain(&tmp)
        .args(["set", "chain.json", "1", "tol-min", "-0.25"])
        .assert()
        .success();

    assert_eq!(read_json(&path)["cotes"][0]["tolMin"], json!(-0.25));
}

#[test]
fn test_set_rename() {
    let (tmp, path) = setup_sample_project();

    dimchain(&tmp)
        .args(["set", "chain.json", "1", "id", "Housing"])
        .assert()
        .success();

    assert_eq!(dimension_ids(&path), vec!["Housing", "L2"]);
}

#[test]
fn test_set_invalid_number_is_rejected() {
    let (tmp, path) = setup_sample_project();
    let before = fs::read(&path).unwrap();

    dimchain(&tmp)
        .args(["set", "chain.json", "2", "tolMax", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid numeric input"))
        .stderr(predicate::str::contains("abc"));

    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_set_unknown_field() {
    let (tmp, _path) = setup_sample_project();

    dimchain(&tmp)
        .args(["set", "chain.json", "1", "width", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}

#[test]
fn test_set_out_of_range() {
    let (tmp, _path) = setup_sample_project();

    dimchain(&tmp)
        .args(["set", "chain.json", "3", "nominal", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No dimension 3"));

    dimchain(&tmp)
        .args(["set", "chain.json", "0", "nominal", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("start at 1"));
}

// ============================================================================
// Remove / Move
// ============================================================================

#[test]
fn test_remove_keeps_order_and_positions() {
    let (tmp, path) = setup_sample_project();
    dimchain(&tmp).args(["add", "chain.json"]).assert().success();

    dimchain(&tmp)
        .args(["rm", "chain.json", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed L2"))
        .stdout(predicate::str::contains("2 dimension(s) left"));

    let value = read_json(&path);
    assert_eq!(dimension_ids(&path), vec!["L1", "L3"]);
    assert_eq!(
        value["positions"],
        json!([{ "x": 50.0, "y": 100.0 }, { "x": 350.0, "y": 100.0 }])
    );
}

#[test]
fn test_remove_all() {
    let (tmp, path) = setup_sample_project();

    dimchain(&tmp).args(["rm", "chain.json", "1"]).assert().success();
    dimchain(&tmp)
        .args(["rm", "chain.json", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.00 mm to 0.00 mm"));

    let value = read_json(&path);
    assert_eq!(value["cotes"], json!([]));
    assert_eq!(value["positions"], json!([]));

    dimchain(&tmp)
        .args(["rm", "chain.json", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No dimension 1"));
}

#[test]
fn test_move_callout() {
    let (tmp, path) = setup_sample_project();

    dimchain(&tmp)
        .args(["move", "chain.json", "2", "-12.5", "300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved L2 callout"));

    let value = read_json(&path);
    assert_eq!(value["positions"][1], json!({ "x": -12.5, "y": 300.0 }));
    assert_eq!(value["positions"][0], json!({ "x": 50.0, "y": 100.0 }));
}

#[test]
fn test_move_rejects_non_finite_coordinates() {
    let (tmp, path) = setup_sample_project();
    dimchain(&tmp)
        .args(["move", "chain.json", "1", "12", "34"])
        .assert()
        .success();
    let before = fs::read(&path).unwrap();

    for (x, y) in [("NaN", "5"), ("5", "inf"), ("-inf", "0")] {
        dimchain(&tmp)
            .args(["move", "chain.json", "2", x, y])
            .assert()
            .failure()
            .stderr(predicate::str::contains("coordinate for dimension 2"));
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    dimchain(&tmp)
        .args(["show", "chain.json", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1\tL1\t120.2\t-0.1\t0.1\t12\t34"));
}

#[test]
fn test_pretty_flag_indents_file() {
    let (tmp, path) = setup_sample_project();

    dimchain(&tmp)
        .args(["add", "chain.json", "--pretty"])
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\n  \"cotes\""));
}

#[test]
fn test_completions() {
    let tmp = TempDir::new().unwrap();

    dimchain(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dimchain"));
}
