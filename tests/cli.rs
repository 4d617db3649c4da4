#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn propdex_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("propdex"));
    cmd.env("PROPDEX_HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn json_names(stdout: &[u8]) -> Vec<String> {
    let records: Value = serde_json::from_slice(stdout).unwrap();
    records
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["Property Name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_default_command_shows_bundled_table() {
    let home = TempDir::new().unwrap();
    propdex_cmd(&home)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("Property Cost"))
        .stdout(predicate::str::contains("Flame Burst"))
        .stdout(predicate::str::contains("14 of 14 properties"));
}

#[test]
fn test_weapon_filter_and_name_search() {
    let home = TempDir::new().unwrap();
    let output = propdex_cmd(&home)
        .args([
            "--output", "json", "table", "--filter", "weapon=true", "--search", "name=SW",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        json_names(&output.stdout),
        vec!["Sword Dance", "Swordsmith's Pride"]
    );
}

#[test]
fn test_sort_cost_descending_keeps_ties_in_dataset_order() {
    let home = TempDir::new().unwrap();
    let output = propdex_cmd(&home)
        .args(["--output", "json", "table", "--sort", "cost", "--desc"])
        .output()
        .unwrap();

    assert_eq!(
        json_names(&output.stdout),
        vec![
            "Chain Blast",
            "Guardian Veil",
            "Swordsmith's Pride",
            "Sword Dance",
            "Recovery Boost",
            "Swift Boots",
            "Flame Burst",
            "Ice Shell",
            "Iron Skin",
            "Sharp Edge",
            "Attack Up",
            "Sweet Aroma",
            "Lucky Charm",
            "Soothing Mist",
        ]
    );
}

#[test]
fn test_table_marks_sorted_column() {
    let home = TempDir::new().unwrap();
    propdex_cmd(&home)
        .args(["--no-color", "table", "--sort", "grade", "--desc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Property Grade ▼"));
}

#[test]
fn test_grade_values_compare_as_strings() {
    let home = TempDir::new().unwrap();
    propdex_cmd(&home)
        .args(["--no-color", "values", "grade"])
        .assert()
        .success()
        .stdout("1\n10\n2\n3\n4\n5\n6\n7\nnull\n");
}

#[test]
fn test_cards_show_badges() {
    let home = TempDir::new().unwrap();
    propdex_cmd(&home)
        .args(["--no-color", "cards", "--filter", "heal=true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sweet Aroma  Cost 6"))
        .stdout(predicate::str::contains("Fusion: Sweet Aroma"))
        .stdout(predicate::str::contains(" Heal "))
        .stdout(predicate::str::contains("3 of 14 properties"))
        .stdout(predicate::str::contains("Flame Burst").not());
}

#[test]
fn test_show_single_property() {
    let home = TempDir::new().unwrap();
    propdex_cmd(&home)
        .args(["--no-color", "show", "ice", "shell"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ice Shell  Cost 10"));

    propdex_cmd(&home)
        .args(["--no-color", "show", "Nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No property named 'Nope'"));
}

#[test]
fn test_no_match_shows_empty_message() {
    let home = TempDir::new().unwrap();
    propdex_cmd(&home)
        .args(["--no-color", "table", "--filter", "cost=999"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No properties match the current filters.",
        ))
        .stdout(predicate::str::contains("0 of 14 properties"));
}

#[test]
fn test_unknown_field_warns() {
    let home = TempDir::new().unwrap();
    propdex_cmd(&home)
        .args(["--no-color", "table", "--filter", "colour=red"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Unknown field 'colour': its filter matches nothing",
        ))
        .stderr(predicate::str::contains("no such field"));
}

#[test]
fn test_fields_json() {
    let home = TempDir::new().unwrap();
    let output = propdex_cmd(&home)
        .args(["--output", "json", "fields"])
        .output()
        .unwrap();
    let fields: Value = serde_json::from_slice(&output.stdout).unwrap();
    let fields = fields.as_array().unwrap();

    assert_eq!(fields.len(), 12);
    assert_eq!(fields[0]["name"], "Property Name");
    let grade = fields
        .iter()
        .find(|f| f["name"] == "Property Grade")
        .unwrap();
    assert_eq!(grade["kind"], "ranked");
    assert_eq!(grade["control"], "choice");
}

#[test]
fn test_config_roundtrip_changes_default_view() {
    let home = TempDir::new().unwrap();

    propdex_cmd(&home)
        .args(["config", "cell-width", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cell-width must be at least 4"));

    propdex_cmd(&home)
        .args(["--no-color", "config", "view", "cards"])
        .assert()
        .success()
        .stdout(predicate::str::contains("view set to cards"));

    propdex_cmd(&home)
        .args(["--no-color", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("view = cards"))
        .stdout(predicate::str::contains("cell-width = 18"));

    propdex_cmd(&home)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("Flame Burst  Cost 10"));
}

#[test]
fn test_custom_dataset_from_flag_and_config() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("mini.json");
    fs::write(
        &data,
        r#"[
            {"Property Name": "Zed", "Property Cost": 3, "Property Grade": 2, "Weapon": true},
            {"Property Name": "Amber", "Property Cost": 1, "Property Grade": "10", "Weapon": false}
        ]"#,
    )
    .unwrap();

    let output = propdex_cmd(&home)
        .args(["--output", "json", "--data"])
        .arg(&data)
        .args(["table", "--sort", "grade"])
        .output()
        .unwrap();
    assert_eq!(json_names(&output.stdout), vec!["Amber", "Zed"]);

    propdex_cmd(&home)
        .args(["config", "data-path"])
        .arg(&data)
        .assert()
        .success();

    propdex_cmd(&home)
        .args(["--no-color", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 of 2 properties"));
}

#[test]
fn test_missing_dataset_fails() {
    let home = TempDir::new().unwrap();
    propdex_cmd(&home)
        .args(["--data"])
        .arg(home.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn test_browse_session() {
    let home = TempDir::new().unwrap();
    propdex_cmd(&home)
        .args(["--no-color", "browse"])
        .write_stdin("filter weapon true\nsearch name sw\nstate\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("filter: Weapon = true"))
        .stdout(predicate::str::contains("search: Property Name ~ sw"))
        .stdout(predicate::str::contains("2 of 14 properties"));
}
