use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn exp(store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("exp").unwrap();
    cmd.arg("--file")
        .arg(store)
        .env("NO_COLOR", "1")
        .env_remove("EXP_FILE")
        .env_remove("EXP_LOG");
    cmd
}

fn add_lunch(store: &Path) {
    exp(store)
        .args([
            "add", "-a", "20.50", "-s", "lunch", "-c", "food", "-t", "2024-03-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense"));
}

fn stored(store: &Path) -> Vec<serde_json::Value> {
    serde_json::from_str(&fs::read_to_string(store).unwrap()).unwrap()
}

#[test]
fn version_flag() {
    Command::cargo_bin("exp")
        .unwrap()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn add_then_list() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("exps.json");

    add_lunch(&store);

    let output = exp(&store).arg("list").assert().success().get_output().stdout.clone();
    let table = String::from_utf8(output).unwrap();

    let row = table
        .lines()
        .find(|line| line.contains("lunch"))
        .expect("lunch row");
    let cells: Vec<_> = row
        .split('│')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();
    assert_eq!(cells, ["lunch", "20.50", "food", "2024-03-01"]);

    let records = stored(&store);
    assert_eq!(records.len(), 1);
    assert!(records[0]["id"].as_str().is_some_and(|id| id.len() == 36));
    assert_eq!(records[0]["amount"], "20.50");
}

#[test]
fn list_empty_store() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("exps.json");

    exp(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded yet."));

    assert_eq!(fs::read_to_string(&store).unwrap(), "[]");
}

#[test]
fn list_with_column_flag() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("exps.json");
    add_lunch(&store);

    exp(&store)
        .args(["list", "--date"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-01"))
        .stdout(predicate::str::contains("20.50").not());
}

#[test]
fn add_rejects_invalid_amount() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("exps.json");

    exp(&store)
        .args([
            "add", "-a", "12.345", "-s", "pens", "-c", "office", "-t", "2024-03-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("12.345"));

    assert!(stored(&store).is_empty());
}

#[test]
fn add_rejects_impossible_date() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("exps.json");

    exp(&store)
        .args(["add", "-a", "1", "-s", "x", "-c", "y", "-t", "2023-02-29"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("calendar date"));
}

#[test]
fn update_and_remove_by_id() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("exps.json");
    add_lunch(&store);
    let id = stored(&store)[0]["id"].as_str().unwrap().to_string();

    exp(&store)
        .args([
            "update", "--id", &id, "-a", "22", "-s", "brunch", "-c", "food", "-t", "2024-03-02",
        ])
        .assert()
        .success();

    let records = stored(&store);
    assert_eq!(records[0]["id"], id.as_str());
    assert_eq!(records[0]["description"], "brunch");
    assert_eq!(records[0]["amount"], "22");

    exp(&store).args(["remove", "--id", &id]).assert().success();
    assert!(stored(&store).is_empty());

    // A second removal is a quiet no-op
    exp(&store)
        .args(["remove", "--id", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing removed"));
}

#[test]
fn read_with_mode_shows_ids() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("exps.json");
    add_lunch(&store);
    let id = stored(&store)[0]["id"].as_str().unwrap().to_string();

    exp(&store)
        .args(["read", "--mode", "amount"])
        .assert()
        .success()
        .stdout(predicate::str::contains(id))
        .stdout(predicate::str::contains("20.50"));
}

#[test]
fn corrupt_store_is_reported_not_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("exps.json");
    fs::write(&store, "[{\"amount\":").unwrap();

    exp(&store)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("couldn't read"));

    exp(&store)
        .args(["add", "-a", "1", "-s", "x", "-c", "y", "-t", "2024-01-01"])
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&store).unwrap(), "[{\"amount\":");
}

#[test]
fn config_shows_store_path() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("exps.json");

    exp(&store)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("exps.json"));

    assert!(!store.exists());
}

#[test]
fn failed_write_leaves_store_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("exps.json");
    exp(&store).arg("list").assert().success();

    // The temp file used for the atomic write cannot be created
    fs::create_dir(temp_dir.path().join("exps.json.tmp")).unwrap();

    exp(&store)
        .args(["add", "-a", "1", "-s", "x", "-c", "y", "-t", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("saving"));

    assert_eq!(fs::read_to_string(&store).unwrap(), "[]");
}
