mod common;

use assert_cmd::prelude::*;
use common::{isolated_command, missing_config};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn db_cmd(dir: &Path, args: &[&str]) -> std::process::Command {
    let db = dir.join("data").join("todo.db");
    let mut cmd = isolated_command(&missing_config(dir));
    cmd.arg("db").args(args).arg("--db").arg(db);
    cmd
}

#[test]
fn init_creates_database_file() {
    let temp_dir = TempDir::new().unwrap();
    db_cmd(temp_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database ready"));

    assert!(temp_dir.path().join("data").join("todo.db").exists());
}

#[test]
fn seed_then_search_lists_demo_tasks() {
    let temp_dir = TempDir::new().unwrap();
    db_cmd(temp_dir.path(), &["seed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inserted demo project"));

    db_cmd(temp_dir.path(), &["search"])
        .assert()
        .success()
        .stdout(
            " 1 [1] write about select        [done    ] (2016-04-25)\n \
             2 [1] write about random        [waiting ] (2016-08-22)\n \
             3 [1] write about sqlite3       [active  ] (2017-07-31)\n",
        );
}

#[test]
fn seed_twice_is_harmless() {
    let temp_dir = TempDir::new().unwrap();
    db_cmd(temp_dir.path(), &["seed"]).assert().success();
    db_cmd(temp_dir.path(), &["seed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already present"));
}

#[test]
fn search_json_output() {
    let temp_dir = TempDir::new().unwrap();
    db_cmd(temp_dir.path(), &["seed"]).assert().success();

    let output = db_cmd(temp_dir.path(), &["search", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["id"], 1);
    assert_eq!(rows[0]["details"], "write about select");
    assert_eq!(rows[0]["status"], "done");
    assert_eq!(rows[0]["deadline"], "2016-04-25");
}

#[test]
fn search_unbalanced_group_fails() {
    let temp_dir = TempDir::new().unwrap();
    db_cmd(temp_dir.path(), &["seed"]).assert().success();

    db_cmd(temp_dir.path(), &["search", "--pattern", "x)|(?:about"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Search for 'x)|(?:about' failed"));
}

#[test]
fn search_with_custom_pattern() {
    let temp_dir = TempDir::new().unwrap();
    db_cmd(temp_dir.path(), &["seed"]).assert().success();

    db_cmd(temp_dir.path(), &["search", "--pattern", "write about s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("select"))
        .stdout(predicate::str::contains("sqlite3"))
        .stdout(predicate::str::contains("random").not());
}

#[test]
fn search_pattern_is_anchored() {
    let temp_dir = TempDir::new().unwrap();
    db_cmd(temp_dir.path(), &["seed"]).assert().success();

    db_cmd(temp_dir.path(), &["search", "--pattern", "about"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn search_invalid_pattern_fails() {
    let temp_dir = TempDir::new().unwrap();
    db_cmd(temp_dir.path(), &["seed"]).assert().success();

    db_cmd(temp_dir.path(), &["search", "--pattern", "("])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Search for '(' failed"));
}

#[test]
fn db_path_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("env.db");

    isolated_command(&missing_config(temp_dir.path()))
        .env("STDLIB_TOUR_DB", &db)
        .args(["db", "init"])
        .assert()
        .success();

    assert!(db.exists());
}
