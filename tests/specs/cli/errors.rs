//! Error reporting specs
//!
//! Failures exit non-zero with a message on stderr and nothing on stdout.

use crate::prelude::*;

#[test]
fn missing_ledger_is_reported() {
    let temp = Project::empty();

    let run = temp
        .mld()
        .args(&["summary"])
        .fails()
        .stderr_has("Cannot read ledger")
        .stderr_has(LEDGER_FILE);
    assert!(run.stdout().is_empty());
}

#[test]
fn missing_ledger_fails_compare_and_export() {
    let temp = Project::empty();

    temp.mld().args(&["compare"]).fails().stderr_has("Cannot read ledger");
    temp.mld().args(&["export"]).fails().stderr_has("Cannot read ledger");
    assert!(!temp.path().join("leak_report.json").exists());
}

#[test]
fn ledger_without_tables_is_unavailable() {
    let temp = Project::empty();
    rusqlite::Connection::open(temp.db_path())
        .unwrap()
        .execute_batch("CREATE TABLE unrelated (x INTEGER);")
        .unwrap();

    temp.mld().args(&["summary"]).fails().stderr_has("Cannot read ledger");
}

#[test]
fn unknown_command_fails() {
    Project::with_ledger()
        .mld()
        .args(&["frobnicate"])
        .fails()
        .stderr_has("frobnicate");
}

#[test]
fn zero_top_is_rejected() {
    Project::with_ledger()
        .mld()
        .args(&["summary", "--top", "0"])
        .fails();
}

#[test]
fn invalid_config_is_reported() {
    let temp = Project::with_ledger();
    temp.file("mld.toml", "top_n = 0\n");

    temp.mld()
        .args(&["summary"])
        .fails()
        .stderr_has("Invalid configuration")
        .stderr_has("top_n");
}

#[test]
fn unknown_config_key_is_reported() {
    let temp = Project::with_ledger();
    temp.file("mld.toml", "colour = \"blue\"\n");

    temp.mld()
        .args(&["summary"])
        .fails()
        .stderr_has("Invalid configuration");
}
