//! Summary specs
//!
//! `mld` with no subcommand and `mld summary` print the same report.

use crate::prelude::*;

fn three_leaks() -> Project {
    let temp = Project::with_ledger();
    temp.alloc("0x1000", 100, false);
    temp.alloc("0x2000", 200, false);
    temp.alloc("0x3000", 50, false);
    temp.alloc("0x4000", 4096, true);
    temp
}

#[test]
fn summary_shows_current_status() {
    three_leaks()
        .mld()
        .args(&["summary"])
        .passes()
        .stdout_has("MEMORY LEAK DETECTOR - ANALYSIS SUMMARY")
        .stdout_has("Total Leaked Allocations: 3")
        .stdout_has("Total Leaked Memory: 350 bytes")
        .stdout_has("Average Leak Size: 116.67 bytes")
        .stdout_lacks("4096");
}

#[test]
fn summary_is_the_default_command() {
    let temp = three_leaks();

    let explicit = temp.mld().args(&["summary"]).passes().stdout();
    let default = temp.mld().passes().stdout();

    assert_eq!(explicit, default);
}

#[test]
fn summary_lists_top_leaks_largest_first() {
    let run = three_leaks().mld().args(&["summary"]).passes();
    let stdout = run.stdout();

    let first = stdout.find("Address: 0x2000, Size: 200 bytes").unwrap();
    let second = stdout.find("Address: 0x1000, Size: 100 bytes").unwrap();
    let third = stdout.find("Address: 0x3000, Size: 50 bytes").unwrap();
    assert!(first < second && second < third, "{}", stdout);
}

#[test]
fn summary_top_flag_limits_list() {
    three_leaks()
        .mld()
        .args(&["summary", "--top", "1"])
        .passes()
        .stdout_has("1. Address: 0x2000, Size: 200 bytes")
        .stdout_lacks("Address: 0x1000")
        .stdout_has("Total Leaked Allocations: 3");
}

#[test]
fn summary_of_clean_ledger() {
    Project::with_ledger()
        .mld()
        .passes()
        .stdout_has("Total Leaked Allocations: 0")
        .stdout_has("Total Leaked Memory: 0 bytes")
        .stdout_has("No historical data yet")
        .stdout_lacks("Average Leak Size")
        .stdout_lacks("Top Leaks");
}

#[test]
fn summary_shows_history_and_change() {
    let temp = Project::with_ledger();
    temp.report("2026-03-01 09:00:00", 5, 500);
    temp.report("2026-03-02 09:00:00", 8, 900);

    temp.mld()
        .args(&["summary"])
        .passes()
        .stdout_has("1. 2026-03-02 09:00:00 - 8 leaks (900 bytes)")
        .stdout_has("2. 2026-03-01 09:00:00 - 5 leaks (500 bytes)")
        .stdout_has("Change Since Previous Report:")
        .stdout_has("Leaks: +3, Bytes: +400");
}

#[test]
fn summary_reads_database_from_env() {
    let temp = three_leaks();
    let elsewhere = Project::empty();

    elsewhere
        .mld()
        .env("MLD_DB", temp.db_path())
        .passes()
        .stdout_has("Total Leaked Allocations: 3");
}

#[test]
fn summary_respects_config_file() {
    let temp = three_leaks();
    temp.file("mld.toml", "top_n = 2\n");

    temp.mld()
        .passes()
        .stdout_has("2. Address: 0x1000")
        .stdout_lacks("Address: 0x3000");
}

#[test]
fn summary_as_json() {
    let temp = three_leaks();
    temp.report("2026-03-01 09:00:00", 1, 10);

    let json = temp
        .mld()
        .args(&["--format", "json", "summary"])
        .passes()
        .stdout_json();

    assert_eq!(json["snapshot"]["total_leaks"], 3);
    assert_eq!(json["snapshot"]["total_bytes"], 350);
    assert_eq!(json["snapshot"]["top"][0]["size"], 200);
    assert_eq!(json["history"].as_array().unwrap().len(), 1);
    assert!(json["comparison"].is_null());
}
