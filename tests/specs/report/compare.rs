//! Compare specs

use crate::prelude::*;

#[test]
fn compare_shows_signed_difference() {
    let temp = Project::with_ledger();
    temp.report("2026-03-01 09:00:00", 5, 500);
    temp.report("2026-03-02 09:00:00", 8, 900);

    temp.mld()
        .args(&["compare"])
        .passes()
        .stdout_has("=== EXECUTION COMPARISON ===")
        .stdout_has("Latest Report (2026-03-02 09:00:00):")
        .stdout_has("Previous Report (2026-03-01 09:00:00):")
        .stdout_has("Leaks: +3")
        .stdout_has("Bytes: +400");
}

#[test]
fn compare_shows_improvement_as_negative() {
    let temp = Project::with_ledger();
    temp.report("2026-03-01 09:00:00", 8, 900);
    temp.report("2026-03-02 09:00:00", 2, 100);

    temp.mld()
        .args(&["compare"])
        .passes()
        .stdout_has("Leaks: -6")
        .stdout_has("Bytes: -800");
}

#[test]
fn compare_ignores_older_reports() {
    let temp = Project::with_ledger();
    temp.report("2026-02-01 09:00:00", 100, 100_000);
    temp.report("2026-03-01 09:00:00", 5, 500);
    temp.report("2026-03-02 09:00:00", 5, 500);

    temp.mld()
        .args(&["compare"])
        .passes()
        .stdout_has("Leaks: +0")
        .stdout_has("Bytes: +0");
}

#[test]
fn compare_with_single_report_is_a_notice() {
    let temp = Project::with_ledger();
    temp.report("2026-03-01 09:00:00", 5, 500);

    temp.mld()
        .args(&["compare"])
        .passes()
        .stdout_has("Not enough reports for comparison (need at least 2)");
}

#[test]
fn compare_as_json() {
    let temp = Project::with_ledger();
    temp.report("2026-03-01 09:00:00", 5, 500);
    temp.report("2026-03-02 09:00:00", 8, 900);

    let json = temp
        .mld()
        .args(&["compare", "--format", "json"])
        .passes()
        .stdout_json();

    assert_eq!(json["leak_delta"], 3);
    assert_eq!(json["bytes_delta"], 400);
    assert_eq!(json["latest"]["total_leaks"], 8);
}

#[test]
fn compare_json_without_history() {
    let json = Project::with_ledger()
        .mld()
        .args(&["--format", "json", "compare"])
        .passes()
        .stdout_json();

    assert!(json["comparison"].is_null());
    assert_eq!(json["available"], 0);
    assert_eq!(json["required"], 2);
}
