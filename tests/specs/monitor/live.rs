//! Live monitor specs
//!
//! Runs are bounded with `--duration` so they end on their own.

use crate::prelude::*;

#[test]
fn monitor_draws_frames_until_duration() {
    let temp = Project::with_ledger();
    temp.alloc("0x10", 1_048_576, false);
    temp.alloc("0x20", 1_048_576, false);

    temp.mld()
        .args(&[
            "monitor",
            "--interval",
            "100ms",
            "--duration",
            "450ms",
            "--no-clear",
        ])
        .passes()
        .stdout_has("Live Memory Leak Monitor")
        .stdout_has("2.000 MB in 2 blocks")
        .stdout_has("Leaked Memory (MB)")
        .stdout_has("Leaked Blocks")
        .stderr_has("Monitor stopped after");
}

#[test]
fn monitor_survives_missing_ledger() {
    let temp = Project::empty();

    let run = temp
        .mld()
        .args(&["monitor", "--interval", "100ms", "--duration", "350ms"])
        .passes()
        .stderr_has("Monitor stopped after 0 samples");
    assert!(run.stdout().is_empty());
}

#[test]
fn monitor_rejects_zero_interval() {
    Project::with_ledger()
        .mld()
        .args(&["monitor", "--interval", "0s", "--duration", "1s"])
        .fails()
        .stderr_has("interval");
}
