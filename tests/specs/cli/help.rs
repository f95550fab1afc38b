//! Help and version specs

use crate::prelude::*;

#[test]
fn help_lists_every_command() {
    Project::empty()
        .mld()
        .args(&["--help"])
        .passes()
        .stdout_has("summary")
        .stdout_has("compare")
        .stdout_has("export")
        .stdout_has("monitor");
}

#[test]
fn version_prints_package_version() {
    Project::empty()
        .mld()
        .args(&["--version"])
        .passes()
        .stdout_has(env!("CARGO_PKG_VERSION"));
}
