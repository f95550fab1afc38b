// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON export of the current leak set
//!
//! The artifact is written to a temporary file next to the destination and
//! renamed over it, so readers see either the previous file or the complete
//! new one.

use chrono::NaiveDateTime;
use mld_core::{format_timestamp, AllocationRecord, LeakSnapshot};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors that can occur writing or reading an export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level export document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedReport {
    /// Capture time of the export, ISO-8601
    pub generated: String,
    pub statistics: ExportStatistics,
    pub leaks: Vec<ExportedLeak>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportStatistics {
    pub total_leaks: usize,
    pub total_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedLeak {
    pub address: u64,
    pub size: u64,
    pub timestamp: String,
}

impl ExportedReport {
    /// Build the document from a snapshot and every unfreed record
    pub fn new(
        generated: NaiveDateTime,
        snapshot: &LeakSnapshot,
        records: &[AllocationRecord],
    ) -> Self {
        Self {
            generated: generated.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            statistics: ExportStatistics {
                total_leaks: snapshot.total_leaks,
                total_bytes: snapshot.total_bytes,
            },
            leaks: records
                .iter()
                .filter(|r| !r.freed)
                .map(|r| ExportedLeak {
                    address: r.address,
                    size: r.size,
                    timestamp: format_timestamp(&r.timestamp),
                })
                .collect(),
        }
    }
}

/// Write `report` to `path`, replacing any existing file
pub fn write_report(path: &Path, report: &ExportedReport) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Dropping the temp file on any early return removes it
    let tmp = temp_file_in(dir).map_err(io_err)?;
    // An existing artifact keeps its mode across the rename
    if let Ok(meta) = std::fs::metadata(path) {
        if meta.is_file() {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(io_err)?;
        }
    }
    {
        let mut writer = BufWriter::new(tmp.as_file());
        serde_json::to_writer_pretty(&mut writer, report)?;
        writer.write_all(b"\n").map_err(io_err)?;
        writer.flush().map_err(io_err)?;
    }
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    tracing::info!(
        path = %path.display(),
        leaks = report.leaks.len(),
        "report exported"
    );
    Ok(())
}

/// Temp file that a plain `File::create` would have produced: mode 0666
/// less the umask, instead of tempfile's owner-only default
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// Read an export back
pub fn read_report(path: &Path) -> Result<ExportedReport, ExportError> {
    let file = File::open(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
