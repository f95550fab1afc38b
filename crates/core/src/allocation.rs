// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Allocation records read from the ledger

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp formats accepted from the ledger, most common first.
///
/// The instrument writes `datetime('now')`; reporting runs may write ISO-8601.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// One allocation made by the tracked process.
///
/// `address` is an identifier from the tracked process, not a pointer
/// into this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRecord {
    pub address: u64,
    pub size: u64,
    /// UTC, as written by SQLite `datetime('now')`
    pub timestamp: NaiveDateTime,
    pub freed: bool,
}

impl AllocationRecord {
    /// Create an unfreed record
    pub fn unfreed(address: u64, size: u64, timestamp: NaiveDateTime) -> Self {
        Self {
            address,
            size,
            timestamp,
            freed: false,
        }
    }

    /// Address rendered the way the instrument records it (`%p`)
    pub fn address_hex(&self) -> String {
        format!("{:#x}", self.address)
    }
}

/// Parse an address handle as written by the instrument.
///
/// Accepts `0x`-prefixed hex (the `%p` form) or plain decimal.
pub fn parse_address(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => raw.parse().ok(),
    }
}

/// Parse a ledger timestamp in any of the accepted formats
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Format a ledger timestamp the way the instrument writes it
pub fn format_timestamp(time: &NaiveDateTime) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
#[path = "allocation_tests.rs"]
mod tests;
