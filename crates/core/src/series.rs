// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory leak time series for the live view
//!
//! The series is unbounded: it grows by one point per successful sample
//! for as long as its owner lives.

use chrono::NaiveDateTime;
use serde::Serialize;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// One sample of the unfreed set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub sampled_at: NaiveDateTime,
    pub total_bytes: u64,
    pub total_leaks: usize,
}

impl SeriesPoint {
    /// Axis label (`HH:MM:SS`)
    pub fn label(&self) -> String {
        self.sampled_at.format("%H:%M:%S").to_string()
    }

    /// Leaked memory in MB
    pub fn megabytes(&self) -> f64 {
        self.total_bytes as f64 / BYTES_PER_MB
    }
}

/// Time-ordered sequence of samples
#[derive(Debug, Default, Clone)]
pub struct TimeSeries {
    points: Vec<SeriesPoint>,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: SeriesPoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn last(&self) -> Option<&SeriesPoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
#[path = "series_tests.rs"]
mod tests;
