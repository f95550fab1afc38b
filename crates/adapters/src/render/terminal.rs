// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of the leak series for a terminal
//!
//! Each frame clears the screen and draws two bar charts, leaked MB and
//! leaked blocks, over the most recent samples.

use super::{RenderError, RenderSink};
use mld_core::SeriesPoint;
use std::fmt::Write as _;
use std::io::Write;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const DEFAULT_BAR_WIDTH: usize = 40;
const DEFAULT_ROWS: usize = 15;

/// Redraws the series to any writer (stdout in the CLI)
pub struct TerminalSink<W: Write + Send> {
    out: W,
    bar_width: usize,
    rows: usize,
    clear: bool,
}

impl<W: Write + Send> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            bar_width: DEFAULT_BAR_WIDTH,
            rows: DEFAULT_ROWS,
            clear: true,
        }
    }

    /// Number of most recent samples drawn per chart
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows.max(1);
        self
    }

    pub fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width.max(1);
        self
    }

    /// Append frames instead of clearing the screen (for piped output)
    pub fn without_clear(mut self) -> Self {
        self.clear = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> RenderSink for TerminalSink<W> {
    fn render(&mut self, series: &[SeriesPoint]) -> Result<(), RenderError> {
        if self.clear {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        let frame = render_frame(series, self.rows, self.bar_width);
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Draw one frame of the live view
pub fn render_frame(series: &[SeriesPoint], rows: usize, bar_width: usize) -> String {
    let bar_width = bar_width.max(1);
    let mut frame = String::new();
    let _ = writeln!(frame, "Live Memory Leak Monitor");

    let Some(latest) = series.last() else {
        let _ = writeln!(frame, "  waiting for first sample...");
        return frame;
    };

    let _ = writeln!(
        frame,
        "  {}  {:.3} MB in {} blocks  ({} samples)",
        latest.label(),
        latest.megabytes(),
        latest.total_leaks,
        series.len()
    );

    let window = &series[series.len().saturating_sub(rows)..];

    let _ = writeln!(frame, "\nLeaked Memory (MB)");
    let max_mb = window.iter().map(SeriesPoint::megabytes).fold(0.0, f64::max);
    for point in window {
        let _ = writeln!(
            frame,
            "  {} |{:<width$}| {:.3}",
            point.label(),
            bar(point.megabytes(), max_mb, bar_width, '#'),
            point.megabytes(),
            width = bar_width
        );
    }

    let _ = writeln!(frame, "\nLeaked Blocks");
    let max_blocks = window.iter().map(|p| p.total_leaks).max().unwrap_or(0) as f64;
    for point in window {
        let _ = writeln!(
            frame,
            "  {} |{:<width$}| {}",
            point.label(),
            bar(point.total_leaks as f64, max_blocks, bar_width, 'x'),
            point.total_leaks,
            width = bar_width
        );
    }

    frame
}

fn bar(value: f64, max: f64, width: usize, glyph: char) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * width as f64).round() as usize;
    std::iter::repeat(glyph).take(filled.clamp(1, width)).collect()
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod tests;
