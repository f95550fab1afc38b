// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering sinks for the live leak view

mod terminal;

pub use terminal::{render_frame, TerminalSink};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeRenderSink;

use mld_core::SeriesPoint;
use thiserror::Error;

/// Errors from drawing a frame
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Something that can redraw the full series on each tick
pub trait RenderSink: Send {
    fn render(&mut self, series: &[SeriesPoint]) -> Result<(), RenderError>;
}
