// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake render sink for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{RenderError, RenderSink};
use mld_core::SeriesPoint;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct FakeRenderState {
    frames: Vec<Vec<SeriesPoint>>,
    failing: bool,
}

/// Records every frame it is asked to draw
#[derive(Clone, Default)]
pub struct FakeRenderSink {
    inner: Arc<Mutex<FakeRenderState>>,
}

impl FakeRenderSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every series received, in order
    pub fn frames(&self) -> Vec<Vec<SeriesPoint>> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .frames
            .clone()
    }

    pub fn frame_count(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).frames.len()
    }

    /// Make every render fail until reset
    pub fn set_failing(&self, failing: bool) {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).failing = failing;
    }
}

impl RenderSink for FakeRenderSink {
    fn render(&mut self, series: &[SeriesPoint]) -> Result<(), RenderError> {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if state.failing {
            return Err(RenderError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "fake sink closed",
            )));
        }
        state.frames.push(series.to_vec());
        Ok(())
    }
}
