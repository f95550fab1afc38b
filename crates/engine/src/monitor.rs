// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Live leak monitoring.
//!
//! Samples the unfreed set on a fixed period and redraws the whole series
//! through a render sink. The series belongs to the monitor, lives for one
//! run, and is cleared on stop. It is not capped: a long run grows it by
//! one point per successful tick.

use crate::MonitorError;
use mld_adapters::{Ledger, RenderSink};
use mld_core::{compute_snapshot, Clock, SeriesPoint, TimeSeries};
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Where the monitor is in its loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Idle,
    Sampling,
    Stopped,
}

/// Result of one tick
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// A point was appended and the series forwarded to the sink
    Sampled(SeriesPoint),
    /// The ledger could not be read; the series is unchanged
    Skipped,
    /// The monitor was already stopped
    Stopped,
}

/// Counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonitorRun {
    pub ticks: u64,
    pub sampled: u64,
    pub skipped: u64,
    pub render_failures: u64,
}

pub struct LiveMonitor<L, S, C> {
    ledger: L,
    sink: S,
    clock: C,
    interval: Duration,
    series: TimeSeries,
    state: MonitorState,
    run: MonitorRun,
}

impl<L: Ledger, S: RenderSink, C: Clock> LiveMonitor<L, S, C> {
    /// Fails with `ZeroInterval` for a zero period
    pub fn new(ledger: L, sink: S, clock: C, interval: Duration) -> Result<Self, MonitorError> {
        if interval.is_zero() {
            return Err(MonitorError::ZeroInterval);
        }
        Ok(Self {
            ledger,
            sink,
            clock,
            interval,
            series: TimeSeries::new(),
            state: MonitorState::Idle,
            run: MonitorRun::default(),
        })
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Sample once and redraw.
    ///
    /// A ledger failure skips the tick instead of ending the monitor.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state == MonitorState::Stopped {
            return TickOutcome::Stopped;
        }

        self.state = MonitorState::Sampling;
        self.run.ticks += 1;

        let outcome = match self.ledger.fetch_unfreed() {
            Ok(records) => {
                let snapshot = compute_snapshot(&records, 0);
                let point = SeriesPoint {
                    sampled_at: self.clock.now(),
                    total_bytes: snapshot.total_bytes,
                    total_leaks: snapshot.total_leaks,
                };
                self.series.push(point.clone());
                self.run.sampled += 1;

                if let Err(e) = self.sink.render(self.series.points()) {
                    self.run.render_failures += 1;
                    tracing::warn!(error = %e, "redraw failed");
                }
                TickOutcome::Sampled(point)
            }
            Err(e) => {
                self.run.skipped += 1;
                tracing::warn!(
                    error = %e,
                    tick = self.run.ticks,
                    "ledger unavailable, skipping sample"
                );
                TickOutcome::Skipped
            }
        };

        self.state = MonitorState::Idle;
        outcome
    }

    /// Tick every interval until `stop` resolves.
    ///
    /// Ticks run to completion inside the loop, so they never overlap; a
    /// slow tick delays the next one rather than bunching them up.
    pub async fn run<F>(&mut self, stop: F) -> MonitorRun
    where
        F: Future<Output = ()>,
    {
        if self.state == MonitorState::Stopped {
            return self.run;
        }

        tracing::info!(interval_ms = self.interval.as_millis() as u64, "monitor started");

        let mut timer = tokio::time::interval(self.interval);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(stop);

        loop {
            tokio::select! {
                biased;
                _ = &mut stop => break,
                _ = timer.tick() => {
                    self.tick();
                }
            }
        }

        self.stop()
    }

    /// Stop the monitor and drop the accumulated series
    pub fn stop(&mut self) -> MonitorRun {
        self.state = MonitorState::Stopped;
        self.series.clear();
        tracing::info!(
            ticks = self.run.ticks,
            sampled = self.run.sampled,
            skipped = self.run.skipped,
            "monitor stopped"
        );
        self.run
    }
}

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod tests;
