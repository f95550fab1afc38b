// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `mld monitor`

use super::Context;
use anyhow::Result;
use clap::Args;
use mld_adapters::{TerminalSink, TracedRenderSink};
use mld_core::SystemClock;
use mld_engine::LiveMonitor;
use std::time::Duration;

#[derive(Args)]
pub struct MonitorArgs {
    /// Sampling period, e.g. "2s" or "500ms" (default: monitor.interval)
    #[arg(long, value_parser = humantime::parse_duration)]
    pub interval: Option<Duration>,

    /// Stop after this long instead of waiting for Ctrl+C
    #[arg(long, value_parser = humantime::parse_duration)]
    pub duration: Option<Duration>,

    /// Append frames instead of redrawing the screen
    #[arg(long)]
    pub no_clear: bool,
}

pub async fn handle(args: MonitorArgs, ctx: &Context) -> Result<()> {
    let interval = args.interval.unwrap_or(ctx.config.monitor.interval);

    let mut sink = TerminalSink::new(std::io::stdout());
    if args.no_clear {
        sink = sink.without_clear();
    }

    let ledger = ctx.ledger();
    let database = ledger.inner().path().to_path_buf();
    let mut monitor = LiveMonitor::new(
        ledger,
        TracedRenderSink::new(sink),
        SystemClock,
        interval,
    )?;

    eprintln!(
        "Monitoring {} every {} (Ctrl+C to stop)",
        database.display(),
        humantime::format_duration(monitor.interval())
    );

    let run = monitor.run(stop_signal(args.duration)).await;

    eprintln!(
        "Monitor stopped after {} samples ({} skipped, {} render failures)",
        run.sampled, run.skipped, run.render_failures
    );
    Ok(())
}

/// Resolves on Ctrl+C, SIGTERM, or once `limit` has elapsed
async fn stop_signal(limit: Option<Duration>) {
    let deadline = async {
        match limit {
            Some(limit) => tokio::time::sleep(limit).await,
            None => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        _ = shutdown_signal() => {}
        _ = deadline => {}
    }
}

#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(error = %e, "failed to install SIGTERM handler");
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = sigterm.recv() => {}
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
