// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `mld summary`

use super::Context;
use crate::error::MldError;
use crate::output;
use anyhow::Result;
use clap::Args;
use mld_engine::{Reporter, ReporterConfig};

#[derive(Args, Default)]
pub struct SummaryArgs {
    /// Number of largest leaks to list
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub top: Option<u64>,

    /// Number of historical reports to list
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub history: Option<u64>,
}

pub fn handle(args: SummaryArgs, ctx: &Context) -> Result<()> {
    let mut config = ReporterConfig::from(&ctx.config);
    if let Some(top) = args.top {
        config.top_n = usize::try_from(top)?;
    }
    if let Some(history) = args.history {
        config.history_limit = usize::try_from(history)?;
    }

    let reporter = Reporter::new(ctx.ledger(), mld_core::SystemClock, config);
    let summary = reporter
        .summarize()
        .map_err(|e| MldError::from_report(e, None))?;

    output::print(&summary, ctx.format);
    Ok(())
}
