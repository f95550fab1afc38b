// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! mld - memory leak detector CLI
//!
//! Reads the allocation ledger written by the instrument and reports on
//! what is still unfreed.

mod commands;
mod error;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{compare, export, monitor, summary, Context};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::error::MldError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "mld",
    version,
    about = "Memory leak detector - analyze the allocation ledger"
)]
struct Cli {
    /// Allocation ledger database
    #[arg(long, global = true, env = "MLD_DB")]
    db: Option<PathBuf>,

    /// Config file (default: ./mld.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Current leaks, leak history and largest leaks (default)
    Summary(summary::SummaryArgs),
    /// Compare the two most recent leak reports
    Compare,
    /// Export every current leak to a JSON file
    Export(export::ExportArgs),
    /// Live view of leaked memory, refreshed on an interval
    Monitor(monitor::MonitorArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _log_guard = match logging::init(cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: failed to set up logging: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<MldError>() {
                Some(err) => eprint!("{}", err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let ctx = Context::load(cli.config.as_deref(), cli.db, cli.format)?;

    match cli.command {
        None => summary::handle(summary::SummaryArgs::default(), &ctx),
        Some(Commands::Summary(args)) => summary::handle(args, &ctx),
        Some(Commands::Compare) => compare::handle(&ctx),
        Some(Commands::Export(args)) => export::handle(args, &ctx),
        Some(Commands::Monitor(args)) => monitor::handle(args, &ctx).await,
    }
}
