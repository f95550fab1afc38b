// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `mld export`

use super::Context;
use crate::error::MldError;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::Args;
use serde_json::json;
use std::path::PathBuf;

#[derive(Args)]
pub struct ExportArgs {
    /// Destination file (default: export_path from config)
    pub path: Option<PathBuf>,
}

pub fn handle(args: ExportArgs, ctx: &Context) -> Result<()> {
    let path = args
        .path
        .unwrap_or_else(|| ctx.config.export_path.clone());

    let report = ctx
        .reporter()
        .export(&path)
        .map_err(|e| MldError::from_report(e, Some(&path)))?;

    match ctx.format {
        OutputFormat::Text => println!("Report exported to {}", path.display()),
        OutputFormat::Json => output::print_json(&json!({
            "path": path,
            "generated": report.generated,
            "statistics": report.statistics,
        })),
    }
    Ok(())
}
