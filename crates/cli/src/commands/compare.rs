// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `mld compare`

use super::Context;
use crate::error::MldError;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use mld_core::{CompareError, MIN_REPORTS};
use mld_engine::ReportError;
use serde_json::json;

pub fn handle(ctx: &Context) -> Result<()> {
    match ctx.reporter().compare() {
        Ok(result) => {
            output::print(&result, ctx.format);
            Ok(())
        }
        // Too little history is a normal state early on, not a failure
        Err(ReportError::InsufficientData(CompareError::InsufficientData { available })) => {
            match ctx.format {
                OutputFormat::Text => println!(
                    "Not enough reports for comparison (need at least {})",
                    MIN_REPORTS
                ),
                OutputFormat::Json => output::print_json(&json!({
                    "comparison": null,
                    "available": available,
                    "required": MIN_REPORTS,
                })),
            }
            Ok(())
        }
        Err(e) => Err(MldError::from_report(e, None).into()),
    }
}
