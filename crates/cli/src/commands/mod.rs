// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command handlers

pub mod compare;
pub mod export;
pub mod monitor;
pub mod summary;

use crate::error::MldError;
use crate::output::OutputFormat;
use anyhow::Result;
use mld_adapters::{SqliteLedger, TracedLedger};
use mld_core::{Config, SystemClock};
use mld_engine::{Reporter, ReporterConfig};
use std::path::{Path, PathBuf};

/// Resolved settings shared by every command
pub struct Context {
    pub config: Config,
    pub format: OutputFormat,
}

impl Context {
    /// Load the config file, then apply command-line overrides
    pub fn load(
        config_path: Option<&Path>,
        db: Option<PathBuf>,
        format: OutputFormat,
    ) -> Result<Self> {
        let loaded = match config_path {
            Some(path) => Config::load(path),
            None => Config::discover(&std::env::current_dir()?),
        };
        let mut config = loaded.map_err(MldError::config_invalid)?;
        if let Some(db) = db {
            config.database = db;
        }
        tracing::debug!(database = %config.database.display(), "configuration resolved");
        Ok(Self { config, format })
    }

    pub fn ledger(&self) -> TracedLedger<SqliteLedger> {
        TracedLedger::new(SqliteLedger::new(&self.config.database))
    }

    pub fn reporter(&self) -> Reporter<TracedLedger<SqliteLedger>, SystemClock> {
        Reporter::new(
            self.ledger(),
            SystemClock,
            ReporterConfig::from(&self.config),
        )
    }
}
