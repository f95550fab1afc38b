// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Each error says what went wrong, why it might have happened, and how
//! to fix it.

use mld_adapters::LedgerError;
use mld_core::ConfigError;
use mld_engine::ReportError;
use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct MldError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl MldError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for MldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for MldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Builders for the failures users actually hit.
impl MldError {
    /// The ledger database could not be opened or read.
    pub fn store_unavailable(path: &Path, reason: &str) -> Self {
        MldError::new(format!("Cannot read ledger '{}'", path.display()))
            .with_context(reason.to_string())
            .with_context("The instrumented program may not have run yet")
            .with_suggestion("Run the instrumented program to create the ledger")
            .with_suggestion("Point at another database: mld --db <path> (or MLD_DB)")
    }

    /// The export artifact could not be written.
    pub fn export_failed(path: &Path, reason: &str) -> Self {
        MldError::new(format!("Failed to export report to '{}'", path.display()))
            .with_context(reason.to_string())
            .with_context("Any previous report at that path was left untouched")
            .with_suggestion("Check that the directory exists and is writable")
            .with_suggestion("Choose another destination: mld export <path>")
    }

    /// The configuration file could not be loaded.
    pub fn config_invalid(err: ConfigError) -> Self {
        MldError::new("Invalid configuration")
            .with_context(err.to_string())
            .with_suggestion("Fix or remove mld.toml, or pass another file with --config")
            .with_source(err)
    }

    /// Translate a reporter failure, keeping the database and destination
    /// in the message.
    pub fn from_report(err: ReportError, export_path: Option<&Path>) -> Self {
        let mapped = match &err {
            ReportError::Ledger(LedgerError::StoreUnavailable { path, reason }) => {
                MldError::store_unavailable(path, reason)
            }
            ReportError::ExportFailure(inner) => MldError::export_failed(
                export_path.unwrap_or_else(|| Path::new("<unknown>")),
                &inner.to_string(),
            ),
            _ => MldError::new(err.to_string()),
        };
        mapped.with_source(err)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
