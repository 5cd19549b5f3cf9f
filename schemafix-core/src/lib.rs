//! Schemafix Core - UUID-to-bigint migration file rewriting
//!
//! This crate owns the whole rewrite pipeline:
//!
//! - **domain**: rewrite rules and run-report types
//! - **rules**: the built-in, ordered rule table
//! - **services**: file selection and in-place rewriting
//! - **config**: selector parameters, defaulting to the target batch

pub mod config;
pub mod domain;
pub mod rules;
pub mod services;

use anyhow::Result;

pub use config::Config;
pub use domain::{Error, FileReport, FileStatus, RewriteRule, RunReport};

use services::{RewriteService, SelectorService};

/// Main context for schemafix operations
///
/// Entry point for the CLI: holds the configuration and the two services,
/// with the built-in rule table compiled once up front.
pub struct SchemafixContext {
    pub config: Config,
    pub selector_service: SelectorService,
    pub rewrite_service: RewriteService,
}

impl SchemafixContext {
    /// Create a new schemafix context
    pub fn new(config: Config) -> Result<Self> {
        let selector_service = SelectorService::new(config.clone());
        let rewrite_service = RewriteService::with_builtin_rules()?;

        Ok(Self {
            config,
            selector_service,
            rewrite_service,
        })
    }
}
