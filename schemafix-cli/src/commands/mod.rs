//! CLI command implementations

pub mod fix;
pub mod rules;

use std::path::PathBuf;

use anyhow::{Context, Result};
use schemafix_core::{Config, SchemafixContext};

/// Get the migrations directory from flag, environment, or default
pub fn get_migrations_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        dir
    } else if let Ok(dir) = std::env::var("SCHEMAFIX_DIR") {
        PathBuf::from(dir)
    } else {
        PathBuf::from(schemafix_core::config::DEFAULT_MIGRATIONS_DIR)
    }
}

/// Build the run configuration from CLI overrides
pub fn resolve_config(
    dir: Option<PathBuf>,
    date_prefix: Option<String>,
    from: Option<u32>,
    to: Option<u32>,
) -> Config {
    let defaults = Config::default();
    Config {
        migrations_dir: get_migrations_dir(dir),
        date_prefix: date_prefix.unwrap_or(defaults.date_prefix),
        start_index: from.unwrap_or(defaults.start_index),
        end_index: to.unwrap_or(defaults.end_index),
    }
}

/// Get or create the schemafix context
pub fn get_context(config: Config) -> Result<SchemafixContext> {
    SchemafixContext::new(config).context("Failed to initialize schemafix context")
}
