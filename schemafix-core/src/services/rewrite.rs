//! Rewrite service - applies the rule table to files on disk
//!
//! The transformation itself is pure text to text; the service only adds
//! the read / compare / write-when-changed envelope around it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::rule::RewriteRule;
use crate::rules;

/// Service applying an ordered rule table to migration files
pub struct RewriteService {
    rules: Vec<RewriteRule>,
}

impl RewriteService {
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// Create a service with the built-in UUID-to-bigint rule table
    pub fn with_builtin_rules() -> crate::domain::Result<Self> {
        Ok(Self::new(rules::builtin_rules()?))
    }

    /// The rule table, in application order
    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// Run every rule over `text` in declared order
    pub fn apply_rules(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, rule| rule.apply(&acc))
    }

    /// Rewrite one file in place.
    ///
    /// Returns `true` when the content changed and was written back,
    /// `false` when the file was already in the target form (in which case
    /// it is not opened for writing at all). Read and write failures are
    /// returned to the caller; they affect only this file.
    pub fn rewrite_file(&self, path: &Path) -> Result<bool> {
        let original = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let updated = self.apply_rules(&original);
        if updated == original {
            return Ok(false);
        }

        fs::write(path, &updated)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(true)
    }
}
