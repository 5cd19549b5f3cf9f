//! Selector service - migration file discovery
//!
//! Builds one glob per index in the configured range and collects every
//! directory entry that matches, index-major. The directory itself is
//! scanned once.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use globset::{Glob, GlobMatcher};

use crate::config::Config;

/// Zero-padding width of the index embedded in migration filenames
const INDEX_PAD: usize = 6;

/// Service for selecting the migration files to rewrite
pub struct SelectorService {
    config: Config,
}

impl SelectorService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Discover migration files for every index in the configured range.
    ///
    /// A missing directory, an empty range, or a range matching no files
    /// yields an empty list; none of these is an error.
    pub fn select(&self) -> Result<Vec<PathBuf>> {
        let dir = &self.config.migrations_dir;
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries: Vec<(String, PathBuf)> = Vec::new();
        let read_dir = fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory {}", dir.display()))?;
        for entry in read_dir {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                let name = entry.file_name().to_string_lossy().into_owned();
                entries.push((name, entry.path()));
            }
        }

        let mut selected = Vec::new();
        for index in self.config.index_range() {
            let matcher = self.matcher_for(index)?;
            for (name, path) in &entries {
                if matcher.is_match(name.as_str()) {
                    selected.push(path.clone());
                }
            }
        }

        Ok(selected)
    }

    fn matcher_for(&self, index: u32) -> crate::domain::Result<GlobMatcher> {
        let pattern = format!(
            "{}_{:0pad$}_*.php",
            self.config.date_prefix,
            index,
            pad = INDEX_PAD
        );
        Ok(Glob::new(&pattern)?.compile_matcher())
    }
}
