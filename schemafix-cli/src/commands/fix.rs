//! Fix command - rewrite migration files in place

use std::path::PathBuf;

use anyhow::Result;
use schemafix_core::{FileReport, RunReport};
use serde::Serialize;

use crate::output;

/// JSON output structure for a fix run
#[derive(Serialize)]
struct FixOutput {
    discovered: usize,
    fixed: usize,
    unchanged: usize,
    failed: usize,
    files: Vec<FileReport>,
}

pub fn run(
    dir: Option<PathBuf>,
    date_prefix: Option<String>,
    from: Option<u32>,
    to: Option<u32>,
    json: bool,
) -> Result<()> {
    let config = super::resolve_config(dir, date_prefix, from, to);
    let ctx = super::get_context(config)?;

    let files = ctx.selector_service.select()?;
    let mut report = RunReport::new(files.len());

    if !json {
        println!("Found {} migration files to fix", files.len());
    }

    // Per-file failures degrade to a logged line; the run always continues
    for path in &files {
        if !json {
            println!("Processing: {}", path.display());
        }

        match ctx.rewrite_service.rewrite_file(path) {
            Ok(true) => {
                if !json {
                    output::success(&format!("  ✓ Fixed: {}", path.display()));
                }
                report.record(FileReport::fixed(path));
            }
            Ok(false) => {
                if !json {
                    println!("  - No changes needed: {}", path.display());
                }
                report.record(FileReport::unchanged(path));
            }
            Err(e) => {
                if !json {
                    output::error(&format!("  ✗ Error processing {}: {:#}", path.display(), e));
                }
                report.record(FileReport::failed(path, format!("{:#}", e)));
            }
        }
    }

    if json {
        let output = FixOutput {
            discovered: report.discovered,
            fixed: report.fixed_count(),
            unchanged: report.unchanged_count(),
            failed: report.failed_count(),
            files: report.files,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!();
        println!("Done!");
    }

    Ok(())
}
