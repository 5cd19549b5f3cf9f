//! Schemafix CLI - one-shot UUID-to-bigint migration fixer

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{fix, rules};

/// Schemafix - rewrite UUID key columns to bigint identity keys
#[derive(Parser)]
#[command(name = "sfx", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite the selected migration files in place
    Fix {
        /// Directory containing the migration files
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Date prefix of the target migration filenames
        #[arg(long)]
        date_prefix: Option<String>,
        /// First migration index to include
        #[arg(long)]
        from: Option<u32>,
        /// Last migration index to include
        #[arg(long)]
        to: Option<u32>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the rewrite rules that fix applies
    Rules {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Fix { dir, date_prefix, from, to, json } => {
            fix::run(dir, date_prefix, from, to, json)
        }
        Commands::Rules { json } => rules::run(json),
    }
}
