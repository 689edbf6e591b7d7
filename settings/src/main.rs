//! Settings resolution CLI for the linecov coverage collector.
//!
//! Materializes a JSON configuration tree, resolves it against the supplied
//! test modules, and prints the resulting record as JSON — the same record
//! the collector hands to its instrumentation pipeline.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use settings::logging;
use settings::node::ConfigNode;
use settings::resolver::SettingsResolver;

/// Name surfaced in diagnostics and in the no-test-module failure.
const COLLECTOR_NAME: &str = "linecov collector";

#[derive(Parser)]
#[command(
    name = "settings",
    version,
    about = "Resolve linecov collector settings from a configuration tree"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve settings and print the record as pretty JSON.
    Resolve {
        /// JSON configuration tree; omit to resolve with defaults only.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Candidate test modules; only the first is instrumented.
        #[arg(required = false)]
        test_modules: Vec<String>,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Resolve {
            config,
            test_modules,
        } => cmd_resolve(config.as_deref(), &test_modules),
    }
}

fn cmd_resolve(config: Option<&std::path::Path>, test_modules: &[String]) -> Result<()> {
    let root = match config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("read {}", path.display()))?;
            let value: serde_json::Value = serde_json::from_str(&raw)
                .with_context(|| format!("parse {}", path.display()))?;
            Some(ConfigNode::from_json("Configuration", &value))
        }
        None => None,
    };

    let resolved = SettingsResolver::new(COLLECTOR_NAME).resolve(root.as_ref(), test_modules)?;

    let rendered =
        serde_json::to_string_pretty(&resolved).context("serialize resolved settings")?;
    println!("{rendered}");
    Ok(())
}
