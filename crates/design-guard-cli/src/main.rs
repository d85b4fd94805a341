//! design-guard CLI tool.
//!
//! Usage:
//! ```bash
//! design-guard [OPTIONS] <FILE>
//! design-guard --stdin < hook-payload.json
//! design-guard list-rules
//! design-guard init
//! ```

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Post-write guard that validates UI files against the project's design system
#[derive(Parser)]
#[command(name = "design-guard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Project root containing the design system document
    #[arg(long, global = true, env = "DESIGN_GUARD_ROOT", default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    check: CheckArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a file that was just written (default)
    Check(CheckArgs),

    /// List available rules
    ListRules,

    /// Create a starter design system document
    Init {
        /// Overwrite an existing document
        #[arg(long)]
        force: bool,
    },
}

/// Arguments for checking a single file.
#[derive(Args, Clone)]
pub struct CheckArgs {
    /// File that was just written
    file: Option<PathBuf>,

    /// Read the target from a hook payload (JSON with `tool_input.file_path`) on stdin
    #[arg(long, conflicts_with = "file")]
    stdin: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

/// Output format for violation reports.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report on stderr.
    #[default]
    Text,
    /// JSON on stdout.
    Json,
    /// One-line-per-violation on stderr.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let source = config_resolver::resolve(&cli.root, cli.config.as_deref());

    match cli.command {
        Some(Commands::Check(args)) => commands::check::run(&cli.root, &args, &source),
        None => commands::check::run(&cli.root, &cli.check, &source),
        Some(Commands::ListRules) => {
            commands::list_rules::run();
            Ok(())
        }
        Some(Commands::Init { force }) => commands::init::run(&cli.root, &source, force),
    }
}
