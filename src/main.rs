//! align-tools: dependency alignment diff and reporting tool.

use align_tools::cli::{run_compare, CompareConfig};
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "align-tools")]
#[command(version)]
#[command(about = "Dependency alignment diff and reporting tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No changes detected
    1  Changes detected
    2  Error occurred

EXAMPLES:
    # Report what a realignment changed
    align-tools compare original.json realigned.json

    # CI/CD check with alignment properties and a report file
    align-tools compare original.json realigned.json \\
        -p align.properties -O alignment-report.txt")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `compare` subcommand
#[derive(Parser)]
struct CompareArgs {
    /// Snapshot of the project tree before realignment (JSON)
    original: PathBuf,

    /// Snapshot of the project tree after realignment (JSON)
    realigned: PathBuf,

    /// Properties file with alignment configuration (key=value lines)
    #[arg(short = 'p', long)]
    properties: Option<PathBuf>,

    /// Also report entries that were already aligned
    #[arg(long)]
    report_non_aligned: bool,

    /// Write the report to this file as well as the log (overwrite)
    #[arg(short = 'O', long)]
    report_output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare an original project tree against its realigned counterpart
    Compare(CompareArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Compare(args) => {
            let config = CompareConfig {
                original: args.original,
                realigned: args.realigned,
                properties: args.properties,
                report_non_aligned: args.report_non_aligned,
                report_output_file: args.report_output_file,
            };
            match run_compare(config) {
                Ok(0) => Ok(()),
                Ok(code) => std::process::exit(code),
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(2);
                }
            }
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "align-tools", &mut io::stdout());
            Ok(())
        }
    }
}
