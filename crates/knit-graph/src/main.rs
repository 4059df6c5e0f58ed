//! Knit Graph CLI - dependency graph diagnostics from the command line.
//!
//! Reads a graph as JSON, runs the analyzer and prints either the enriched
//! graph or a summary of what was found.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

/// Knit Graph: find cycles and unused edges in a dependency graph.
#[derive(Parser)]
#[command(name = "knit-graph")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Analyzer configuration file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the enriched graph as JSON
    Analyze {
        /// Graph JSON file ("-" reads stdin)
        input: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Lay out unpositioned nodes on the upload grid
        #[arg(long)]
        upload: bool,

        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// List circular dependencies
    Cycles {
        /// Graph JSON file ("-" reads stdin)
        input: PathBuf,
    },

    /// Summarize the findings
    Summary {
        /// Graph JSON file ("-" reads stdin)
        input: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::Analyze {
            input,
            output,
            upload,
            compact,
        } => cli::analyze::run(&input, output.as_deref(), config, upload, compact),
        Commands::Cycles { input } => cli::cycles::run(&input, config),
        Commands::Summary { input, json } => cli::summary::run(&input, config, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            for cause in e.chain().skip(1) {
                eprintln!("  {}: {cause}", "caused by".dimmed());
            }
            ExitCode::FAILURE
        }
    }
}
