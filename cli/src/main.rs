//! # ReadmeGen Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the readmegen CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the generate command handler
//!
//! ## Architecture
//!
//! readmegen has a single command, so its arguments are flattened straight
//! into the top-level parser instead of living under a subcommand. All errors
//! are propagated to this level for consistent handling: they are logged with
//! their full chain and printed as `Error: <message>` before exiting with
//! status 1.
//!
//! Logging goes to stderr so `--stdout` output stays clean. `RUST_LOG`, when
//! set, takes precedence over the `-v` count.
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! readmegen --help
//!
//! # Generate with increased verbosity
//! readmegen -vv ./my-project
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // The generate command and its pipeline
mod common; // Shared utilities (filesystem access and output I/O)
mod core; // Core infrastructure (errors, config, templating)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "readmegen",
    about = "📝 readmegen: Auto-generate README files from your project structure",
    long_about = "Analyzes a project directory (ecosystem, manifest, license, tests, layout)\n\
                  and renders a README from one of several template tiers.",
    version
)]
struct Cli {
    #[command(flatten)]
    generate: commands::generate::GenerateArgs,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = commands::generate::handle_generate(cli.generate) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
