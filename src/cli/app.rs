//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use tingen::output::OutputMode;

/// tingen - German tax identification number generator
#[derive(Parser, Debug)]
#[command(
    name = "tingen",
    version,
    about = "Generate syntactically valid German tax identification numbers",
    long_about = "Generate syntactically valid German tax identification numbers (Steuer-IdNr).\n\n\
                  Ten body digits contain exactly one digit twice or three times,\n\
                  followed by an ISO 7064 MOD 11,10 check digit."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a TIN (default)
    Generate {
        /// Generate a test TIN (may start with 0)
        #[arg(short, long, conflicts_with = "regular")]
        test: bool,

        /// Generate a regular TIN even if the config defaults to test TINs
        #[arg(short, long)]
        regular: bool,
    },

    /// Compute the check digit for a ten digit body
    CheckDigit {
        /// The ten leading digits
        body: String,
    },

    /// Show the effective configuration
    Config {
        /// Print only the config file path
        #[arg(long)]
        path: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config = cli.config.as_deref();

    match cli.command {
        Some(Command::Generate { test, regular }) => {
            commands::generate(test, regular, config, cli.verbose, output_mode)
        },
        None => commands::generate(false, false, config, cli.verbose, output_mode),
        Some(Command::CheckDigit { body }) => commands::check_digit(&body, output_mode),
        Some(Command::Config { path }) => commands::config(path, config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("tingen v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
    }
}
