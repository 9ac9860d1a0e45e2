pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::{
    CheckCommand, CliCommand, CliContext, IdentifyCommand, ScanCommand, TypesCommand,
};

/// A lightweight error type for CLI commands
pub type CliError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Filesig - File Signature Checker
#[derive(Parser)]
#[command(
    name = "filesig",
    about = "Validate that a file's extension matches its binary signature",
    version,
    long_about = r#"
Filesig - File Signature Checker

Validates that a file's declared extension matches its actual content, using
known file-signature (magic number) prefixes.

EXIT CODES (check/scan):
  0  consistent
  1  inconsistent
  2  file missing, unreadable, or unusable input

EXAMPLES:
  filesig check upload.jpg       # Verify a single file
  filesig identify mystery.bin   # List types matching the observed header
  filesig types                  # Print the signature registry
  filesig scan ~/uploads         # Check every recognized file in a tree
"#
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(long, default_value = "table")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
pub enum OutputFormat {
    /// Human-readable table format
    Table,
    /// JSON format
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that a file's extension matches its observed header
    Check {
        /// File to check
        file: PathBuf,
    },

    /// List the file types consistent with a file's observed header
    Identify {
        /// File to identify
        file: PathBuf,
    },

    /// Print the registry of known types and signature prefixes
    Types,

    /// Recursively check every recognized file under the given directories
    Scan {
        /// Directories to scan (uses config paths if not specified)
        paths: Vec<PathBuf>,
    },
}

/// Dispatch a parsed command line, returning the process exit code.
pub fn run(cli: Cli) -> i32 {
    let ctx = CliContext::new(cli.format, cli.no_color);

    let command: Box<dyn CliCommand> = match cli.command {
        Commands::Check { file } => Box::new(CheckCommand { file }),
        Commands::Identify { file } => Box::new(IdentifyCommand { file }),
        Commands::Types => Box::new(TypesCommand),
        Commands::Scan { paths } => Box::new(ScanCommand { paths }),
    };

    match command.execute(&ctx) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            2
        }
    }
}
