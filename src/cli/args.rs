// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CG - Commit Gatekeeper
///
/// Validates commit headers and issue references before they enter history.
#[derive(Parser, Debug)]
#[command(name = "cg")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Commit gatekeeper", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to check if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// Get the effective command, defaulting to check.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Check(CheckArgs::default()))
    }
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate commit messages (default command)
    Check(CheckArgs),

    /// Print version information
    Version,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Commit or range to check
    #[arg(default_value = "HEAD")]
    pub target: String,

    /// Check all commits in a range
    #[arg(long)]
    pub range: bool,

    /// Validate a message given on the command line instead of a commit
    #[arg(short, long, conflicts_with = "file")]
    pub message: Option<String>,

    /// Validate the message in a file (e.g. .git/COMMIT_EDITMSG)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            target: "HEAD".to_string(),
            range: false,
            message: None,
            file: None,
        }
    }
}
