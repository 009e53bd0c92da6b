//! CLI argument definitions.
//!
//! All arguments are defined with clap's derive macros. The main entry
//! point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// charmscan - Structural analysis of built charm directories.
#[derive(Debug, Parser)]
#[command(name = "charmscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run all checkers over a built charm directory
    Analyze(AnalyzeArgs),
}

/// Arguments for the `analyze` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AnalyzeArgs {
    /// Path to the unpacked charm directory
    pub path: PathBuf,

    /// Path to a charmscan.yml config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: human, json
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Attribute checkers to skip (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub ignore_attribute: Vec<String>,

    /// Warning/error checkers to skip (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub ignore_linter: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_analyze_with_defaults() {
        let cli = Cli::parse_from(["charmscan", "analyze", "build/my-charm"]);
        let Commands::Analyze(args) = cli.command;
        assert_eq!(args.path, PathBuf::from("build/my-charm"));
        assert_eq!(args.format, "human");
        assert!(args.ignore_attribute.is_empty());
    }

    #[test]
    fn parses_comma_separated_ignores() {
        let cli = Cli::parse_from([
            "charmscan",
            "analyze",
            ".",
            "--ignore-attribute",
            "language,framework",
        ]);
        let Commands::Analyze(args) = cli.command;
        assert_eq!(args.ignore_attribute, vec!["language", "framework"]);
    }
}
