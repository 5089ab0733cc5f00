#![deny(clippy::print_stdout, clippy::print_stderr, clippy::absolute_paths)]

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod capture;
pub mod commands;
pub mod config;
pub mod discover;
pub mod error;
pub mod markers;
pub mod merge;
pub mod output;
pub mod store;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LONG_ABOUT: &str = "\
docsync - Keep CLI reference docs in sync with --help output

Typical workflow:
  1. Run a sync:        docsync sync --tool ./crane --docs-root docs/reference
  2. Review and commit the changed pages
  3. In CI, add --check so stale pages fail the build";

#[derive(Parser)]
#[command(name = "docsync")]
#[command(version = VERSION)]
#[command(about = "Keep CLI reference docs in sync with --help output")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Run the CLI command
    pub fn run(&self) -> Result<ExitCode> {
        match &self.command {
            Commands::Sync(args) => commands::sync::handle(args),
            Commands::Version => {
                console::Term::stdout().write_line(&format!("docsync-cli v{VERSION}"))?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

#[derive(Clone, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Synchronize reference pages with the tool's live help output
    Sync(commands::sync::SyncArgs),

    /// Show version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sync_with_tool_and_docs_root() {
        let cli = Cli::try_parse_from([
            "docsync",
            "sync",
            "--tool",
            "./crane",
            "--docs-root",
            "docs/reference",
        ]);
        assert!(cli.is_ok());
    }

    #[test]
    fn parses_sync_with_check_and_json_format() {
        let cli = Cli::try_parse_from([
            "docsync",
            "sync",
            "--tool",
            "crane",
            "--docs-root",
            "docs",
            "--check",
            "--format",
            "json",
        ]);
        assert!(cli.is_ok());
    }

    #[test]
    fn parses_version_subcommand() {
        assert!(Cli::try_parse_from(["docsync", "version"]).is_ok());
    }

    #[test]
    fn rejects_missing_subcommand() {
        assert!(Cli::try_parse_from(["docsync"]).is_err());
    }

    #[test]
    fn rejects_unknown_format() {
        let cli = Cli::try_parse_from(["docsync", "sync", "--format", "yaml"]);
        assert!(cli.is_err());
    }

    #[test]
    fn rejects_non_numeric_width() {
        let cli = Cli::try_parse_from(["docsync", "sync", "--width", "wide"]);
        assert!(cli.is_err());
    }
}
