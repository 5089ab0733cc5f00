#![deny(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use clap::Parser;
use docsync_cli::Cli;

fn main() -> ExitCode {
    match Cli::parse().run() {
        Ok(code) => code,
        Err(err) => {
            let _ = console::Term::stderr().write_line(&format!("Error: {err:#}"));
            ExitCode::FAILURE
        }
    }
}
