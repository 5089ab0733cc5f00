//! Help-text capture for a single command.

use anyhow::Result;
use regex::Regex;

use crate::config::Tool;
use crate::error::SyncError;

/// One command's captured help: the verbatim (trimmed) stdout plus the
/// invocation string a user would type to reproduce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpCapture {
    pub command: String,
    pub text: String,
    pub invocation: String,
}

/// The arguments of the canonical help invocation. The `help` command is
/// special-cased: `<tool> help --help` would document the wrong thing.
fn help_args(command: &str) -> Vec<&str> {
    if command == "help" {
        vec!["help"]
    } else {
        vec![command, "--help"]
    }
}

/// Run the command's help invocation under a pinned terminal width so
/// repeated runs on an unchanged tool produce byte-identical captures.
pub fn capture_help(tool: &Tool, command: &str, width: u32) -> Result<HelpCapture, SyncError> {
    let args = help_args(command);
    let output = tool
        .command()
        .args(&args)
        .env("COLUMNS", width.to_string())
        .output()
        .map_err(|err| SyncError::Capture {
            command: command.to_string(),
            reason: err.to_string(),
        })?;

    if !output.status.success() {
        return Err(SyncError::Capture {
            command: command.to_string(),
            reason: format!("exited with {}", output.status),
        });
    }

    Ok(HelpCapture {
        command: command.to_string(),
        text: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        invocation: format!("{} {}", tool.name(), args.join(" ")),
    })
}

/// Turn a raw one-liner into template form: trimmed, trailing period
/// stripped, first letter lower-cased. The template supplies the
/// surrounding sentence.
pub fn normalize_description(raw: &str) -> String {
    let raw = raw.trim().trim_end_matches('.');
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_lowercase(), chars.as_str()),
        None => String::new(),
    }
}

/// Extract the description from captured help text: the first sentence of
/// the paragraph following the `Usage:` block, normalized for the
/// template.
pub fn description_from_help(help_text: &str) -> Option<String> {
    let pattern = Regex::new(r"(?s)Usage:\n.*?\n\n(.*?\.)\n").ok()?;
    let sentence = pattern.captures(help_text)?.get(1)?.as_str();
    Some(normalize_description(sentence))
}
