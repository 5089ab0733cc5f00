//! Command enumeration via the tool's own `help --all` listing.

use anyhow::{Context, Result};
use regex::Regex;

use crate::config::Tool;
use crate::error::SyncError;

/// One discovered subcommand: its name and, when the listing carries one,
/// its one-line description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInfo {
    pub name: String,
    pub description: Option<String>,
}

/// Run `<tool> help --all` and parse the command listing.
pub fn enumerate(tool: &Tool) -> Result<Vec<CommandInfo>> {
    let output = tool
        .command()
        .args(["help", "--all"])
        .output()
        .with_context(|| format!("failed to run `{} help --all`", tool.name()))?;

    if !output.status.success() {
        return Err(SyncError::Discovery(format!(
            "`{} help --all` exited with {}",
            tool.name(), output.status
        ))
        .into());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_command_list(&stdout)?)
}

/// Parse the indented listing: one command per line, prefixed by exactly
/// four spaces, name optionally followed by a description. Names are
/// returned sorted and distinct.
pub fn parse_command_list(output: &str) -> Result<Vec<CommandInfo>, SyncError> {
    let line = Regex::new(r"(?m)^ {4}([A-Za-z0-9][A-Za-z0-9_-]*)[ \t]*(.*)$")
        .map_err(|err| SyncError::Discovery(err.to_string()))?;

    let mut commands: Vec<CommandInfo> = line
        .captures_iter(output)
        .map(|caps| {
            let description = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
            CommandInfo {
                name: caps[1].to_string(),
                description: (!description.is_empty()).then(|| description.to_string()),
            }
        })
        .collect();

    if commands.is_empty() {
        return Err(SyncError::Discovery(
            "no commands found in help listing".to_string(),
        ));
    }

    commands.sort_by(|a, b| a.name.cmp(&b.name));
    commands.dedup_by(|a, b| a.name == b.name);
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_indented_names_in_sorted_order() {
        let commands = parse_command_list("    foo\n    bar\n").unwrap();
        let names: Vec<_> = commands.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["bar", "foo"]);
    }

    #[test]
    fn captures_trailing_descriptions() {
        let commands = parse_command_list("    exec     Execute a remote command\n").unwrap();
        assert_eq!(
            commands[0].description.as_deref(),
            Some("Execute a remote command")
        );
    }

    #[test]
    fn description_is_none_when_absent() {
        let commands = parse_command_list("    exec\n").unwrap();
        assert!(commands[0].description.is_none());
    }

    #[test]
    fn ignores_section_headers_and_deeper_indentation() {
        let listing = "Commands:\n    add      Add a layer\n      wrapped detail line\n";
        let commands = parse_command_list(listing).unwrap();
        let names: Vec<_> = commands.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["add"]);
    }

    #[test]
    fn accepts_hyphenated_names() {
        let commands = parse_command_list("    run-all\n").unwrap();
        assert_eq!(commands[0].name, "run-all");
    }

    #[test]
    fn deduplicates_repeated_names() {
        let commands = parse_command_list("    exec  one\n    exec  two\n").unwrap();
        assert_eq!(commands.len(), 1);
    }

    #[test]
    fn empty_listing_is_a_discovery_error() {
        let err = parse_command_list("nothing indented here\n").unwrap_err();
        assert!(matches!(err, SyncError::Discovery(_)));
    }
}
