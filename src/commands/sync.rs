//! The sync orchestrator: enumerate → capture → merge → persist, strictly
//! sequential and fail-fast. A partial, inconsistent doc set is worse than
//! a hard stop, so the first capture/template/IO failure aborts the run;
//! pages written before the failure stay as persisted.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use anyhow::{bail, Context, Result};
use clap::Args;
use console::{style, Term};

use crate::capture;
use crate::config::{self, Settings};
use crate::discover::{self, CommandInfo};
use crate::error::Outcome;
use crate::markers::MarkerPair;
use crate::merge::{self, MergeResult};
use crate::output::{self, PageReport};
use crate::store::DocStore;

#[derive(Args)]
pub struct SyncArgs {
    /// How to invoke the documented tool (binary path, or a wrapper like
    /// "go run ./cmd/pebble")
    #[arg(long, env = "DOCSYNC_TOOL")]
    tool: Option<String>,

    /// Display name used in invocation strings (defaults to the tool's
    /// file stem)
    #[arg(long)]
    tool_name: Option<String>,

    /// Directory holding the reference pages
    #[arg(long)]
    docs_root: Option<PathBuf>,

    /// Terminal width pinned for captures
    #[arg(long)]
    width: Option<u32>,

    /// Summary output format
    #[arg(long, value_enum, default_value = "table")]
    format: crate::OutputFormat,

    /// Exit non-zero if the run leaves uncommitted changes under the docs
    /// root (CI staleness signal)
    #[arg(long)]
    check: bool,
}

/// Completion state of a successful run. `Drifted` is the informational
/// staleness signal behind `--check`: the sync itself succeeded, but the
/// docs tree holds uncommitted changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Synced,
    Drifted,
}

pub fn handle(args: &SyncArgs) -> Result<ExitCode> {
    let file = config::load_file_config(Path::new("."))?;
    let settings = Settings::resolve(
        args.tool.as_deref(),
        args.tool_name.as_deref(),
        args.docs_root.as_deref(),
        args.width,
        &file,
    )?;
    match run(&settings, &args.format, args.check)? {
        RunStatus::Synced => Ok(ExitCode::SUCCESS),
        RunStatus::Drifted => Ok(ExitCode::FAILURE),
    }
}

pub fn run(settings: &Settings, format: &crate::OutputFormat, check: bool) -> Result<RunStatus> {
    let term = Term::stderr();
    // JSON summaries go to stdout; keep stderr quiet so pipelines stay clean.
    let silent = matches!(format, crate::OutputFormat::Json);

    let commands = discover::enumerate(&settings.tool)?;
    let store = DocStore::new(settings.docs_root.clone());
    let mut reports = Vec::with_capacity(commands.len() + 1);

    for info in &commands {
        if !silent {
            term.write_line(&format!("Processing docs for {}", style(&info.name).bold()))?;
        }
        let outcome = sync_page(&store, settings, info)?;
        if outcome == Outcome::Skipped && !silent {
            term.write_line("  no automated-output markers, leaving page untouched")?;
        }
        reports.push(PageReport {
            command: info.name.clone(),
            outcome,
            page: store.page_path(&info.name).display().to_string(),
        });
    }

    if !silent {
        term.write_line("Rebuilding command index")?;
    }
    let outcome = sync_index(&store, &commands)?;
    reports.push(PageReport {
        command: "(index)".to_string(),
        outcome,
        page: store.index_path().display().to_string(),
    });

    output::print_summary(&reports, format)?;

    if check && docs_tree_dirty(&settings.docs_root)? {
        term.write_line(&format!(
            "{}",
            style("Documentation pages changed; commit the updates.").yellow()
        ))?;
        return Ok(RunStatus::Drifted);
    }
    Ok(RunStatus::Synced)
}

/// Capture one command's help and merge it into its reference page.
fn sync_page(store: &DocStore, settings: &Settings, info: &CommandInfo) -> Result<Outcome> {
    let cap = capture::capture_help(&settings.tool, &info.name, settings.width)?;
    let markers = MarkerPair::for_command(&info.name);
    let block = merge::render_help_region(&markers, &cap.invocation, &cap.text);

    let path = store.page_path(&info.name);
    let existing = store.load(&path)?;
    let description = capture::description_from_help(&cap.text)
        .or_else(|| info.description.as_deref().map(capture::normalize_description))
        .unwrap_or_default();

    let result = merge::merge_document(
        existing.as_deref(),
        merge::PAGE_TEMPLATE,
        &[("command", &info.name), ("description", &description)],
        &markers,
        &block,
    )
    .with_context(|| format!("failed to merge docs for `{}`", info.name))?;

    Ok(match result {
        MergeResult::Updated(text) => {
            store.save(&path, &text)?;
            Outcome::Updated
        }
        MergeResult::Created(text) => {
            store.save(&path, &text)?;
            Outcome::Created
        }
        MergeResult::Skipped => Outcome::Skipped,
    })
}

/// Rebuild the index page's listing region from the full ordered command
/// list. Unlike per-command pages the index never opts out: a missing
/// marker pair here is an error, not a skip.
fn sync_index(store: &DocStore, commands: &[CommandInfo]) -> Result<Outcome> {
    let names: Vec<String> = commands.iter().map(|c| c.name.clone()).collect();
    let markers = MarkerPair::command_list();
    let block = merge::render_listing_region(&markers, &names);

    let path = store.index_path();
    let existing = store.load(&path)?;
    let result = merge::merge_document(existing.as_deref(), merge::INDEX_TEMPLATE, &[], &markers, &block)
        .context("failed to rebuild the command index")?;

    match result {
        MergeResult::Updated(text) => {
            store.save(&path, &text)?;
            Ok(Outcome::Updated)
        }
        MergeResult::Created(text) => {
            store.save(&path, &text)?;
            Ok(Outcome::Created)
        }
        MergeResult::Skipped => {
            bail!("index page {} has no command list markers", path.display())
        }
    }
}

fn parse_git_status(success: bool, stdout: &[u8]) -> Result<bool> {
    anyhow::ensure!(
        success,
        "git status failed; is the docs root inside a git repository?"
    );
    Ok(!stdout.is_empty())
}

/// True when the docs tree differs from git's last committed state. Runs
/// git from inside the docs root so the probe works regardless of the
/// caller's working directory.
fn docs_tree_dirty(docs_root: &Path) -> Result<bool> {
    let output = Command::new("git")
        .arg("-C")
        .arg(docs_root)
        .args(["status", "--porcelain", "--", "."])
        .output()
        .context("failed to run git")?;
    parse_git_status(output.status.success(), &output.stdout)
}
