use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const CONFIG_FILE: &str = "docsync.toml";

/// Pinned terminal width for captures; keeps help output byte-identical
/// across environments.
pub const DEFAULT_WIDTH: u32 = 80;

/// Optional `docsync.toml` in the working directory. Every field is also a
/// command-line flag; flags win.
#[derive(Deserialize, Default)]
pub struct FileConfig {
    pub tool: Option<String>,
    pub tool_name: Option<String>,
    pub docs_root: Option<PathBuf>,
    pub width: Option<u32>,
}

pub fn load_file_config(dir: &Path) -> Result<FileConfig> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(FileConfig::default());
    }

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

/// How to invoke the documented tool, plus the display name used in
/// invocation strings and templates (`crane`, not `./target/debug/crane`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    argv: Vec<String>,
    name: String,
}

impl Tool {
    /// `bin` is whitespace-split so wrappers like `go run ./cmd/crane`
    /// work; `name` defaults to the file stem of the first word.
    pub fn new(bin: &str, name: Option<&str>) -> Result<Self> {
        let argv: Vec<String> = bin.split_whitespace().map(str::to_string).collect();
        let program = argv.first().context("tool invocation is empty")?;

        let name = match name {
            Some(explicit) => explicit.to_string(),
            None => Path::new(program)
                .file_stem()
                .and_then(|stem| stem.to_str())
                .context("cannot derive a display name from the tool path")?
                .to_string(),
        };

        Ok(Self { argv, name })
    }

    /// Display name used in invocation strings and templates.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A `Command` for the tool itself, wrapper arguments included.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.argv[0]);
        cmd.args(&self.argv[1..]);
        cmd
    }
}

/// Fully resolved settings for one run: flags over file config over
/// defaults.
#[derive(Debug)]
pub struct Settings {
    pub tool: Tool,
    pub docs_root: PathBuf,
    pub width: u32,
}

impl Settings {
    pub fn resolve(
        tool: Option<&str>,
        tool_name: Option<&str>,
        docs_root: Option<&Path>,
        width: Option<u32>,
        file: &FileConfig,
    ) -> Result<Self> {
        let bin = tool
            .or(file.tool.as_deref())
            .context("no tool specified: pass --tool or set `tool` in docsync.toml")?;
        let name = tool_name.or(file.tool_name.as_deref());
        let docs_root = docs_root
            .or(file.docs_root.as_deref())
            .context("no docs root specified: pass --docs-root or set `docs_root` in docsync.toml")?
            .to_path_buf();
        let width = width.or(file.width).unwrap_or(DEFAULT_WIDTH);

        Ok(Self {
            tool: Tool::new(bin, name)?,
            docs_root,
            width,
        })
    }
}
