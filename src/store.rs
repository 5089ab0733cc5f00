//! Whole-document persistence. No merging logic lives here; overwrite is
//! destructive and unconditional (version control is the backup).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub struct DocStore {
    root: PathBuf,
}

impl DocStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of a single command's reference page.
    pub fn page_path(&self, command: &str) -> PathBuf {
        self.root.join(format!("{command}.md"))
    }

    /// Path of the index page listing all commands.
    pub fn index_path(&self) -> PathBuf {
        self.root.join("cli-commands.md")
    }

    /// Load a document, `None` when it does not exist yet.
    pub fn load(&self, path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("failed to read {}", path.display()))
            }
        }
    }

    /// Persist a document, replacing any previous content.
    pub fn save(&self, path: &Path, text: &str) -> Result<()> {
        fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_document_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocStore::new(dir.path().to_path_buf());
        assert!(store.load(&store.page_path("exec")).unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocStore::new(dir.path().to_path_buf());
        let path = store.page_path("exec");
        store.save(&path, "# exec\n").unwrap();
        assert_eq!(store.load(&path).unwrap().as_deref(), Some("# exec\n"));
    }

    #[test]
    fn save_overwrites_unconditionally() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocStore::new(dir.path().to_path_buf());
        let path = store.page_path("exec");
        store.save(&path, "old").unwrap();
        store.save(&path, "new").unwrap();
        assert_eq!(store.load(&path).unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn paths_follow_the_docs_root_convention() {
        let store = DocStore::new(PathBuf::from("docs/reference"));
        assert_eq!(store.page_path("exec"), PathBuf::from("docs/reference/exec.md"));
        assert_eq!(store.index_path(), PathBuf::from("docs/reference/cli-commands.md"));
    }
}
