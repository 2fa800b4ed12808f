//! Virtual file tree: read, staged write, atomic commit
//!
//! All mutation during a scaffolding operation happens against staged
//! overlay state; `commit` is the only point where anything reaches disk.

use crate::error::{Error, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A brand-new file to be written as part of a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    /// Path relative to the tree root.
    pub path: PathBuf,
    pub content: String,
}

/// An overlay over a project's files supporting read, staged update, and
/// all-or-nothing commit.
///
/// A tree may be rooted at a real directory (reads fall through to disk,
/// commits write through) or fully in-memory (fixtures and dry runs).
/// Paths are always relative to the root.
#[derive(Debug, Default)]
pub struct VirtualTree {
    root: Option<PathBuf>,
    files: BTreeMap<PathBuf, String>,
    staged: BTreeMap<PathBuf, String>,
}

impl VirtualTree {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn at_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            ..Self::default()
        }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Seed committed content directly, bypassing staging. Fixture setup only.
    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// Read a file's committed content: overlay first, then disk when rooted.
    pub fn read(&self, path: &Path) -> Result<String> {
        if let Some(content) = self.files.get(path) {
            return Ok(content.clone());
        }
        if let Some(root) = &self.root {
            let full = root.join(path);
            if full.is_file() {
                return Ok(std::fs::read_to_string(full)?);
            }
        }
        Err(Error::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} is not in the tree", path.display()),
        )))
    }

    pub fn exists(&self, path: &Path) -> bool {
        if self.files.contains_key(path) {
            return true;
        }
        match &self.root {
            Some(root) => root.join(path).is_file(),
            None => false,
        }
    }

    /// Files directly inside `dir`: the union of overlay entries and, for
    /// rooted trees, directory entries on disk.
    pub fn list_dir(&self, dir: &Path) -> Vec<PathBuf> {
        let mut out: BTreeSet<PathBuf> = self
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect();

        if let Some(root) = &self.root {
            if let Ok(entries) = std::fs::read_dir(root.join(dir)) {
                for entry in entries.flatten() {
                    if entry.path().is_file() {
                        out.insert(dir.join(entry.file_name()));
                    }
                }
            }
        }

        out.into_iter().collect()
    }

    /// Queue content for `path`. Nothing is visible to `read` until commit.
    pub fn stage(&mut self, path: &Path, content: String) {
        self.staged.insert(path.to_path_buf(), content);
    }

    pub fn staged_paths(&self) -> Vec<&Path> {
        self.staged.keys().map(PathBuf::as_path).collect()
    }

    pub fn staged_content(&self, path: &Path) -> Option<&str> {
        self.staged.get(path).map(String::as_str)
    }

    /// Commit the entire staged set as one unit.
    ///
    /// For rooted trees every file is written through to disk, creating
    /// parent directories as needed; a write failure propagates and the
    /// overlay keeps only what was already written. In-memory trees simply
    /// promote the staged set.
    pub fn commit(&mut self) -> Result<Vec<PathBuf>> {
        if let Some(root) = self.root.clone() {
            for (path, content) in &self.staged {
                let full = root.join(path);
                if let Some(parent) = full.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&full, content)?;
                debug!("wrote {}", full.display());
            }
        }

        let staged = std::mem::take(&mut self.staged);
        let committed: Vec<PathBuf> = staged.keys().cloned().collect();
        self.files.extend(staged);
        Ok(committed)
    }

    /// Drop all staged state, leaving committed content untouched.
    pub fn discard(&mut self) {
        if !self.staged.is_empty() {
            debug!("discarding {} staged file(s)", self.staged.len());
        }
        self.staged.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staged_content_invisible_until_commit() {
        let mut tree = VirtualTree::in_memory();
        tree.insert("a.ts", "old");
        tree.stage(Path::new("a.ts"), "new".to_string());

        assert_eq!(tree.read(Path::new("a.ts")).unwrap(), "old");
        tree.commit().unwrap();
        assert_eq!(tree.read(Path::new("a.ts")).unwrap(), "new");
    }

    #[test]
    fn test_discard_drops_staged_state() {
        let mut tree = VirtualTree::in_memory();
        tree.stage(Path::new("a.ts"), "content".to_string());
        tree.discard();

        assert!(tree.staged_paths().is_empty());
        assert!(!tree.exists(Path::new("a.ts")));
    }

    #[test]
    fn test_read_missing_file() {
        let tree = VirtualTree::in_memory();
        assert!(tree.read(Path::new("ghost.ts")).is_err());
    }

    #[test]
    fn test_list_dir_in_memory() {
        let mut tree = VirtualTree::in_memory();
        tree.insert("src/app/app.module.ts", "");
        tree.insert("src/app/app.component.ts", "");
        tree.insert("src/app/sub/other.ts", "");

        let listed = tree.list_dir(Path::new("src/app"));
        assert_eq!(
            listed,
            vec![
                PathBuf::from("src/app/app.component.ts"),
                PathBuf::from("src/app/app.module.ts"),
            ]
        );
    }

    #[test]
    fn test_rooted_tree_reads_and_commits_through_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("host.ts"), "on disk").unwrap();

        let mut tree = VirtualTree::at_root(dir.path());
        assert_eq!(tree.read(Path::new("host.ts")).unwrap(), "on disk");

        tree.stage(Path::new("deep/new.ts"), "fresh".to_string());
        tree.commit().unwrap();

        let written = std::fs::read_to_string(dir.path().join("deep/new.ts")).unwrap();
        assert_eq!(written, "fresh");
    }
}
