use std::path::{Path, PathBuf};

/// A single queued insertion, expressed against the original file text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Byte offset into the original text.
    pub offset: usize,
    pub text: String,
}

/// Ordered, append-only log of insertions scoped to one file.
///
/// The recorder performs no deduplication; callers resolve each insertion at
/// most once per target declaration per invocation.
#[derive(Debug)]
pub struct EditRecorder {
    path: PathBuf,
    edits: Vec<Edit>,
}

impl EditRecorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            edits: Vec::new(),
        }
    }

    pub fn insert(&mut self, offset: usize, text: impl Into<String>) {
        self.edits.push(Edit {
            offset,
            text: text.into(),
        });
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}
