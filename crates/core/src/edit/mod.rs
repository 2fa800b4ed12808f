//! Staged text edits: insertion-point resolution, per-file recording, and
//! batch application against the virtual tree

mod committer;
mod recorder;
mod resolver;

pub use committer::{CommitSummary, apply_edits, commit};
pub use recorder::{Edit, EditRecorder};
pub use resolver::{Insertion, resolve_insertion};
