use super::recorder::{Edit, EditRecorder};
use crate::error::{Error, Result};
use crate::vfs::{StagedFile, VirtualTree};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of a committed scaffolding transaction.
#[derive(Debug, Clone)]
pub struct CommitSummary {
    /// Existing files rewritten through recorded edits.
    pub updated: Vec<PathBuf>,
    /// Brand-new files written from the staged set.
    pub created: Vec<PathBuf>,
}

/// Apply queued insertions to the original text in one batch.
///
/// All offsets were computed against the untouched original, so edits are
/// applied highest-offset first: splicing near the end never shifts the
/// offsets still waiting to be applied. Edits sharing an offset keep their
/// recording order in the output.
pub fn apply_edits(path: &Path, original: &str, edits: &[Edit]) -> Result<String> {
    let mut ordered: Vec<&Edit> = edits.iter().collect();
    ordered.sort_by_key(|e| e.offset);

    let mut content = original.to_string();
    for edit in ordered.iter().rev() {
        if edit.offset > original.len() || !original.is_char_boundary(edit.offset) {
            return Err(Error::EditOutOfRange {
                path: path.to_path_buf(),
                offset: edit.offset,
                len: original.len(),
            });
        }
        content.insert_str(edit.offset, &edit.text);
    }
    Ok(content)
}

/// Stage every recorder's rewritten file and every new file, then commit the
/// whole set to the tree as one unit.
///
/// Each original is read exactly once. If anything fails before the final
/// commit, all staged state is discarded and the tree is left byte-identical.
pub fn commit(
    tree: &mut VirtualTree,
    recorders: Vec<EditRecorder>,
    staged_files: Vec<StagedFile>,
) -> Result<CommitSummary> {
    match stage_all(tree, &recorders, staged_files) {
        Ok(summary) => {
            tree.commit()?;
            Ok(summary)
        }
        Err(e) => {
            tree.discard();
            Err(e)
        }
    }
}

fn stage_all(
    tree: &mut VirtualTree,
    recorders: &[EditRecorder],
    staged_files: Vec<StagedFile>,
) -> Result<CommitSummary> {
    let mut updated = Vec::new();
    for recorder in recorders {
        let original = tree.read(recorder.path())?;
        let content = apply_edits(recorder.path(), &original, recorder.edits())?;
        debug!(
            "staging {} ({} edit(s))",
            recorder.path().display(),
            recorder.edits().len()
        );
        tree.stage(recorder.path(), content);
        updated.push(recorder.path().to_path_buf());
    }

    let mut created = Vec::new();
    for file in staged_files {
        debug!("staging new file {}", file.path.display());
        created.push(file.path.clone());
        tree.stage(&file.path, file.content);
    }

    Ok(CommitSummary { updated, created })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn edit(offset: usize, text: &str) -> Edit {
        Edit {
            offset,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_apply_single_edit() {
        let out = apply_edits(Path::new("a.ts"), "imports: [Bar]", &[edit(13, ", [Foo]")]).unwrap();
        assert_eq!(out, "imports: [Bar, [Foo]]");
    }

    #[test]
    fn test_two_edits_do_not_corrupt_each_other() {
        // Recorded low-offset first; neither order of recording may drift
        // the other's position.
        let original = "abcdef";
        let out = apply_edits(Path::new("a.ts"), original, &[edit(2, "X"), edit(4, "Y")]).unwrap();
        assert_eq!(out, "abXcdYef");

        let out = apply_edits(Path::new("a.ts"), original, &[edit(4, "Y"), edit(2, "X")]).unwrap();
        assert_eq!(out, "abXcdYef");
    }

    #[test]
    fn test_same_offset_keeps_recording_order() {
        let out = apply_edits(Path::new("a.ts"), "ab", &[edit(1, "1"), edit(1, "2")]).unwrap();
        assert_eq!(out, "a12b");
    }

    #[test]
    fn test_out_of_range_offset_is_fatal() {
        let err = apply_edits(Path::new("a.ts"), "ab", &[edit(3, "x")]).unwrap_err();
        assert!(matches!(err, Error::EditOutOfRange { .. }));
    }

    #[test]
    fn test_non_char_boundary_offset_is_fatal() {
        let err = apply_edits(Path::new("a.ts"), "é", &[edit(1, "x")]).unwrap_err();
        assert!(matches!(err, Error::EditOutOfRange { .. }));
    }

    #[test]
    fn test_commit_applies_edits_and_new_files() {
        let mut tree = VirtualTree::in_memory();
        tree.insert("host.ts", "imports: [Bar]");

        let mut recorder = EditRecorder::new("host.ts");
        recorder.insert(13, ", [Foo]");

        let staged = vec![StagedFile {
            path: PathBuf::from("foo.ts"),
            content: "export class Foo {}\n".to_string(),
        }];

        let summary = commit(&mut tree, vec![recorder], staged).unwrap();
        assert_eq!(summary.updated, vec![PathBuf::from("host.ts")]);
        assert_eq!(summary.created, vec![PathBuf::from("foo.ts")]);
        assert_eq!(tree.read(Path::new("host.ts")).unwrap(), "imports: [Bar, [Foo]]");
        assert_eq!(tree.read(Path::new("foo.ts")).unwrap(), "export class Foo {}\n");
    }

    #[test]
    fn test_failed_staging_leaves_tree_untouched() {
        let mut tree = VirtualTree::in_memory();
        tree.insert("host.ts", "short");

        let mut recorder = EditRecorder::new("host.ts");
        recorder.insert(999, "x");

        let staged = vec![StagedFile {
            path: PathBuf::from("foo.ts"),
            content: String::new(),
        }];

        let err = commit(&mut tree, vec![recorder], staged).unwrap_err();
        assert!(matches!(err, Error::EditOutOfRange { .. }));
        assert_eq!(tree.read(Path::new("host.ts")).unwrap(), "short");
        assert!(!tree.exists(Path::new("foo.ts")));
        assert!(tree.staged_paths().is_empty());
    }
}
