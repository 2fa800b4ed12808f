//! Host declaration file resolution
//!
//! Finds the file whose decorated declaration the scaffolder must extend:
//! starting at the requested directory and walking up to the source root,
//! a lone `*.module.ts` wins, then a lone `*.component.ts` (a standalone
//! host). Absence and ambiguity are both fatal.

use crate::error::{Error, Result};
use crate::vfs::VirtualTree;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    Module,
    StandaloneComponent,
}

impl HostKind {
    /// The decorator the locator must search this host for.
    pub fn decorator(&self) -> &'static str {
        match self {
            HostKind::Module => "NgModule",
            HostKind::StandaloneComponent => "Component",
        }
    }
}

/// The file hosting the declaration to extend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostFile {
    pub path: PathBuf,
    pub kind: HostKind,
}

pub fn find_host_file(
    tree: &VirtualTree,
    dir: &Path,
    source_root: &Path,
    hint: Option<&str>,
) -> Result<HostFile> {
    let mut current = Some(dir.to_path_buf());
    while let Some(cur) = current {
        if let Some(host) = host_in_dir(tree, &cur, hint)? {
            debug!("resolved host {} ({:?})", host.path.display(), host.kind);
            return Ok(host);
        }
        if cur == source_root {
            break;
        }
        current = cur.parent().map(Path::to_path_buf);
    }

    Err(Error::ModuleResolution(format!(
        "no module or standalone component found between {} and {}",
        dir.display(),
        source_root.display()
    )))
}

fn host_in_dir(tree: &VirtualTree, dir: &Path, hint: Option<&str>) -> Result<Option<HostFile>> {
    let entries = tree.list_dir(dir);

    let modules = matching(&entries, ".module.ts", hint);
    match modules.len() {
        0 => {}
        1 => {
            return Ok(Some(HostFile {
                path: modules[0].clone(),
                kind: HostKind::Module,
            }));
        }
        _ => return Err(ambiguous(dir, &modules)),
    }

    let components = matching(&entries, ".component.ts", hint);
    match components.len() {
        0 => Ok(None),
        1 => Ok(Some(HostFile {
            path: components[0].clone(),
            kind: HostKind::StandaloneComponent,
        })),
        _ => Err(ambiguous(dir, &components)),
    }
}

fn matching(entries: &[PathBuf], suffix: &str, hint: Option<&str>) -> Vec<PathBuf> {
    entries
        .iter()
        .filter(|p| {
            let Some(name) = p.file_name().and_then(|n| n.to_str()) else {
                return false;
            };
            if !name.ends_with(suffix) {
                return false;
            }
            match hint {
                Some(stem) => name == format!("{stem}{suffix}"),
                None => true,
            }
        })
        .cloned()
        .collect()
}

fn ambiguous(dir: &Path, candidates: &[PathBuf]) -> Error {
    let names: Vec<String> = candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    Error::ModuleResolution(format!(
        "ambiguous host in {}: {} (disambiguate with a module hint)",
        dir.display(),
        names.join(", ")
    ))
}
