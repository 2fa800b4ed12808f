use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tree_sitter::{Parser, Tree};

/// A parsed source file.
///
/// Owns the tree-sitter tree for the duration of one scaffolding operation;
/// declaration sites borrow from it and are invalidated when it is dropped.
#[derive(Debug)]
pub struct SourceTree {
    tree: Tree,
    path: PathBuf,
}

impl SourceTree {
    pub fn root(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub struct TsParser {
    parser: Parser,
}

impl TsParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
            .map_err(|e| Error::TreeSitter(format!("Failed to set language: {e}")))?;
        Ok(Self { parser })
    }

    /// Parse `source` into a tree. The path is carried for diagnostics only.
    ///
    /// A file with syntax errors is rejected outright: scaffolding must never
    /// write into a file it cannot fully understand.
    pub fn parse(&mut self, source: &str, path: &Path) -> Result<SourceTree> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| Error::ParseFailure {
                path: path.to_path_buf(),
                reason: "parser produced no tree".to_string(),
            })?;

        if tree.root_node().has_error() {
            return Err(Error::ParseFailure {
                path: path.to_path_buf(),
                reason: "source contains syntax errors".to_string(),
            });
        }

        Ok(SourceTree {
            tree,
            path: path.to_path_buf(),
        })
    }
}
