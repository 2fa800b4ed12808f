use std::io;
use std::path::PathBuf;

/// Errors that can occur during scaffolding operations.
///
/// Every variant is fatal: a failure anywhere aborts the whole operation and
/// nothing is committed to the tree.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parse failure in {path}: {reason}")]
    ParseFailure { path: PathBuf, reason: String },

    #[error("Tree-sitter error: {0}")]
    TreeSitter(String),

    #[error("No @{decorator} declaration found in {path}")]
    DeclarationNotFound { decorator: String, path: PathBuf },

    #[error("@{decorator} in {path} lacks a non-empty object-literal argument")]
    MalformedDeclaration { decorator: String, path: PathBuf },

    #[error("Property `{property}` in {path} is absent or not an array literal")]
    MissingCollection { property: String, path: PathBuf },

    #[error("Module resolution error: {0}")]
    ModuleResolution(String),

    #[error("Invalid selector: '{0}'")]
    InvalidSelector(String),

    #[error("Edit offset {offset} is not a valid insertion point in {path} ({len} bytes)")]
    EditOutOfRange {
        path: PathBuf,
        offset: usize,
        len: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for scaffolding operations
pub type Result<T> = std::result::Result<T, Error>;
