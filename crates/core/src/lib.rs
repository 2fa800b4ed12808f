//! ngforge-core - a structural-edit scaffolding engine
//!
//! This crate provides functionality to:
//! - Parse TypeScript source files and locate decorated host declarations
//! - Compute minimal, position-accurate insertions into a declaration's
//!   metadata without disturbing the rest of the file
//! - Render new artifact files from templates and commit everything as one
//!   staged, all-or-nothing transaction against a virtual file tree
pub mod config;
pub mod edit;
pub mod error;
pub mod naming;
pub mod parser;
pub mod resolve;
pub mod scaffolder;
pub mod template;
pub mod types;
pub mod validation;
pub mod vfs;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::ProjectConfig;
pub use scaffolder::{Plan, Scaffolder};
pub use vfs::{StagedFile, VirtualTree};
