//! Virtual crate used only to host the workspace-level integration tests.

pub use ngforge_core as core;
