//! Project configuration for ngforge

mod settings;

pub use settings::{CONFIG_FILE_NAME, ProjectConfig};
