use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = ".ngforge.json";

/// Project-wide scaffolding settings, loaded from `.ngforge.json`.
///
/// Always passed explicitly into the scaffolder; there is no ambient
/// project state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Default selector prefix applied when the caller specifies none.
    pub prefix: String,
    /// Directory that artifact paths are resolved against, relative to the
    /// tree root.
    pub source_root: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            prefix: "app".to_string(),
            source_root: PathBuf::from("src/app"),
        }
    }
}

impl ProjectConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Walk ancestor directories looking for a config file.
    pub fn find_config_file(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Load the nearest config above `start`, or fall back to defaults.
    pub fn load_or_default(start: &Path) -> Result<Self> {
        match Self::find_config_file(start) {
            Some(path) => {
                debug!("loading config from {}", path.display());
                Self::load_from_file(&path)
            }
            None => {
                debug!("no {CONFIG_FILE_NAME} found above {}", start.display());
                Ok(Self::default())
            }
        }
    }
}
