//! Request and summary types for scaffolding operations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Kind of artifact to scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Directive,
    Component,
}

impl ArtifactKind {
    /// Suffix appended to the classified name, e.g. `FooDirective`.
    pub fn class_suffix(&self) -> &'static str {
        match self {
            ArtifactKind::Directive => "Directive",
            ArtifactKind::Component => "Component",
        }
    }

    pub fn file_infix(&self) -> &'static str {
        match self {
            ArtifactKind::Directive => "directive",
            ArtifactKind::Component => "component",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_infix())
    }
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "directive" | "d" => Ok(ArtifactKind::Directive),
            "component" | "c" => Ok(ArtifactKind::Component),
            other => Err(format!(
                "unknown artifact kind '{other}' (expected 'directive' or 'component')"
            )),
        }
    }
}

/// A single scaffolding request.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Artifact name, optionally with a leading path: `admin/highlight`.
    pub name: String,
    pub kind: ArtifactKind,
    /// `None` = unspecified (project default applies); `Some("")` = explicitly
    /// no prefix.
    pub prefix: Option<String>,
    /// File stem of the host module to register with, when several exist.
    pub module: Option<String>,
    /// Omit the `.spec.ts` template.
    pub skip_tests: bool,
    /// Place files directly in the target directory instead of a subfolder.
    pub flat: bool,
}

impl GenerateRequest {
    pub fn new(name: impl Into<String>, kind: ArtifactKind) -> Self {
        Self {
            name: name.into(),
            kind,
            prefix: None,
            module: None,
            skip_tests: false,
            flat: false,
        }
    }
}

/// What a successful generate committed.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateSummary {
    pub class_name: String,
    pub selector: String,
    /// Host declaration file that was (or would have been) edited.
    pub host_path: PathBuf,
    pub created: Vec<PathBuf>,
    pub updated: Vec<PathBuf>,
    /// True when the identifier was already present and no edit was recorded.
    pub already_registered: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_kind_from_str() {
        assert_eq!("directive".parse::<ArtifactKind>(), Ok(ArtifactKind::Directive));
        assert_eq!("c".parse::<ArtifactKind>(), Ok(ArtifactKind::Component));
        assert!("service".parse::<ArtifactKind>().is_err());
    }

    #[test]
    fn test_artifact_kind_display_roundtrip() {
        for kind in [ArtifactKind::Directive, ArtifactKind::Component] {
            assert_eq!(kind.to_string().parse::<ArtifactKind>(), Ok(kind));
        }
    }
}
