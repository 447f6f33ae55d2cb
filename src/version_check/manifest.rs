use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceManifest {
    pub workspace: WorkspaceSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceSection {
    pub package: WorkspacePackage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspacePackage {
    pub version: String,
}

impl WorkspaceManifest {
    /// 從 TOML 檔案載入 workspace manifest
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn version(&self) -> &str {
        &self.workspace.package.version
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrateManifest {
    pub package: CratePackage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CratePackage {
    pub version: VersionField,
}

/// A member's version field, tagged by structural shape at parse time:
/// either a literal string or the workspace inheritance marker
/// (`version.workspace = true`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionField {
    Literal(String),
    InheritsWorkspace { workspace: bool },
}

impl VersionField {
    /// Inherited versions are consistent by construction.
    pub fn is_consistent_with(&self, workspace_version: &str) -> bool {
        match self {
            VersionField::InheritsWorkspace { .. } => true,
            VersionField::Literal(version) => version == workspace_version,
        }
    }
}

impl CrateManifest {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
