pub mod manifest;

pub use manifest::{CrateManifest, VersionField, WorkspaceManifest};

use crate::config::check::CheckConfig;
use crate::utils::error::{DevToolsError, Result};

#[derive(Debug, Clone)]
pub struct CheckReport {
    pub workspace_version: String,
    pub checked: usize,
    pub skipped: Vec<String>,
}

/// Walk the configured members in order, comparing each literal version
/// against the workspace version. The first mismatch aborts the run; a
/// missing manifest is skipped with a warning.
pub fn check_workspace(config: &CheckConfig) -> Result<CheckReport> {
    let workspace = WorkspaceManifest::from_file(&config.manifest)?;
    let workspace_version = workspace.version().to_string();

    println!(
        "Checking {} crates against workspace version {}...",
        config.crates.len(),
        workspace_version
    );

    let mut checked = 0;
    let mut skipped = Vec::new();

    for name in &config.crates {
        let manifest_path = config.crate_manifest_path(name);

        if !manifest_path.exists() {
            println!(
                "⚠️  Warning: {} not found, skipping...",
                manifest_path.display()
            );
            skipped.push(name.clone());
            continue;
        }

        let manifest = CrateManifest::from_file(&manifest_path)?;

        match &manifest.package.version {
            VersionField::InheritsWorkspace { .. } => {
                tracing::debug!("{} inherits the workspace version", name);
            }
            VersionField::Literal(version) if version == &workspace_version => {
                tracing::debug!("{} is at {}", name, version);
            }
            VersionField::Literal(version) => {
                return Err(DevToolsError::VersionMismatchError {
                    crate_name: name.clone(),
                    crate_version: version.clone(),
                    workspace_version,
                });
            }
        }

        checked += 1;
    }

    Ok(CheckReport {
        workspace_version,
        checked,
        skipped,
    })
}
