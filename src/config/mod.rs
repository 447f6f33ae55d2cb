pub mod check;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Unified dev server configuration. The header set, port and serving root
/// are all explicit per-instance values rather than process-wide constants.
#[derive(Debug, Clone, Parser)]
#[command(name = "serve")]
#[command(about = "Static dev server for local WASM demos")]
pub struct ServeConfig {
    /// Port to bind on all interfaces
    #[arg(long, default_value = "8000")]
    pub port: u16,

    /// Directory to serve files from
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Build-output subdirectory that must exist under the root before
    /// the server starts (e.g. "pkg" for wasm-pack output)
    #[arg(long)]
    pub require_dir: Option<String>,

    /// Add cross-origin isolation headers (COOP/COEP) for WASM threading
    #[arg(long)]
    pub isolated: bool,

    /// Open the default browser once the server is listening
    #[arg(long)]
    pub open: bool,

    /// Enable verbose output
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ServeConfig {
    pub fn serve_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    /// Resolve the serving root, failing fast if it (or the required
    /// build-output subdirectory) is missing.
    pub fn resolve_root(&self) -> Result<PathBuf> {
        ensure_dir(&self.root)?;

        if let Some(required) = &self.require_dir {
            ensure_dir(&self.root.join(required))?;
        }

        Ok(self.root.clone())
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(crate::utils::error::DevToolsError::MissingDirectoryError {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

impl Validate for ServeConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_port("port", self.port)?;
        validation::validate_path("root", &self.root.display().to_string())?;

        if let Some(required) = &self.require_dir {
            validation::validate_path("require_dir", required)?;
        }

        Ok(())
    }
}
