use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::PathBuf;

/// Member crates checked by default, in workspace layout order.
pub const DEFAULT_CRATES: &[&str] = &[
    "motion-core",
    "motion-dom",
    "motion-gestures",
    "motion-layout",
    "motion-scroll",
    "motion-macros",
    "motion",
];

#[derive(Debug, Clone, Parser)]
#[command(name = "check-versions")]
#[command(about = "Check that member crate versions match the workspace version")]
pub struct CheckConfig {
    /// Path to the workspace root manifest
    #[arg(long, default_value = "Cargo.toml")]
    pub manifest: PathBuf,

    /// Directory containing the member crates
    #[arg(long, default_value = "crates")]
    pub crates_root: PathBuf,

    /// Member crate names to check, in order
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_CRATES.iter().map(|s| s.to_string()))]
    pub crates: Vec<String>,

    /// Enable verbose output
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CheckConfig {
    /// Conventional manifest path for one member crate.
    pub fn crate_manifest_path(&self, name: &str) -> PathBuf {
        self.crates_root.join(name).join("Cargo.toml")
    }
}

impl Validate for CheckConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("manifest", &self.manifest.display().to_string())?;
        validation::validate_path("crates_root", &self.crates_root.display().to_string())?;
        validation::validate_non_empty_list("crates", &self.crates)?;
        Ok(())
    }
}
