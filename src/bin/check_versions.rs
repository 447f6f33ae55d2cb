use clap::Parser;
use motion_devtools::utils::{logger, validation::Validate};
use motion_devtools::{check_workspace, CheckConfig, DevToolsError};

fn main() -> anyhow::Result<()> {
    let config = CheckConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Checking crate versions against {}", config.manifest.display());
    if config.verbose {
        tracing::debug!("Check config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match check_workspace(&config) {
        Ok(report) => {
            if !report.skipped.is_empty() {
                tracing::info!(
                    "Skipped {} crate(s) without a manifest",
                    report.skipped.len()
                );
            }
            println!(
                "✅ All versions are consistent! ({} crates at {})",
                report.checked, report.workspace_version
            );
            Ok(())
        }
        Err(e @ DevToolsError::VersionMismatchError { .. }) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        // Missing or malformed root manifest: the check cannot proceed.
        Err(e) => Err(e.into()),
    }
}
