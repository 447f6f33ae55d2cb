use clap::Parser;
use motion_devtools::utils::{logger, validation::Validate};
use motion_devtools::{DevToolsError, ServeConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServeConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting motion-devtools static server");
    if config.verbose {
        tracing::debug!("Serve config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if let Err(e) = motion_devtools::server::run(config).await {
        tracing::error!("❌ Server failed: {}", e);
        eprintln!("❌ {}", e);

        if matches!(e, DevToolsError::MissingDirectoryError { .. }) {
            eprintln!("💡 Run 'wasm-pack build --target web --out-dir pkg' first");
        }

        std::process::exit(1);
    }

    Ok(())
}
