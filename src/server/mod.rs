pub mod headers;
pub mod router;

pub use headers::HeaderSet;
pub use router::create_router;

use crate::config::ServeConfig;
use crate::utils::error::Result;
use std::net::SocketAddr;
use std::process::Command;
use tokio::net::TcpListener;

/// Bind the listener and serve until interrupted. Startup failures (missing
/// directory, port in use) are fatal; per-request errors are isolated by the
/// connection handling underneath.
pub async fn run(config: ServeConfig) -> Result<()> {
    let root = config.resolve_root()?;
    let app = create_router(&config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    println!("🚀 Serving {} at {}", root.display(), config.serve_url());
    if config.isolated {
        println!("🔒 Cross-origin isolation headers enabled");
    }
    println!("⏹️  Press Ctrl+C to stop");

    tracing::info!("Listening on {}", addr);

    if config.open {
        open_browser(&config.serve_url());
    }

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    println!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

/// Best-effort launch of the default browser; a missing launcher only logs.
fn open_browser(url: &str) {
    tracing::info!("🌐 Opening browser at {}", url);

    let spawned = if cfg!(target_os = "macos") {
        Command::new("open").arg(url).spawn()
    } else if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", "start", url]).spawn()
    } else {
        Command::new("xdg-open").arg(url).spawn()
    };

    if let Err(e) = spawned {
        tracing::warn!("Could not open browser: {}", e);
    }
}
