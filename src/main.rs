//! Header Clock - state server for a dashboard's fixed header
//!
//! This is the main entry point for the header-clock application.

use std::sync::Arc;
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use header_clock::{
    config::Config,
    state::HeaderState,
    api::create_router,
    tasks::locale_watcher_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("header_clock={},tower_http=info", config.log_level()))
        .init();

    info!("Starting header-clock server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, window={}s, tick={}ms, overrun={:?}, locale={}",
          config.host, config.port, config.window, config.tick_ms, config.overrun, config.locale);

    let translator = config.translator().context("Failed to load translations")?;
    let state = Arc::new(
        HeaderState::new(config.header_settings(), translator)
            .context("Failed to initialise header state")?,
    );

    // Mount the header: the countdown starts now
    state.mount().context("Failed to mount header")?;

    let watcher = tokio::spawn(locale_watcher_task(Arc::clone(&state)));

    let app = create_router(Arc::clone(&state));

    let addr = config.address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET    /header    - Full header render model");
    info!("  GET    /countdown - Countdown display and raw seconds");
    info!("  GET    /locale    - Active and supported locales");
    info!("  POST   /locale    - Switch the active locale");
    info!("  PUT    /page      - Set the page title");
    info!("  PUT    /session   - Set the user session");
    info!("  DELETE /session   - Clear the user session");
    info!("  POST   /remount   - Restart the countdown");
    info!("  GET    /health    - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    watcher.abort();
    state.unmount().await.context("Failed to unmount header")?;

    info!("Server shutdown complete");
    Ok(())
}
