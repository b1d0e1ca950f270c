//! Busy Board - A state-managed HTTP server driving a panel of async widgets
//!
//! This is the main entry point for the busy-board application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use busy_board::{
    api::create_router,
    config::Config,
    lifecycle::{LifecycleHooks, Stage},
    state::AppState,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("busy_board={},tower_http=info", config.log_level()))
        .init();

    info!("Starting busy-board server v1.0.0");
    info!("Configuration: host={}, port={}, cap={}s",
          config.host, config.port, config.cap);

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), config.cap));

    // Register lifecycle hooks for the startup milestones
    let mut lifecycle = LifecycleHooks::new();
    lifecycle.on(Stage::Created, || info!("Panel created"));
    lifecycle.on(Stage::Started, || info!("Panel started"));
    lifecycle.on(Stage::Resumed, || info!("Panel resumed"));

    lifecycle.fire(Stage::Created);

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    lifecycle.fire(Stage::Started);

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /stopwatch - Toggle the stopwatch");
    info!("  POST /loader    - Show the loader for 2 seconds");
    info!("  POST /transfer  - Run the transfer and image fetch tasks");
    info!("  GET  /status    - Check the panel and stopwatch");
    info!("  GET  /health    - Health check");

    lifecycle.fire(Stage::Resumed);

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

    info!("Server shutdown complete");
    Ok(())
}
