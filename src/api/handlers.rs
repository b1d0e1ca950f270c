//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::{
    state::AppState,
    tasks::{image_fetch_task, loader_task, toggle_stopwatch, transfer_task},
};
use super::responses::{ApiResponse, HealthResponse, StatusResponse, StopwatchResponse};

/// Handle POST /stopwatch - Toggle the stopwatch
pub async fn stopwatch_handler(State(state): State<Arc<AppState>>) -> Result<Json<StopwatchResponse>, StatusCode> {
    match toggle_stopwatch(&state) {
        Ok(snapshot) => {
            info!(
                "Stopwatch endpoint called - stopwatch now {}",
                if snapshot.running { "running" } else { "stopped" }
            );
            Ok(Json(StopwatchResponse::from_snapshot(&snapshot)))
        }
        Err(e) => {
            error!("Failed to toggle stopwatch: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /loader - Show the loader for two seconds
pub async fn loader_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    tokio::spawn(loader_task(Arc::clone(&state)));
    info!("Loader endpoint called - loader task launched");

    match state.panel_snapshot() {
        Ok(panel) => Ok(Json(ApiResponse::accepted(
            "Loader showing for 2 seconds".to_string(),
            panel,
        ))),
        Err(e) => {
            error!("Failed to read panel state: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /transfer - Launch the transfer narration and the image fetch
///
/// One trigger, two independent tasks; they interleave freely.
pub async fn transfer_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    tokio::spawn(transfer_task(Arc::clone(&state)));
    tokio::spawn(image_fetch_task(Arc::clone(&state)));
    info!("Transfer endpoint called - transfer and image fetch tasks launched");

    match state.panel_snapshot() {
        Ok(panel) => Ok(Json(ApiResponse::accepted(
            "Transfer and image fetch started".to_string(),
            panel,
        ))),
        Err(e) => {
            error!("Failed to read panel state: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Return the current panel and stopwatch status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let panel = match state.panel_snapshot() {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to get panel state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let stopwatch = match state.stopwatch_snapshot() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to get stopwatch state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        panel,
        stopwatch_running: stopwatch.running,
        stopwatch_elapsed_seconds: stopwatch.elapsed_seconds,
        stopwatch_label: stopwatch.label().to_string(),
        uptime: state.uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
