//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/stopwatch", post(stopwatch_handler))
        .route("/loader", post(loader_handler))
        .route("/transfer", post(transfer_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{self, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(0, "127.0.0.1".to_string(), 5))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json")
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = create_router(test_state());
        let request = Request::get("/health").body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn stopwatch_endpoint_toggles_both_ways() {
        let app = create_router(test_state());

        let request = Request::post("/stopwatch").body(Body::empty()).expect("request");
        let response = app.clone().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["status"], "running");
        assert_eq!(json["running"], true);
        assert_eq!(json["label"], "Stop");

        let request = Request::post("/stopwatch").body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("response");
        let json = json_body(response).await;
        assert_eq!(json["status"], "stopped");
        assert_eq!(json["running"], false);
        assert_eq!(json["label"], "Start");
    }

    #[tokio::test]
    async fn status_reports_a_blank_idle_panel() {
        let app = create_router(test_state());
        let request = Request::get("/status").body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["stopwatch_running"], false);
        assert_eq!(json["stopwatch_elapsed_seconds"], 0);
        assert_eq!(json["stopwatch_label"], "Start");
        assert_eq!(json["panel"]["loader_visible"], false);
        assert_eq!(json["panel"]["status_text"], Value::Null);
        assert_eq!(json["last_action"], Value::Null);
    }

    #[tokio::test]
    async fn loader_endpoint_accepts_and_launches_the_task() {
        let state = test_state();
        let app = create_router(Arc::clone(&state));

        let request = Request::post("/loader").body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["status"], "accepted");

        // Give the spawned task a moment to show the loader
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert!(state.panel_snapshot().expect("panel").loader_visible);
    }

    #[tokio::test]
    async fn transfer_endpoint_accepts_and_starts_narration() {
        let state = test_state();
        let app = create_router(Arc::clone(&state));

        let request = Request::post("/transfer").body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["status"], "accepted");

        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert_eq!(
            state.panel_snapshot().expect("panel").status_text.as_deref(),
            Some("Transferring"),
        );
    }
}
