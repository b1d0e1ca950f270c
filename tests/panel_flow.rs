//! End-to-end exercise of the panel over the HTTP surface

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

use busy_board::{create_router, AppState};

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

#[tokio::test]
async fn stopwatch_round_trip_over_http() {
    let state = Arc::new(AppState::new(0, "127.0.0.1".to_string(), 5));
    let app = create_router(Arc::clone(&state));

    // Idle panel before anything is pressed
    let response = app
        .clone()
        .oneshot(Request::get("/status").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["stopwatch_label"], "Start");

    // First press starts the stopwatch
    let response = app
        .clone()
        .oneshot(Request::post("/stopwatch").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let json = json_body(response).await;
    assert_eq!(json["running"], true);
    assert_eq!(json["label"], "Stop");

    // The status surface reflects the running stopwatch
    let response = app
        .clone()
        .oneshot(Request::get("/status").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let json = json_body(response).await;
    assert_eq!(json["stopwatch_running"], true);
    assert_eq!(json["stopwatch_label"], "Stop");
    assert_eq!(json["last_action"], "stopwatch-start");

    // Second press stops it again
    let response = app
        .clone()
        .oneshot(Request::post("/stopwatch").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let json = json_body(response).await;
    assert_eq!(json["running"], false);
    assert_eq!(json["label"], "Start");

    let response = app
        .oneshot(Request::get("/status").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let json = json_body(response).await;
    assert_eq!(json["stopwatch_running"], false);
    assert_eq!(json["last_action"], "stopwatch-stop");
}

#[tokio::test]
async fn one_transfer_press_drives_both_widgets() {
    let state = Arc::new(AppState::new(0, "127.0.0.1".to_string(), 5));
    let app = create_router(Arc::clone(&state));

    let response = app
        .oneshot(Request::post("/transfer").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["status"], "accepted");

    // Narration begins right away; the image resolves much later
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    let panel = state.panel_snapshot().expect("panel");
    assert_eq!(panel.status_text.as_deref(), Some("Transferring"));
    assert!(panel.image.is_none());
}
