//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{PanelState, StopwatchState};

/// API response structure for the task-spawning endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub panel: PanelState,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, panel: PanelState) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            panel,
        }
    }

    /// Create an accepted response for a spawned task
    pub fn accepted(message: String, panel: PanelState) -> Self {
        Self::new("accepted".to_string(), message, panel)
    }
}

/// Response for the stopwatch toggle endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopwatchResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub running: bool,
    pub elapsed_seconds: u64,
    pub label: String,
}

impl StopwatchResponse {
    /// Build a response from a post-toggle snapshot
    pub fn from_snapshot(snapshot: &StopwatchState) -> Self {
        let (status, message) = if snapshot.running {
            ("running", "Stopwatch started")
        } else {
            ("stopped", "Stopwatch stopped")
        };

        Self {
            status: status.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
            running: snapshot.running,
            elapsed_seconds: snapshot.elapsed_seconds,
            label: snapshot.label().to_string(),
        }
    }
}

/// Enhanced status response with panel and stopwatch information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub panel: PanelState,
    pub stopwatch_running: bool,
    pub stopwatch_elapsed_seconds: u64,
    pub stopwatch_label: String,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: "1.0.0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopwatch_response_mirrors_a_running_snapshot() {
        let response = StopwatchResponse::from_snapshot(&StopwatchState::running_at(3));
        assert_eq!(response.status, "running");
        assert!(response.running);
        assert_eq!(response.elapsed_seconds, 3);
        assert_eq!(response.label, "Stop");
    }

    #[test]
    fn stopwatch_response_mirrors_an_idle_snapshot() {
        let response = StopwatchResponse::from_snapshot(&StopwatchState::new());
        assert_eq!(response.status, "stopped");
        assert!(!response.running);
        assert_eq!(response.label, "Start");
    }

    #[test]
    fn accepted_response_carries_the_panel() {
        let mut panel = PanelState::new();
        panel.loader_visible = true;
        let response = ApiResponse::accepted("Loader running".to_string(), panel);
        assert_eq!(response.status, "accepted");
        assert!(response.panel.loader_visible);
    }
}
