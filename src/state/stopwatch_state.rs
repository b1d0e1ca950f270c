//! Stopwatch state structure and management

use serde::{Deserialize, Serialize};

/// Snapshot of the stopwatch published to observers on every change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopwatchState {
    pub running: bool,
    pub elapsed_seconds: u64,
}

impl StopwatchState {
    /// Create a new idle stopwatch state
    pub fn new() -> Self {
        Self {
            running: false,
            elapsed_seconds: 0,
        }
    }

    /// Create a running stopwatch state at the given second count
    pub fn running_at(elapsed_seconds: u64) -> Self {
        Self {
            running: true,
            elapsed_seconds,
        }
    }

    /// The trigger affordance for the current state
    pub fn label(&self) -> &'static str {
        if self.running {
            "Stop"
        } else {
            "Start"
        }
    }
}

impl Default for StopwatchState {
    fn default() -> Self {
        Self::new()
    }
}
