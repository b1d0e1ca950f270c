//! Stopwatch background task

use std::{sync::Arc, time::Duration};
use tokio::time::interval;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::state::{AppState, StopwatchState};

/// Seconds between stopwatch increments
const TICK: Duration = Duration::from_secs(1);

/// Why the stopwatch task exited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The user cancelled the run through its trigger
    Halted,
    /// The run reached the configured cap
    CapReached,
}

/// Repeating task that advances the stopwatch once per second until the cap
/// is reached or the token is cancelled.
///
/// Cancellation is cooperative: the token is checked at every iteration
/// boundary, and both exit paths settle into the same idle state.
pub async fn stopwatch_task(state: Arc<AppState>, token: CancellationToken) -> StopReason {
    let cap = state.cap_seconds;
    let mut ticks = interval(TICK);
    // The first tick of an interval completes immediately
    ticks.tick().await;

    let reason = loop {
        tokio::select! {
            _ = token.cancelled() => {
                break StopReason::Halted;
            }
            _ = ticks.tick() => {
                match state.tick_stopwatch() {
                    Ok(elapsed) if elapsed >= cap => {
                        break StopReason::CapReached;
                    }
                    Ok(elapsed) => {
                        debug!("Stopwatch at {}s", elapsed);
                    }
                    Err(e) => {
                        error!("Failed to advance stopwatch: {}", e);
                        break StopReason::Halted;
                    }
                }
            }
        }
    };

    match reason {
        StopReason::CapReached => info!("Stopwatch reached the {}s cap, stopping", cap),
        StopReason::Halted => info!("Stopwatch halted by user"),
    }

    // A cancelled run was already settled by halt_stopwatch, and by now the
    // handle slot may belong to a newer run; only an uncancelled task still
    // owns the slot and settles it here.
    if !token.is_cancelled() {
        if let Err(e) = state.finish_stopwatch() {
            error!("Failed to settle stopwatch state: {}", e);
        }
    }

    reason
}

/// Start the stopwatch if it is idle; an already running stopwatch is left
/// untouched. Returns the snapshot after the attempt.
pub fn start_stopwatch(state: &Arc<AppState>) -> Result<StopwatchState, String> {
    if let Some(token) = state.begin_stopwatch()? {
        info!("Starting stopwatch, cap {}s", state.cap_seconds);
        tokio::spawn(stopwatch_task(Arc::clone(state), token));
    }
    state.stopwatch_snapshot()
}

/// Toggle the stopwatch from its trigger: stop it when running, start it
/// otherwise. Returns the snapshot after the toggle.
pub fn toggle_stopwatch(state: &Arc<AppState>) -> Result<StopwatchState, String> {
    if state.halt_stopwatch()? {
        state.stopwatch_snapshot()
    } else {
        start_stopwatch(state)
    }
}
