//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::{PanelState, StopwatchState};

/// Main application state that manages the panel surface and the stopwatch
#[derive(Debug)]
pub struct AppState {
    /// The panel surface all tasks render into
    pub panel_state: Arc<Mutex<PanelState>>,
    /// Stopwatch configuration and state
    pub cap_seconds: u64,
    pub stopwatch_state: Arc<Mutex<StopwatchState>>,
    /// Handle to the active stopwatch task, present iff the stopwatch runs
    stopwatch_handle: Mutex<Option<CancellationToken>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel for panel updates
    pub panel_update_tx: watch::Sender<PanelState>,
    /// Channel for stopwatch updates
    pub stopwatch_update_tx: watch::Sender<StopwatchState>,
    /// Keep the receivers alive to prevent channel closure
    _panel_update_rx: watch::Receiver<PanelState>,
    _stopwatch_update_rx: watch::Receiver<StopwatchState>,
}

impl AppState {
    /// Create a new AppState with a blank panel and an idle stopwatch
    pub fn new(port: u16, host: String, cap_seconds: u64) -> Self {
        let (panel_update_tx, panel_update_rx) = watch::channel(PanelState::new());
        let (stopwatch_update_tx, stopwatch_update_rx) = watch::channel(StopwatchState::new());

        Self {
            panel_state: Arc::new(Mutex::new(PanelState::new())),
            cap_seconds,
            stopwatch_state: Arc::new(Mutex::new(StopwatchState::new())),
            stopwatch_handle: Mutex::new(None),
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            panel_update_tx,
            stopwatch_update_tx,
            _panel_update_rx: panel_update_rx,
            _stopwatch_update_rx: stopwatch_update_rx,
        }
    }

    /// Apply a mutation to the panel surface and publish the new snapshot
    pub fn update_panel<F>(&self, action: &str, updater: F) -> Result<PanelState, String>
    where
        F: FnOnce(&mut PanelState),
    {
        // Lock the panel surface and apply the update
        let mut panel = self.panel_state.lock()
            .map_err(|e| format!("Failed to lock panel state: {}", e))?;

        updater(&mut *panel);
        let new_panel = panel.clone();
        drop(panel); // Release the lock early

        self.record_action(action);

        // Notify panel watchers
        if let Err(e) = self.panel_update_tx.send(new_panel.clone()) {
            warn!("Failed to send panel update: {}", e);
        }

        Ok(new_panel)
    }

    /// Show or hide the loader
    pub fn set_loader(&self, visible: bool) -> Result<PanelState, String> {
        info!("Setting loader visibility to: {}", visible);
        self.update_panel(
            if visible { "loader-show" } else { "loader-hide" },
            |panel| panel.loader_visible = visible,
        )
    }

    /// Put a narration line on the status text widget
    pub fn set_status_text(&self, text: &str) -> Result<PanelState, String> {
        info!("{}", text);
        let text = text.to_string();
        self.update_panel("status-text", move |panel| panel.status_text = Some(text))
    }

    /// Place a resolved image resource on the image widget
    pub fn set_image(&self, resource: &str) -> Result<PanelState, String> {
        info!("Setting image resource to: {}", resource);
        let resource = resource.to_string();
        self.update_panel("image-set", move |panel| panel.image = Some(resource))
    }

    /// Get the current panel surface
    pub fn panel_snapshot(&self) -> Result<PanelState, String> {
        self.panel_state.lock()
            .map(|panel| panel.clone())
            .map_err(|e| format!("Failed to lock panel state: {}", e))
    }

    /// Get the current stopwatch state
    pub fn stopwatch_snapshot(&self) -> Result<StopwatchState, String> {
        self.stopwatch_state.lock()
            .map(|state| state.clone())
            .map_err(|e| format!("Failed to lock stopwatch state: {}", e))
    }

    /// Arm the stopwatch: reset the count, mark it running and hand out a
    /// fresh cancellation token for the tick task.
    ///
    /// Returns `Ok(None)` when the stopwatch is already running, so a start
    /// while running never resets the count or spawns a second task.
    pub fn begin_stopwatch(&self) -> Result<Option<CancellationToken>, String> {
        let mut state = self.stopwatch_state.lock()
            .map_err(|e| format!("Failed to lock stopwatch state: {}", e))?;

        if state.running {
            debug!("Stopwatch already running, start ignored");
            return Ok(None);
        }

        state.running = true;
        state.elapsed_seconds = 0;
        let snapshot = state.clone();
        drop(state);

        let token = CancellationToken::new();
        *self.stopwatch_handle.lock()
            .map_err(|e| format!("Failed to lock stopwatch handle: {}", e))? = Some(token.clone());

        self.record_action("stopwatch-start");
        self.publish_stopwatch(snapshot);

        Ok(Some(token))
    }

    /// Advance the stopwatch by one second and publish the new count.
    ///
    /// A stop that lands between ticks clears `running` first, so a late tick
    /// finds the flag down and leaves the count untouched.
    pub fn tick_stopwatch(&self) -> Result<u64, String> {
        let mut state = self.stopwatch_state.lock()
            .map_err(|e| format!("Failed to lock stopwatch state: {}", e))?;

        if !state.running {
            return Ok(state.elapsed_seconds);
        }

        state.elapsed_seconds += 1;
        let snapshot = state.clone();
        drop(state);

        self.publish_stopwatch(snapshot.clone());
        Ok(snapshot.elapsed_seconds)
    }

    /// Stop the stopwatch on user request, cancelling the active task.
    ///
    /// Returns `Ok(false)` when no task is active. The last count stays on
    /// display; only the next start resets it.
    pub fn halt_stopwatch(&self) -> Result<bool, String> {
        let token = self.stopwatch_handle.lock()
            .map_err(|e| format!("Failed to lock stopwatch handle: {}", e))?
            .take();

        let Some(token) = token else {
            return Ok(false);
        };

        token.cancel();

        let mut state = self.stopwatch_state.lock()
            .map_err(|e| format!("Failed to lock stopwatch state: {}", e))?;
        state.running = false;
        let snapshot = state.clone();
        drop(state);

        self.record_action("stopwatch-stop");
        self.publish_stopwatch(snapshot);

        Ok(true)
    }

    /// Settle the stopwatch at the task boundary once the tick task exits
    /// on its own (cap expiry or tick failure). Idempotent.
    ///
    /// Caller contract: only the task owning the stored handle may call
    /// this; a cancelled task must not, since its run was already settled
    /// and the slot may hold a newer run's handle.
    pub fn finish_stopwatch(&self) -> Result<(), String> {
        self.stopwatch_handle.lock()
            .map_err(|e| format!("Failed to lock stopwatch handle: {}", e))?
            .take();

        let mut state = self.stopwatch_state.lock()
            .map_err(|e| format!("Failed to lock stopwatch state: {}", e))?;
        if !state.running {
            return Ok(());
        }
        state.running = false;
        let snapshot = state.clone();
        drop(state);

        self.publish_stopwatch(snapshot);
        Ok(())
    }

    /// Calculate server uptime as a formatted string
    pub fn uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        match (secs / 3600, (secs % 3600) / 60, secs % 60) {
            (0, 0, s) => format!("{}s", s),
            (0, m, s) => format!("{}m {}s", m, s),
            (h, m, s) => format!("{}h {}m {}s", h, m, s),
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    fn publish_stopwatch(&self, snapshot: StopwatchState) {
        if let Err(e) = self.stopwatch_update_tx.send(snapshot) {
            warn!("Failed to send stopwatch update: {}", e);
        }
    }
}
