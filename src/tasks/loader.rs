//! Loader background task

use std::{sync::Arc, time::Duration};
use tokio::time::sleep;
use tracing::{error, info};

use crate::state::AppState;

/// Show the loader for two seconds, then hide it again.
///
/// Pure delay-then-mutate: no cancellation, no branching.
pub async fn loader_task(state: Arc<AppState>) {
    info!("Showing the loader");
    if let Err(e) = state.set_loader(true) {
        error!("Failed to show loader: {}", e);
        return;
    }

    sleep(Duration::from_secs(1)).await;
    info!("Waited 1 second");
    sleep(Duration::from_secs(1)).await;
    info!("Waited 2 seconds");

    if let Err(e) = state.set_loader(false) {
        error!("Failed to hide loader: {}", e);
    }
    info!("Hiding the loader");
}
