//! Simulated transfer and image-fetch background tasks

use std::{sync::Arc, time::Duration};
use tokio::time::sleep;
use tracing::{error, warn};

use crate::state::AppState;

/// Narration steps shown while the simulated transfer runs
pub const TRANSFER_STEPS: [&str; 4] = [
    "Transferring",
    "Transferring .",
    "Transferring . .",
    "Transferring . . .",
];

/// Narration shown once the simulated transfer ends
pub const TRANSFER_DONE: &str = "Transfer complete";

/// Image resource resolved by the simulated fetch
pub const IMAGE_RESOURCE: &str = "artwork/placeholder-foreground";

/// Narrate a simulated transfer: one step text per second, then the
/// completion text.
pub async fn transfer_task(state: Arc<AppState>) {
    for step in TRANSFER_STEPS {
        display(&state, step);
        sleep(Duration::from_secs(1)).await;
    }
    display(&state, TRANSFER_DONE);
}

/// Simulate fetching an image: an inner task resolves the resource after
/// three seconds, the outer task awaits it and places it on the panel.
pub async fn image_fetch_task(state: Arc<AppState>) {
    let fetch = tokio::spawn({
        let state = Arc::clone(&state);
        async move {
            sleep(Duration::from_secs(3)).await;
            display(&state, "image fetched");
            IMAGE_RESOURCE
        }
    });

    match fetch.await {
        Ok(resource) => {
            if let Err(e) = state.set_image(resource) {
                error!("Failed to place fetched image: {}", e);
            }
        }
        Err(e) => error!("Image fetch task failed: {}", e),
    }
}

fn display(state: &AppState, text: &str) {
    if let Err(e) = state.set_status_text(text) {
        warn!("Failed to display status text: {}", e);
    }
}
