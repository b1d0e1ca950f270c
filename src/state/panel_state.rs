//! Panel surface structure and management

use serde::{Deserialize, Serialize};

/// Panel surface structure - holds everything the widgets render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelState {
    /// Loader visibility (controlled by the /loader endpoint)
    pub loader_visible: bool,
    /// Narration text shared by the transfer and image-fetch tasks
    pub status_text: Option<String>,
    /// Resolved image resource id, empty until a fetch completes
    pub image: Option<String>,
}

impl PanelState {
    /// Create a new PanelState with nothing shown
    pub fn new() -> Self {
        Self {
            loader_visible: false,
            status_text: None,
            image: None,
        }
    }

    /// Check if no widget is currently showing anything
    pub fn is_blank(&self) -> bool {
        !self.loader_visible && self.status_text.is_none() && self.image.is_none()
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}
