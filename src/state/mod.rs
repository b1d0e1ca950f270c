//! State management module
//!
//! This module contains all state-related structures and their management logic.

pub mod panel_state;
pub mod app_state;
pub mod stopwatch_state;

// Re-export main types
pub use panel_state::PanelState;
pub use app_state::AppState;
pub use stopwatch_state::StopwatchState;
