//! Busy Board - A state-managed HTTP server driving a panel of async widgets
//!
//! This library manages a cancellable stopwatch plus a handful of
//! delay-driven panel tasks (loader, simulated transfer, simulated image
//! fetch), all triggered over HTTP and published to observers.

pub mod config;
pub mod state;
pub mod api;
pub mod lifecycle;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
pub use api::create_router;
pub use lifecycle::{LifecycleHooks, Stage};
pub use utils::signals::shutdown_signal;
