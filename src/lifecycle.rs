//! Lifecycle hook registry
//!
//! Startup milestones are modeled as explicit stages; callers register plain
//! callbacks per stage and the entry point fires each stage exactly once as
//! it passes the corresponding milestone.

use tracing::debug;

/// Startup milestones of the hosting process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// State is constructed, nothing is listening yet
    Created,
    /// The listener is bound
    Started,
    /// About to serve requests
    Resumed,
}

type Hook = Box<dyn Fn() + Send + Sync>;

/// Registry of per-stage callbacks
#[derive(Default)]
pub struct LifecycleHooks {
    hooks: Vec<(Stage, Hook)>,
}

impl LifecycleHooks {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Register a callback for a stage
    pub fn on<F>(&mut self, stage: Stage, hook: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.hooks.push((stage, Box::new(hook)));
    }

    /// Run every callback registered for the stage, in registration order.
    /// Returns how many callbacks ran.
    pub fn fire(&self, stage: Stage) -> usize {
        let mut fired = 0;
        for (registered, hook) in &self.hooks {
            if *registered == stage {
                hook();
                fired += 1;
            }
        }
        debug!("Fired {} hook(s) for stage {:?}", fired, stage);
        fired
    }
}
