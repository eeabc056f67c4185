//! Application state for the HTTP server.

use std::sync::Arc;

use crate::engine::SchedulingEngine;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Engine facade for scheduling operations
    pub engine: Arc<SchedulingEngine>,
}

impl AppState {
    /// Create a new application state with the given engine.
    pub fn new(engine: Arc<SchedulingEngine>) -> Self {
        Self { engine }
    }
}
