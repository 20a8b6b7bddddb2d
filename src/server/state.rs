//! Application state for the HTTP server.

use crate::config::session::SessionConfig;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Session settings used when the client leaves a query parameter out.
    pub defaults: SessionConfig,
}

impl AppState {
    pub fn new(defaults: SessionConfig) -> Self {
        AppState { defaults }
    }
}
