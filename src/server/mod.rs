//! Server layer root module.
//!
//! Serves the browser client and runs one game per WebSocket connection:
//! - Application state (session defaults)
//! - HTTP/WebSocket routing
//! - Play sessions (game loop driver, client messages)

pub mod state;
pub mod router;
pub mod game_session;
pub mod ws_error;
