/// HTTP server configuration constants.

/// Address the HTTP server binds to.
pub const BIND_ADDRESS: &str = "127.0.0.1";

/// Port the HTTP server listens on.
pub const BIND_PORT: u16 = 8080;

/// How often a play session pumps its game, in milliseconds.
/// Matches the tick interval so each pump runs at most one tick in steady state.
pub const PUMP_INTERVAL_MS: u64 = crate::config::game::TICK_INTERVAL_MS;
