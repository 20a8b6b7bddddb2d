/// Main configuration module.
///
/// Gameplay tuning, server binding and per-session settings.
pub mod game;
pub mod server;
pub mod session;
