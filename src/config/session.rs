/// Per-session configuration.
///
/// A session is configured once, when the client connects, with the screen size
/// and the difficulty level. Nothing else is configurable at runtime.
use log::warn;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::config::game::{DEFAULT_LEVEL, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH};
use crate::game::types::Bounds;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("screen width must be positive")]
    ZeroWidth,
    #[error("screen height must be positive")]
    ZeroHeight,
}

impl ConfigError {
    /// Stable code sent to clients.
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::ZeroWidth | ConfigError::ZeroHeight => "INVALID_SCREEN_SIZE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub level: i32,
}

impl SessionConfig {
    /// Validate the screen size. A non-positive level is accepted: it simply
    /// spawns no enemies for the categories whose count drops to zero.
    pub fn new(screen_width: u32, screen_height: u32, level: i32) -> Result<Self, ConfigError> {
        if screen_width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if screen_height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if level <= 0 {
            warn!("[Config] Non-positive level {} requested, enemy counts will clamp to zero", level);
        }
        Ok(Self { screen_width, screen_height, level })
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.screen_width as f64, self.screen_height as f64)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            level: DEFAULT_LEVEL,
        }
    }
}

/// Raw session parameters as they arrive in the connection query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionParams {
    pub level: Option<i32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl SessionParams {
    /// Fill missing values from `defaults` and validate the result.
    pub fn resolve(&self, defaults: &SessionConfig) -> Result<SessionConfig, ConfigError> {
        SessionConfig::new(
            self.width.unwrap_or(defaults.screen_width),
            self.height.unwrap_or(defaults.screen_height),
            self.level.unwrap_or(defaults.level),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_params_use_defaults() {
        let config = SessionParams::default().resolve(&SessionConfig::default()).unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_params_override_defaults() {
        let params = SessionParams { level: Some(3), width: Some(640), height: None };
        let config = params.resolve(&SessionConfig::default()).unwrap();
        assert_eq!(config.level, 3);
        assert_eq!(config.screen_width, 640);
        assert_eq!(config.screen_height, DEFAULT_SCREEN_HEIGHT);
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        assert_eq!(SessionConfig::new(0, 600, 1), Err(ConfigError::ZeroWidth));
        assert_eq!(SessionConfig::new(800, 0, 1), Err(ConfigError::ZeroHeight));
    }

    #[test]
    fn test_non_positive_level_is_not_an_error() {
        assert!(SessionConfig::new(800, 600, 0).is_ok());
        assert!(SessionConfig::new(800, 600, -4).is_ok());
    }
}
