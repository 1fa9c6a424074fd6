//! Session configuration.
//!
//! A `SessionConfig` is built once at startup and handed to the controller:
//! - how long the result reveal takes and how often it is redrawn
//! - which easing curve turns reveal progress into banner opacity
//! - an optional RNG seed for reproducible sessions

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::animation::Easing;

/// Default reveal duration.
pub const DEFAULT_REVEAL_MS: u64 = 500;

/// Default redraw interval (~60 frames per second).
pub const DEFAULT_FRAME_MS: u64 = 16;

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Wall-clock length of the result reveal in milliseconds.
    /// Zero reveals instantly.
    pub reveal_ms: u64,

    /// Interval between animation ticks in milliseconds (must be > 0).
    pub frame_ms: u64,

    /// Curve applied to reveal progress to get banner opacity.
    pub easing: Easing,

    /// RNG seed. `None` draws a fresh seed per session.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reveal_ms: DEFAULT_REVEAL_MS,
            frame_ms: DEFAULT_FRAME_MS,
            easing: Easing::default(),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reveal duration.
    #[must_use]
    pub fn with_reveal_ms(mut self, ms: u64) -> Self {
        self.reveal_ms = ms;
        self
    }

    /// Set the animation tick interval.
    #[must_use]
    pub fn with_frame_ms(mut self, ms: u64) -> Self {
        assert!(ms > 0, "Frame interval must be positive");
        self.frame_ms = ms;
        self
    }

    /// Set the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn reveal_duration(&self) -> Duration {
        Duration::from_millis(self.reveal_ms)
    }

    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.reveal_duration(), Duration::from_millis(500));
        assert_eq!(config.frame_interval(), Duration::from_millis(16));
        assert_eq!(config.easing, Easing::EaseInOut);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::new()
            .with_reveal_ms(250)
            .with_frame_ms(10)
            .with_easing(Easing::Linear)
            .with_seed(7);

        assert_eq!(config.reveal_ms, 250);
        assert_eq!(config.frame_ms, 10);
        assert_eq!(config.easing, Easing::Linear);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    #[should_panic(expected = "Frame interval must be positive")]
    fn test_zero_frame_interval() {
        let _ = SessionConfig::new().with_frame_ms(0);
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
