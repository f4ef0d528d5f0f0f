//! Carousel configuration types.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Errors produced when validating a configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a finite, non-negative number of pixels (got {value})")]
    InvalidPixels { field: &'static str, value: f32 },
    #[error("swipe_width_ratio must be within 0.0..=1.0 (got {0})")]
    InvalidRatio(f32),
}

/// Thresholds used to tell swipes, taps and long-presses apart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Minimum horizontal travel for a swipe, in pixels.
    pub swipe_min_px: f32,
    /// Fraction of the track width that also counts as a swipe.
    /// The larger of this and `swipe_min_px` wins.
    pub swipe_width_ratio: f32,
    /// How long a touch must be held to select.
    pub long_press_ms: u64,
    /// Horizontal movement that still counts as "holding still".
    pub move_tolerance_px: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_min_px: 48.0,
            swipe_width_ratio: 0.08,
            long_press_ms: 450,
            move_tolerance_px: 12.0,
        }
    }
}

impl GestureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn swipe_min_px(mut self, px: f32) -> Self {
        self.swipe_min_px = px;
        self
    }

    pub fn swipe_width_ratio(mut self, ratio: f32) -> Self {
        self.swipe_width_ratio = ratio;
        self
    }

    pub fn long_press(mut self, duration: Duration) -> Self {
        self.long_press_ms = duration.as_millis() as u64;
        self
    }

    pub fn move_tolerance_px(mut self, px: f32) -> Self {
        self.move_tolerance_px = px;
        self
    }

    pub fn long_press_duration(&self) -> Duration {
        Duration::from_millis(self.long_press_ms)
    }

    /// Distance a pointer must travel on a track of the given width to swipe.
    pub fn swipe_threshold(&self, track_width: f32) -> f32 {
        self.swipe_min_px.max(track_width * self.swipe_width_ratio)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_pixels("swipe_min_px", self.swipe_min_px)?;
        check_pixels("move_tolerance_px", self.move_tolerance_px)?;
        if !(0.0..=1.0).contains(&self.swipe_width_ratio) {
            return Err(ConfigError::InvalidRatio(self.swipe_width_ratio));
        }
        Ok(())
    }
}

fn check_pixels(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidPixels { field, value })
    }
}

/// Per-carousel configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Accessible name for the carousel region.
    pub aria_label: Option<String>,
    pub gestures: GestureConfig,
}

impl CarouselConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn gestures(mut self, gestures: GestureConfig) -> Self {
        self.gestures = gestures;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gestures.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_threshold_uses_larger_bound() {
        let config = GestureConfig::default();
        assert_eq!(config.swipe_threshold(320.0), 48.0);
        assert_eq!(config.swipe_threshold(1000.0), 80.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = GestureConfig::new().swipe_min_px(-1.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPixels { field: "swipe_min_px", .. })
        ));

        let config = GestureConfig::new().move_tolerance_px(f32::NAN);
        assert!(config.validate().is_err());

        let config = GestureConfig::new().swipe_width_ratio(1.5);
        assert_eq!(config.validate(), Err(ConfigError::InvalidRatio(1.5)));

        assert_eq!(CarouselConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: CarouselConfig =
            serde_json::from_str(r#"{"gestures": {"long_press_ms": 600}}"#).unwrap();
        assert_eq!(config.gestures.long_press_duration(), Duration::from_millis(600));
        assert_eq!(config.gestures.swipe_min_px, 48.0);
        assert_eq!(config.aria_label, None);
    }
}
