// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Default time between automatic advances.
pub const DEFAULT_INTERVAL_MS: u64 = 7_000;

/// Default minimum horizontal travel, in pixels, for a gesture to navigate.
pub const DEFAULT_DRAG_THRESHOLD_PX: f64 = 100.0;

/// Rejected [`CarouselConfig`] values.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// `auto_advance_interval_ms` was zero.
    #[error("auto-advance interval must be greater than zero")]
    ZeroInterval,
    /// `drag_threshold_px` was negative, infinite or NaN.
    #[error("drag threshold must be a finite, non-negative distance (got {0})")]
    InvalidDragThreshold(f64),
}

/// Carousel behavior settings.
///
/// With the `serde` feature, missing fields take their default value, so a
/// partial document such as `{"autoplay": false}` is accepted.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Time between automatic advances.
    pub auto_advance_interval_ms: u64,
    /// Horizontal travel a gesture must exceed to navigate.
    pub drag_threshold_px: f64,
    /// Whether to advance automatically.
    pub autoplay: bool,
    /// Whether to bind the arrow keys.
    pub keyboard: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_interval_ms: DEFAULT_INTERVAL_MS,
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
            autoplay: true,
            keyboard: true,
        }
    }
}

impl CarouselConfig {
    /// Sets the auto-advance interval.
    #[must_use]
    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.auto_advance_interval_ms = interval_ms;
        self
    }

    /// Sets the drag threshold.
    #[must_use]
    pub fn with_drag_threshold(mut self, threshold_px: f64) -> Self {
        self.drag_threshold_px = threshold_px;
        self
    }

    /// Enables or disables auto-advance.
    #[must_use]
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Enables or disables arrow-key navigation.
    #[must_use]
    pub fn with_keyboard(mut self, keyboard: bool) -> Self {
        self.keyboard = keyboard;
        self
    }

    /// Check that every field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroInterval`] for a zero interval and
    /// [`ConfigError::InvalidDragThreshold`] for a negative or non-finite threshold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auto_advance_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if !self.drag_threshold_px.is_finite() || self.drag_threshold_px < 0.0 {
            return Err(ConfigError::InvalidDragThreshold(self.drag_threshold_px));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn defaults_match_documented_values() {
        let config = CarouselConfig::default();
        assert_eq!(config.auto_advance_interval_ms, 7_000);
        assert_eq!(config.drag_threshold_px, 100.0);
        assert!(config.autoplay);
        assert!(config.keyboard);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn builders_set_fields() {
        let config = CarouselConfig::default()
            .with_interval_ms(500)
            .with_drag_threshold(40.0)
            .with_autoplay(false)
            .with_keyboard(false);

        assert_eq!(config.auto_advance_interval_ms, 500);
        assert_eq!(config.drag_threshold_px, 40.0);
        assert!(!config.autoplay);
        assert!(!config.keyboard);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let config = CarouselConfig::default().with_interval_ms(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));
    }

    #[test]
    fn bad_thresholds_are_rejected() {
        for threshold in [-1.0, f64::INFINITY] {
            let config = CarouselConfig::default().with_drag_threshold(threshold);
            assert_eq!(
                config.validate(),
                Err(ConfigError::InvalidDragThreshold(threshold))
            );
        }
        let nan = CarouselConfig::default().with_drag_threshold(f64::NAN);
        assert!(matches!(
            nan.validate(),
            Err(ConfigError::InvalidDragThreshold(_))
        ));
    }

    #[test]
    fn zero_threshold_is_allowed() {
        let config = CarouselConfig::default().with_drag_threshold(0.0);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn errors_render_messages() {
        assert_eq!(
            ConfigError::ZeroInterval.to_string(),
            "auto-advance interval must be greater than zero"
        );
        assert_eq!(
            ConfigError::InvalidDragThreshold(-2.5).to_string(),
            "drag threshold must be a finite, non-negative distance (got -2.5)"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_document_fills_defaults() {
        let config: CarouselConfig = serde_json::from_str(r#"{"autoplay": false}"#).unwrap();
        assert_eq!(config, CarouselConfig::default().with_autoplay(false));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn full_document_overrides_everything() {
        let config: CarouselConfig = serde_json::from_str(
            r#"{
                "auto_advance_interval_ms": 3000,
                "drag_threshold_px": 50.0,
                "autoplay": true,
                "keyboard": false
            }"#,
        )
        .unwrap();
        assert_eq!(
            config,
            CarouselConfig {
                auto_advance_interval_ms: 3_000,
                drag_threshold_px: 50.0,
                autoplay: true,
                keyboard: false,
            }
        );
    }
}
