//! Crop screen configuration.
//!
//! The host injects a `CropConfig` once at construction; it is read-only for
//! the lifetime of a session. Every field has a default, so hosts may supply a
//! partial object and rely on serde to fill in the rest.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by [`CropConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A zoom limit is NaN or infinite.
    #[error("Zoom limits must be finite (min {min}, max {max})")]
    NonFiniteZoom { min: f64, max: f64 },

    /// The minimum zoom must be strictly positive.
    #[error("Minimum zoom must be positive, got {0}")]
    NonPositiveMinZoom(f64),

    /// The minimum zoom exceeds the maximum.
    #[error("Minimum zoom {min} exceeds maximum zoom {max}")]
    InvertedZoomRange { min: f64, max: f64 },

    /// The snap-back duration is negative or not finite.
    #[error("Settle duration must be a non-negative number of seconds, got {0}")]
    InvalidDuration(f64),
}

/// Tunables for the crop interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CropConfig {
    /// Smallest scale a settled transform may keep (default 1.0)
    pub min_zoom: f64,
    /// Largest scale a settled transform may keep (default 3.0)
    pub max_zoom: f64,
    /// Duration of snap-back animations in seconds (default 0.3)
    pub settle_duration_secs: f64,
    /// Emit a haptic pulse when a pinch snaps back
    pub haptics: bool,
    /// Navigation title shown above the crop frame
    pub title: String,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            min_zoom: 1.0,
            max_zoom: 3.0,
            settle_duration_secs: 0.3,
            haptics: true,
            title: "Crop".to_string(),
        }
    }
}

impl CropConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the configuration for values the controller cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_zoom.is_finite() || !self.max_zoom.is_finite() {
            return Err(ConfigError::NonFiniteZoom {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if self.min_zoom <= 0.0 {
            return Err(ConfigError::NonPositiveMinZoom(self.min_zoom));
        }
        if self.min_zoom > self.max_zoom {
            return Err(ConfigError::InvertedZoomRange {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if !self.settle_duration_secs.is_finite() || self.settle_duration_secs < 0.0 {
            return Err(ConfigError::InvalidDuration(self.settle_duration_secs));
        }
        Ok(())
    }
}
