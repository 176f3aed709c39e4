//! Error types for the crop session and geometry resolution.

use thiserror::Error;

use crate::config::ConfigError;

/// Reasons a crop interaction can fail to produce a result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CropError {
    /// No image is attached to the image surface.
    #[error("No image is displayed")]
    MissingImage,

    /// The pixel buffer does not hold `width * height * 3` bytes.
    #[error("Pixel buffer holds {actual} bytes, expected {expected} for {width}x{height} RGB")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: u64,
        actual: u64,
    },

    /// The picker was configured with `CropType::None`.
    #[error("Cropping is disabled for this picker")]
    CropDisabled,

    /// The computed pixel region is empty, negative or not finite.
    #[error("Degenerate crop region: {width}x{height} at ({x}, {y})")]
    DegenerateRegion { x: f64, y: f64, width: f64, height: f64 },

    /// The computed pixel region does not intersect the source image.
    #[error("Crop region ({x}, {y}, {width}x{height}) lies outside the {image_width}x{image_height} image")]
    OutOfBounds {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        image_width: u32,
        image_height: u32,
    },

    /// The crop ratio is not a finite positive number.
    #[error("Invalid crop ratio: {0}")]
    InvalidRatio(f64),

    /// The host delivered a gesture state code outside the known set.
    #[error("Unknown gesture state code: {0}")]
    UnknownGestureState(i32),

    /// `done` was requested after the session was cancelled.
    #[error("Crop session was cancelled")]
    SessionCancelled,

    /// The injected configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
