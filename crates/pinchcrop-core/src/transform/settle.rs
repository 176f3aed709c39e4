//! End-of-gesture corrections: zoom clamping and crop-frame coverage.

use crate::config::CropConfig;
use crate::geometry::{Point, Rect};

use super::ZoomTransform;

/// Allowed range for a settled zoom scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min: 1.0, max: 3.0 }
    }
}

impl From<&CropConfig> for ZoomLimits {
    fn from(config: &CropConfig) -> Self {
        Self {
            min: config.min_zoom,
            max: config.max_zoom,
        }
    }
}

/// Compute the transform a finished pinch should settle to.
///
/// - Below `limits.min` the whole transform resets to identity, which also
///   re-centers the surface.
/// - Above `limits.max` the scale is pinned to `limits.max` and the
///   translation is kept.
///
/// Returns `None` when the transform is already within range.
pub fn settle_zoom(transform: &ZoomTransform, limits: ZoomLimits) -> Option<ZoomTransform> {
    let mut settled = *transform;
    let mut out_of_bounds = false;

    if settled.scale() < limits.min {
        settled = ZoomTransform::IDENTITY;
        out_of_bounds = true;
    }

    if settled.scale() > limits.max {
        settled = settled.with_scale(limits.max);
        out_of_bounds = true;
    }

    out_of_bounds.then_some(settled)
}

/// Compute how far the image surface sits off the crop frame after a pan.
///
/// The result is the correction vector `d`; moving the surface by `-d` brings
/// its edges back onto the crop frame. Each axis is checked independently and
/// the far-edge check (bottom, right) runs after the near-edge check (top,
/// left), so when the surface is smaller than the frame on an axis the far
/// edge wins.
///
/// Returns `None` when no correction is needed.
pub fn bounds_correction(surface: &Rect, crop: &Rect) -> Option<Point> {
    let mut dx = 0.0;
    let mut dy = 0.0;

    if surface.min_y() > crop.min_y() {
        dy = surface.min_y() - crop.min_y();
    }
    if surface.max_y() < crop.max_y() {
        dy = surface.min_y() - (crop.max_y() - surface.height());
    }

    if surface.min_x() > crop.min_x() {
        dx = surface.min_x() - crop.min_x();
    }
    if surface.max_x() < crop.max_x() {
        dx = surface.min_x() - (crop.max_x() - surface.width());
    }

    let correction = Point::new(dx, dy);
    (!correction.is_zero()).then_some(correction)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
