//! Uniform scale + translation affine transform.

use serde::Serialize;

use crate::geometry::{Point, Rect};

/// A 2D affine transform restricted to uniform scale and translation.
///
/// As a 2×3 matrix this is
///
/// ```text
/// | scale_x  0        translate_x |
/// | 0        scale_y  translate_y |
/// ```
///
/// The fields are private so the `scale_x == scale_y` invariant holds for
/// every value constructed through this API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomTransform {
    scale_x: f64,
    scale_y: f64,
    translate_x: f64,
    translate_y: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: ZoomTransform = ZoomTransform {
        scale_x: 1.0,
        scale_y: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Create a transform with the given uniform scale and translation.
    pub fn new(scale: f64, translation: Point) -> Self {
        Self {
            scale_x: scale,
            scale_y: scale,
            translate_x: translation.x,
            translate_y: translation.y,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale_x
    }

    pub fn translation(&self) -> Point {
        Point::new(self.translate_x, self.translate_y)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Multiply the scale by `factor`, leaving the translation untouched.
    pub fn scaled_by(&self, factor: f64) -> Self {
        Self {
            scale_x: self.scale_x * factor,
            scale_y: self.scale_y * factor,
            ..*self
        }
    }

    /// Replace the scale, leaving the translation untouched.
    pub fn with_scale(&self, scale: f64) -> Self {
        Self {
            scale_x: scale,
            scale_y: scale,
            ..*self
        }
    }

    /// Add `delta` to the translation.
    pub fn translated_by(&self, delta: Point) -> Self {
        Self {
            translate_x: self.translate_x + delta.x,
            translate_y: self.translate_y + delta.y,
            ..*self
        }
    }

    /// Row-major 2×3 matrix `[[a, c, tx], [b, d, ty]]`.
    pub fn to_matrix(&self) -> [[f64; 3]; 2] {
        [
            [self.scale_x, 0.0, self.translate_x],
            [0.0, self.scale_y, self.translate_y],
        ]
    }

    /// Apply the transform to an untransformed frame: scale about its center,
    /// then offset by the translation.
    pub fn apply_to_frame(&self, base: &Rect) -> Rect {
        let center = base.center() + self.translation();
        Rect::from_center(center, base.size.scaled(self.scale_x))
    }
}
