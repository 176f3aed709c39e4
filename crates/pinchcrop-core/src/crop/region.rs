//! Mapping the crop frame onto the source image's pixel grid.

use serde::Serialize;

use crate::error::CropError;
use crate::geometry::Rect;

/// A crop region in source pixel space, before snapping to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PixelRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A whole-pixel rectangle known to lie inside an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Convert the crop frame into a region of the source image.
///
/// `scale_ratio = source_width / surface.width`; the offset of the crop frame
/// from the surface's top-left corner and the crop frame's size are both
/// multiplied by it.
pub fn resolve_region(
    crop: &Rect,
    surface: &Rect,
    source_width: u32,
) -> Result<PixelRegion, CropError> {
    let scale_ratio = source_width as f64 / surface.width();
    if !scale_ratio.is_finite() || scale_ratio <= 0.0 {
        return Err(CropError::DegenerateRegion {
            x: crop.min_x() - surface.min_x(),
            y: crop.min_y() - surface.min_y(),
            width: crop.width(),
            height: crop.height(),
        });
    }

    Ok(PixelRegion {
        x: (crop.min_x() - surface.min_x()) * scale_ratio,
        y: (crop.min_y() - surface.min_y()) * scale_ratio,
        width: crop.width() * scale_ratio,
        height: crop.height() * scale_ratio,
    })
}

impl PixelRegion {
    fn degenerate(&self) -> CropError {
        CropError::DegenerateRegion {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Snap outward to whole pixels and intersect with a
    /// `image_width`x`image_height` image.
    ///
    /// A region that extends past the image is trimmed to the part that
    /// overlaps it. A region that is not finite, has no area, or misses the
    /// image entirely is an error.
    pub fn clip(&self, image_width: u32, image_height: u32) -> Result<PixelRect, CropError> {
        let finite = [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.width <= 0.0 || self.height <= 0.0 {
            return Err(self.degenerate());
        }

        let left = self.x.floor().max(0.0);
        let top = self.y.floor().max(0.0);
        let right = (self.x + self.width).ceil().min(image_width as f64);
        let bottom = (self.y + self.height).ceil().min(image_height as f64);

        if right <= left || bottom <= top {
            return Err(CropError::OutOfBounds {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
                image_width,
                image_height,
            });
        }

        Ok(PixelRect {
            x: left as u32,
            y: top as u32,
            width: (right - left) as u32,
            height: (bottom - top) as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(x: f64, y: f64, width: f64, height: f64) -> PixelRegion {
        PixelRegion {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn test_scale_ratio_applied_to_origin_and_size() {
        let surface = Rect::new(0.0, 0.0, 500.0, 400.0);
        let crop = Rect::new(10.0, 20.0, 100.0, 50.0);
        let r = resolve_region(&crop, &surface, 1000).unwrap();
        assert_eq!(r, region(20.0, 40.0, 200.0, 100.0));
    }

    #[test]
    fn test_offset_surface() {
        // Surface zoomed and dragged up-left of the crop frame.
        let surface = Rect::new(-150.0, -50.0, 600.0, 600.0);
        let crop = Rect::new(0.0, 100.0, 300.0, 300.0);
        let r = resolve_region(&crop, &surface, 1200).unwrap();
        assert_eq!(r, region(300.0, 300.0, 600.0, 600.0));
    }

    #[test]
    fn test_zero_width_surface_is_degenerate() {
        let surface = Rect::new(0.0, 0.0, 0.0, 100.0);
        let crop = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(matches!(
            resolve_region(&crop, &surface, 100),
            Err(CropError::DegenerateRegion { .. })
        ));
    }

    #[test]
    fn test_clip_inside() {
        let rect = region(20.0, 40.0, 200.0, 100.0).clip(1000, 800).unwrap();
        assert_eq!(
            rect,
            PixelRect {
                x: 20,
                y: 40,
                width: 200,
                height: 100
            }
        );
    }

    #[test]
    fn test_clip_snaps_outward() {
        let rect = region(10.4, 5.6, 20.2, 10.1).clip(100, 100).unwrap();
        // floor(10.4) = 10, ceil(30.6) = 31; floor(5.6) = 5, ceil(15.7) = 16
        assert_eq!(
            rect,
            PixelRect {
                x: 10,
                y: 5,
                width: 21,
                height: 11
            }
        );
    }

    #[test]
    fn test_clip_trims_overhang() {
        let rect = region(-10.0, 90.0, 50.0, 50.0).clip(100, 100).unwrap();
        assert_eq!(
            rect,
            PixelRect {
                x: 0,
                y: 90,
                width: 40,
                height: 10
            }
        );
    }

    #[test]
    fn test_clip_outside_fails() {
        assert!(matches!(
            region(150.0, 0.0, 20.0, 20.0).clip(100, 100),
            Err(CropError::OutOfBounds { .. })
        ));
        assert!(matches!(
            region(-50.0, -50.0, 50.0, 50.0).clip(100, 100),
            Err(CropError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_clip_degenerate_fails() {
        assert!(matches!(
            region(0.0, 0.0, 0.0, 10.0).clip(100, 100),
            Err(CropError::DegenerateRegion { .. })
        ));
        assert!(matches!(
            region(f64::NAN, 0.0, 10.0, 10.0).clip(100, 100),
            Err(CropError::DegenerateRegion { .. })
        ));
        assert!(matches!(
            region(0.0, 0.0, -5.0, 10.0).clip(100, 100),
            Err(CropError::DegenerateRegion { .. })
        ));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
