//! Initial placement of the crop frame and image surface.
//!
//! The crop frame is the widest rectangle of the requested ratio that fits in
//! the container, centered. The image surface aspect-fills the crop frame so
//! that at zoom 1.0 the image covers the frame with no gaps.

use serde::{Deserialize, Serialize};

use crate::error::CropError;
use crate::geometry::{Rect, Size};
use crate::transform::ZoomTransform;

/// How the picker wants images cropped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CropType {
    /// Skip the crop screen entirely.
    #[default]
    None,
    /// Crop to a fixed `width / height` ratio.
    Rectangle { ratio: f64 },
}

impl CropType {
    /// The ratio to crop to, if cropping is enabled.
    pub fn ratio(self) -> Option<f64> {
        match self {
            CropType::None => None,
            CropType::Rectangle { ratio } => Some(ratio),
        }
    }
}

/// The fixed crop window, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropFrame {
    rect: Rect,
}

impl CropFrame {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Width divided by height.
    pub fn ratio(&self) -> f64 {
        self.rect.width() / self.rect.height()
    }
}

/// The displayed image: its untransformed frame plus source pixel size.
///
/// The pixel size is only carried for the host, which needs it to size the
/// image element; crop resolution reads it from the source image itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSurface {
    base: Rect,
    pixel_width: u32,
    pixel_height: u32,
}

impl ImageSurface {
    pub fn new(base: Rect, pixel_width: u32, pixel_height: u32) -> Self {
        Self {
            base,
            pixel_width,
            pixel_height,
        }
    }

    /// Frame at identity transform.
    pub fn base(&self) -> Rect {
        self.base
    }

    /// Frame on screen once `transform` is applied.
    pub fn frame(&self, transform: &ZoomTransform) -> Rect {
        transform.apply_to_frame(&self.base)
    }
}

/// Result of laying out the crop screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropLayout {
    pub crop_frame: CropFrame,
    pub surface: ImageSurface,
}

impl CropLayout {
    /// Lay out a crop frame of `ratio` inside `container` and aspect-fill an
    /// image of `image_width`x`image_height` pixels onto it.
    pub fn fit(
        container: Size,
        image_width: u32,
        image_height: u32,
        ratio: f64,
    ) -> Result<Self, CropError> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(CropError::InvalidRatio(ratio));
        }
        if image_width == 0 || image_height == 0 || container.is_empty() {
            return Err(CropError::DegenerateRegion {
                x: 0.0,
                y: 0.0,
                width: container.width,
                height: container.height,
            });
        }

        let mut frame_size = Size::new(container.width, container.width / ratio);
        if frame_size.height > container.height {
            frame_size = Size::new(container.height * ratio, container.height);
        }
        let container_rect = Rect::new(0.0, 0.0, container.width, container.height);
        let crop = Rect::from_center(container_rect.center(), frame_size);

        let image_size = Size::new(image_width as f64, image_height as f64);
        let fill = (crop.width() / image_size.width).max(crop.height() / image_size.height);
        let base = Rect::from_center(crop.center(), image_size.scaled(fill));

        Ok(Self {
            crop_frame: CropFrame::new(crop),
            surface: ImageSurface::new(base, image_width, image_height),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_type_ratio() {
        assert_eq!(CropType::None.ratio(), None);
        assert_eq!(CropType::Rectangle { ratio: 1.5 }.ratio(), Some(1.5));
        assert_eq!(CropType::default(), CropType::None);
    }

    #[test]
    fn test_square_frame_in_portrait_container() {
        let layout = CropLayout::fit(Size::new(400.0, 800.0), 1000, 500, 1.0).unwrap();
        assert_eq!(layout.crop_frame.rect(), Rect::new(0.0, 200.0, 400.0, 400.0));
    }

    #[test]
    fn test_wide_ratio_limited_by_height() {
        let layout = CropLayout::fit(Size::new(400.0, 100.0), 100, 100, 2.0).unwrap();
        let crop = layout.crop_frame.rect();
        assert_eq!(crop.width(), 200.0);
        assert_eq!(crop.height(), 100.0);
        assert_eq!(crop.min_x(), 100.0);
        assert_eq!(layout.crop_frame.ratio(), 2.0);
    }

    #[test]
    fn test_landscape_image_fills_square_frame() {
        let layout = CropLayout::fit(Size::new(400.0, 800.0), 1000, 500, 1.0).unwrap();
        let base = layout.surface.base();
        // Height-limited fill: 400 / 500 = 0.8, width 1000 * 0.8 = 800
        assert_eq!(base.height(), 400.0);
        assert_eq!(base.width(), 800.0);
        assert_eq!(base.center(), layout.crop_frame.rect().center());
        assert!(base.contains_rect(&layout.crop_frame.rect()));
    }

    #[test]
    fn test_surface_frame_follows_transform() {
        let layout = CropLayout::fit(Size::new(400.0, 400.0), 400, 400, 1.0).unwrap();
        let t = ZoomTransform::IDENTITY.scaled_by(2.0);
        let frame = layout.surface.frame(&t);
        assert_eq!(frame, Rect::new(-200.0, -200.0, 800.0, 800.0));
    }

    #[test]
    fn test_rejects_bad_ratio() {
        let container = Size::new(400.0, 400.0);
        assert_eq!(
            CropLayout::fit(container, 10, 10, 0.0),
            Err(CropError::InvalidRatio(0.0))
        );
        assert!(matches!(
            CropLayout::fit(container, 10, 10, f64::NAN),
            Err(CropError::InvalidRatio(_))
        ));
    }

    #[test]
    fn test_rejects_empty_image() {
        assert!(matches!(
            CropLayout::fit(Size::new(400.0, 400.0), 0, 10, 1.0),
            Err(CropError::DegenerateRegion { .. })
        ));
    }
}
