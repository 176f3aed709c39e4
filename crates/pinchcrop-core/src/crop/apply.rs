//! Cutting the resolved region out of the source image.

use tracing::debug;

use crate::error::CropError;
use crate::geometry::Rect;
use crate::raster::PixelImage;

use super::{resolve_region, PixelRect, PixelRegion};

/// The output of a successful crop.
#[derive(Debug, Clone, PartialEq)]
pub struct CroppedResult {
    /// The cropped pixels.
    pub image: PixelImage,
    /// Where in the source image they were taken from.
    pub rect: PixelRect,
}

/// Crop `source` to `region`.
///
/// The region is snapped outward to whole pixels and trimmed to the image,
/// so a region hanging partly off the edge yields the overlapping part. The
/// source is never modified.
///
/// # Errors
///
/// - `BufferSizeMismatch` if the source buffer does not match its dimensions
/// - `DegenerateRegion` if the region has no area or is not finite
/// - `OutOfBounds` if the region misses the image entirely
pub fn crop_image(source: &PixelImage, region: &PixelRegion) -> Result<CroppedResult, CropError> {
    source.check_buffer()?;
    let rect = region.clip(source.width, source.height)?;
    let image = source.copy_region(rect.x, rect.y, rect.width, rect.height);
    Ok(CroppedResult { image, rect })
}

/// Resolve the on-screen crop frame against the displayed surface and crop
/// the displayed image accordingly.
///
/// `crop` and `surface` must be in the same screen coordinate space.
/// Returns `MissingImage` when nothing is displayed.
pub fn resolve_crop(
    crop: &Rect,
    surface: &Rect,
    image: Option<&PixelImage>,
) -> Result<CroppedResult, CropError> {
    let image = image.ok_or(CropError::MissingImage)?;
    let region = resolve_region(crop, surface, image.width)?;
    let result = crop_image(image, &region)?;
    debug!(
        x = result.rect.x,
        y = result.rect.y,
        width = result.rect.width,
        height = result.rect.height,
        "crop resolved"
    );
    Ok(result)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
