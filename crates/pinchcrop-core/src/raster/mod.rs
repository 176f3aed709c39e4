//! Raster buffers for the source and cropped images.
//!
//! Images are RGB8 in row-major order (3 bytes per pixel). The source image
//! is decoded once, with EXIF orientation applied so that the pixel grid lines
//! up with what the user sees on screen, and is never mutated afterwards.

mod decode;
mod encode;

pub use decode::{decode_image, DecodeError, Orientation};
pub use encode::{encode_jpeg, EncodeError};

use crate::error::CropError;

/// An RGB8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl PixelImage {
    /// Create a new PixelImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a PixelImage, rejecting a buffer whose length does not match
    /// the dimensions.
    pub fn try_new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, CropError> {
        let image = Self {
            width,
            height,
            pixels,
        };
        image.check_buffer()?;
        Ok(image)
    }

    /// Verify that the buffer holds exactly `width * height * 3` bytes.
    pub fn check_buffer(&self) -> Result<(), CropError> {
        let expected = u64::from(self.width) * u64::from(self.height) * 3;
        let actual = self.pixels.len() as u64;
        if expected != actual {
            return Err(CropError::BufferSizeMismatch {
                width: self.width,
                height: self.height,
                expected,
                actual,
            });
        }
        Ok(())
    }

    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an image::RgbImage; `None` if the buffer length is wrong.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Copy out the `width`x`height` block whose top-left pixel is `(x, y)`.
    ///
    /// The caller guarantees the block lies inside the image and that the
    /// buffer passed `check_buffer`.
    pub(crate) fn copy_region(&self, x: u32, y: u32, width: u32, height: u32) -> PixelImage {
        debug_assert!(x + width <= self.width && y + height <= self.height);

        let src_stride = self.width as usize * 3;
        let row_bytes = width as usize * 3;
        let mut output = Vec::with_capacity(row_bytes * height as usize);

        for row in y..y + height {
            let start = row as usize * src_stride + x as usize * 3;
            output.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }

        PixelImage {
            width,
            height,
            pixels: output,
        }
    }
}
