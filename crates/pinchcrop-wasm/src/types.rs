//! WASM-compatible wrapper types for image data.

use pinchcrop_core::{CropError, PixelImage};
use wasm_bindgen::prelude::*;

/// An RGB8 image for JavaScript.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. `pixels()` copies it out as a
/// `Uint8Array`; keep images on the WASM side until they are needed in JS.
#[wasm_bindgen]
pub struct JsPixelImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsPixelImage {
    /// Create an image from dimensions and RGB pixel data
    /// (3 bytes per pixel, row-major order).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsPixelImage {
        JsPixelImage {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in the pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsPixelImage {
    pub(crate) fn from_core(img: PixelImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Clones the pixel data. JS can hand over any buffer, so its length is
    /// checked against the dimensions here.
    pub(crate) fn to_core(&self) -> Result<PixelImage, CropError> {
        PixelImage::try_new(self.width, self.height, self.pixels.clone())
    }
}
