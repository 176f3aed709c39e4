//! Source decoding and output encoding bindings.

use crate::types::JsPixelImage;
use pinchcrop_core::raster;
use wasm_bindgen::prelude::*;

/// Decode JPEG or PNG bytes into an upright RGB image.
///
/// EXIF orientation is applied, so the result matches what a browser shows
/// for the same file.
///
/// # Example
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const source = decode_image(bytes);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsPixelImage, JsValue> {
    raster::decode_image(bytes)
        .map(JsPixelImage::from_core)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an image as JPEG. `quality` is clamped to 1-100.
///
/// # Example
///
/// ```typescript
/// const cropped = session.done();
/// const jpeg = encode_jpeg(cropped, 90);
/// const blob = new Blob([jpeg], { type: 'image/jpeg' });
/// ```
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsPixelImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    let image = image.to_core().map_err(|e| JsValue::from_str(&e.to_string()))?;
    raster::encode_jpeg(&image, quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_then_decode() {
        let img = JsPixelImage::new(16, 8, vec![90u8; 16 * 8 * 3]);
        let jpeg = encode_jpeg(&img, 85).unwrap();
        let decoded = decode_image(&jpeg).unwrap();
        assert_eq!(decoded.width(), 16);
        assert_eq!(decoded.height(), 8);
    }
}
