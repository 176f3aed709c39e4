//! Pinchcrop WASM - WebAssembly bindings for the crop screen
//!
//! This crate exposes `pinchcrop-core` to JavaScript/TypeScript pages that
//! host an image picker's crop step.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for RGB image data
//! - `codec` - source decoding and JPEG output
//! - `session` - the gesture-driven crop session
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, JsCropSession } from '@pinchcrop/wasm';
//!
//! await init();
//!
//! const source = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const session = new JsCropSession(source, 1.0, 375, 667);
//! ```

use wasm_bindgen::prelude::*;

mod codec;
mod session;
mod types;

pub use codec::{decode_image, encode_jpeg};
pub use session::JsCropSession;
pub use types::JsPixelImage;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
