//! Pinchcrop Core - crop screen geometry
//!
//! This crate implements the interactive part of an image picker's crop
//! screen without depending on any UI toolkit: pinch/pan gestures drive a
//! zoom transform that snaps back into bounds when gestures end, and the
//! final crop frame is resolved into source-image pixels and cut out.
//!
//! # Module Structure
//!
//! - `gesture` - host gesture samples and the [`GestureSink`] interface
//! - `transform` - the zoom transform and its end-of-gesture corrections
//! - `controller` - applies gestures to the transform, requests animations
//! - `crop` - maps the crop frame to pixels and crops the source image
//! - `session` - the Idle / Done / Cancelled lifecycle
//! - `raster` - RGB8 buffers, decoding and JPEG output
//!
//! Hosts supply side effects (animations, haptics, dismissal) through
//! [`HostEffects`]. Logging goes through `tracing`; no subscriber is
//! installed here.

pub mod config;
pub mod controller;
pub mod crop;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod layout;
pub mod raster;
pub mod session;
pub mod transform;

pub use config::{ConfigError, CropConfig};
pub use controller::TransformController;
pub use crop::{resolve_crop, CroppedResult, PixelRect, PixelRegion};
pub use effects::{Animation, AnimationCurve, HostEffects, NoopEffects};
pub use error::CropError;
pub use geometry::{Point, Rect, Size};
pub use gesture::{GestureKind, GestureSink, GestureState};
pub use layout::{CropFrame, CropLayout, CropType, ImageSurface};
pub use raster::{decode_image, encode_jpeg, PixelImage};
pub use session::{CropSession, SessionState};
pub use transform::{ZoomLimits, ZoomTransform};
