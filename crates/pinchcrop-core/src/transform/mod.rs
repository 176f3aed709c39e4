//! Zoom/pan transform and the snap-back rules applied when gestures end.
//!
//! # Coordinate System
//!
//! - Scale is applied about the center of the image surface
//! - Translation is in screen points, positive = right/down
//! - The transform is always uniform: `scale_x == scale_y`
//!
//! # Settling
//!
//! While a gesture is in flight the transform is unconstrained. When a pinch
//! ends, [`settle_zoom`] pulls the scale back into the configured range. When a
//! pan ends, [`bounds_correction`] computes how far the surface must move so
//! that it covers the crop frame again.

mod affine;
mod settle;

pub use affine::ZoomTransform;
pub use settle::{bounds_correction, settle_zoom, ZoomLimits};
