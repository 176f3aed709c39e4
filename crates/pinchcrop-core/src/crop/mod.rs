//! Crop resolution: from on-screen geometry to source pixels.
//!
//! # Coordinate System
//!
//! - The crop frame and image surface are both in screen points
//! - The resolved region is in source-image pixels, origin top-left
//! - One scale ratio (`source width / surface width`) maps both axes, since
//!   the surface always shows the image at its native aspect ratio

mod apply;
mod region;

pub use apply::{crop_image, resolve_crop, CroppedResult};
pub use region::{resolve_region, PixelRect, PixelRegion};
