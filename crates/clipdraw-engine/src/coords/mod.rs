//! Coordinate types and the device-to-clip mapping.
//!
//! Two spaces meet here:
//! - device space: logical pixels, origin top-left, +X right, +Y down
//! - clip space: origin at the surface center, each axis in [-1, 1], +Y up
//!
//! `map_to_clip_space` is the only place the conversion happens on the CPU.

mod clip;
mod color;
mod rect;
mod viewport;

pub use clip::{map_client_to_clip, map_to_clip_space, ClipPoint};
pub use color::Color;
pub use rect::SurfaceRect;
pub use viewport::Viewport;
