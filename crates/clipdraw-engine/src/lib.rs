//! clipdraw engine crate.
//!
//! The clip-space core (`coords`, `transform`) is pure math with no GPU
//! dependency. The remaining modules are the window + wgpu plumbing that the
//! exercises share instead of each repeating it.

mod error;

pub mod coords;
pub mod transform;

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod render;
pub mod scene;

pub use error::GeometryError;
