//! Per-object transform composition.
//!
//! Geometry is authored in object-local coordinates around the origin. Each
//! frame the live parameters (scale, rotation, translation) are folded into a
//! single affine matrix that the vertex stage multiplies positions by.
//!
//! Multiplication order is fixed: `T * R * S`. Applied to a column vector the
//! rightmost factor acts first, so geometry is scaled, then rotated about the
//! local origin, then moved into place.

mod compose;
mod matrix;
mod params;

pub use compose::{compose_transform, compose_transform_axes, degrees_to_radians};
pub use matrix::TransformMatrix;
pub use params::TransformParams;
