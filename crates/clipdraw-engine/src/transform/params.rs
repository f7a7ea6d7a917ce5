use glam::Vec2;

use crate::GeometryError;

use super::{compose_transform, TransformMatrix};

/// Live transform parameters for one drawable.
///
/// Replaced wholesale every frame from whatever drives the animation; the
/// matrix is derived from it and never stored long-term.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformParams {
    /// Uniform scale factor. Positive by convention; not enforced here.
    pub scale: f32,
    /// Counter-clockwise rotation in degrees.
    pub rotation_degrees: f32,
    /// Translation in clip units.
    pub translation: Vec2,
}

impl TransformParams {
    #[inline]
    pub const fn new(scale: f32, rotation_degrees: f32, translation: Vec2) -> Self {
        Self { scale, rotation_degrees, translation }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, Vec2::ZERO)
    }

    /// Composes the parameters into `T * R * S`.
    #[inline]
    pub fn compose(&self) -> Result<TransformMatrix, GeometryError> {
        compose_transform(self.scale, self.rotation_degrees, self.translation)
    }
}

impl Default for TransformParams {
    fn default() -> Self {
        Self::identity()
    }
}
