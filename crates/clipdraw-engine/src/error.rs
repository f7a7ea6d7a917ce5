use thiserror::Error;

/// Failure of a clip-space mapping or transform composition.
///
/// Both variants are local to the call that produced them. Retrying with the
/// same arguments reproduces the same error, so callers skip the frame (or
/// the click) instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// Surface dimensions are zero, negative or non-finite.
    #[error("invalid surface size {width}x{height}")]
    InvalidSurface { width: f32, height: f32 },

    /// A numeric input is NaN or infinite.
    #[error("non-finite value for `{name}`: {value}")]
    InvalidInput { name: &'static str, value: f32 },
}

impl GeometryError {
    /// Returns `Ok(value)` when `value` is finite, otherwise `InvalidInput`.
    #[inline]
    pub(crate) fn require_finite(name: &'static str, value: f32) -> Result<f32, GeometryError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(GeometryError::InvalidInput { name, value })
        }
    }
}
