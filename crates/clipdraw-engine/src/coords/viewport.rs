use crate::GeometryError;

/// Surface size in logical pixels.
///
/// This is the basis of the device-to-clip mapping, so a zero or non-finite
/// side makes the mapping undefined.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Returns `self` if usable for mapping, otherwise `InvalidSurface`.
    #[inline]
    pub fn validate(self) -> Result<Self, GeometryError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(GeometryError::InvalidSurface { width: self.width, height: self.height })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_size_is_valid() {
        assert!(Viewport::new(640.0, 480.0).is_valid());
        assert_eq!(Viewport::new(1.0, 1.0).validate(), Ok(Viewport::new(1.0, 1.0)));
    }

    #[test]
    fn zero_or_negative_side_is_rejected() {
        for vp in [
            Viewport::new(0.0, 480.0),
            Viewport::new(640.0, 0.0),
            Viewport::new(-10.0, 10.0),
        ] {
            assert_eq!(
                vp.validate(),
                Err(GeometryError::InvalidSurface { width: vp.width, height: vp.height })
            );
        }
    }

    #[test]
    fn non_finite_side_is_rejected() {
        assert!(!Viewport::new(f32::INFINITY, 10.0).is_valid());
        assert!(Viewport::new(10.0, f32::NAN).validate().is_err());
    }
}
