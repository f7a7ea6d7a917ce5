use glam::{Mat3, Mat4, Vec2, Vec3, Vec4};

/// Composed 4×4 affine transform.
///
/// Wraps a `glam::Mat4` (column-major). The bottom row is always
/// `[0, 0, 0, 1]` for matrices produced by the composer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformMatrix(Mat4);

impl TransformMatrix {
    #[inline]
    pub const fn identity() -> Self {
        Self(Mat4::IDENTITY)
    }

    #[inline]
    pub(crate) const fn from_mat4(m: Mat4) -> Self {
        Self(m)
    }

    #[inline]
    pub const fn to_mat4(self) -> Mat4 {
        self.0
    }

    /// Equivalent 3×3 affine form for pure 2D consumers.
    ///
    /// Drops the z row/column; the translation moves into the third column.
    pub fn to_mat3(self) -> Mat3 {
        let x = self.0.x_axis;
        let y = self.0.y_axis;
        let w = self.0.w_axis;
        Mat3::from_cols(
            Vec3::new(x.x, x.y, 0.0),
            Vec3::new(y.x, y.y, 0.0),
            Vec3::new(w.x, w.y, 1.0),
        )
    }

    /// Flat upload layout: 16 floats, column-major.
    ///
    /// Translation lands at indices 12 and 13.
    #[inline]
    pub fn to_cols_array(self) -> [f32; 16] {
        self.0.to_cols_array()
    }

    /// Applies the transform to a local 2D point (z = 0, w = 1).
    #[inline]
    pub fn transform_point(self, p: Vec2) -> Vec2 {
        self.0.transform_point3(p.extend(0.0)).truncate()
    }

    #[inline]
    pub fn is_affine(self) -> bool {
        self.0.row(3) == Vec4::W
    }
}

impl Default for TransformMatrix {
    fn default() -> Self {
        Self::identity()
    }
}
