use core::f32::consts::PI;

use glam::{Mat4, Vec2, Vec3};

use crate::GeometryError;

use super::TransformMatrix;

/// Degrees to radians, `degrees * π / 180`. No range reduction.
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// Composes uniform scale, rotation and translation into `T * R * S`.
///
/// Zero and negative scales are accepted (they collapse or mirror the
/// geometry); bounding them is up to whoever supplies the value. Non-finite
/// inputs return `InvalidInput`.
pub fn compose_transform(
    scale: f32,
    rotation_degrees: f32,
    translation: Vec2,
) -> Result<TransformMatrix, GeometryError> {
    let scale = GeometryError::require_finite("scale", scale)?;
    compose_transform_axes(Vec2::splat(scale), rotation_degrees, translation)
}

/// Per-axis variant of [`compose_transform`].
pub fn compose_transform_axes(
    scale: Vec2,
    rotation_degrees: f32,
    translation: Vec2,
) -> Result<TransformMatrix, GeometryError> {
    let sx = GeometryError::require_finite("scale.x", scale.x)?;
    let sy = GeometryError::require_finite("scale.y", scale.y)?;
    let degrees = GeometryError::require_finite("rotation_degrees", rotation_degrees)?;
    let tx = GeometryError::require_finite("translation.x", translation.x)?;
    let ty = GeometryError::require_finite("translation.y", translation.y)?;

    let s = Mat4::from_scale(Vec3::new(sx, sy, 1.0));
    let r = Mat4::from_rotation_z(degrees_to_radians(degrees));
    let t = Mat4::from_translation(Vec3::new(tx, ty, 0.0));

    Ok(TransformMatrix::from_mat4(t * r * s))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use glam::Mat3;

    use super::*;

    const EPS: f32 = 1e-6;

    fn compose(s: f32, deg: f32, tx: f32, ty: f32) -> TransformMatrix {
        compose_transform(s, deg, Vec2::new(tx, ty)).unwrap()
    }

    fn assert_point(actual: Vec2, x: f32, y: f32) {
        assert_abs_diff_eq!(actual.x, x, epsilon = EPS);
        assert_abs_diff_eq!(actual.y, y, epsilon = EPS);
    }

    // ── identities ────────────────────────────────────────────────────────

    #[test]
    fn unit_params_give_identity() {
        assert_eq!(compose(1.0, 0.0, 0.0, 0.0).to_mat4(), Mat4::IDENTITY);
    }

    #[test]
    fn origin_lands_on_translation_for_any_scale() {
        for s in [0.01, 0.5, 1.0, 2.0, 7.5] {
            let p = compose(s, 0.0, 0.3, -0.6).transform_point(Vec2::ZERO);
            assert_eq!(p, Vec2::new(0.3, -0.6), "scale {s}");
        }
    }

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn quarter_turn_is_counter_clockwise() {
        let p = compose(1.0, 90.0, 0.0, 0.0).transform_point(Vec2::X);
        assert_point(p, 0.0, 1.0);
    }

    #[test]
    fn full_turns_are_equivalent() {
        let a = compose(1.0, 30.0, 0.0, 0.0).transform_point(Vec2::new(0.5, 0.25));
        let b = compose(1.0, 30.0 + 720.0, 0.0, 0.0).transform_point(Vec2::new(0.5, 0.25));
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-5);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-5);
    }

    // ── order ─────────────────────────────────────────────────────────────

    #[test]
    fn scale_applies_before_translation() {
        let p = compose(2.0, 0.0, 1.0, 0.0).transform_point(Vec2::X);
        assert_eq!(p, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn rotation_applies_before_translation() {
        // Rotate (1,0) -> (0,1), then translate by (1,0).
        let p = compose(1.0, 90.0, 1.0, 0.0).transform_point(Vec2::X);
        assert_point(p, 1.0, 1.0);

        // Translating first would rotate (2,0) about the origin instead.
        let wrong = Mat4::from_rotation_z(degrees_to_radians(90.0))
            * Mat4::from_translation(Vec3::X);
        let q = wrong.transform_point3(Vec3::X).truncate();
        assert!((q - p).length() > 0.5);
    }

    #[test]
    fn scale_rotate_translate_together() {
        // (1,0) -> scale 2 -> (2,0) -> rotate 90 -> (0,2) -> translate (0.5,-1) -> (0.5,1)
        let p = compose(2.0, 90.0, 0.5, -1.0).transform_point(Vec2::X);
        assert_point(p, 0.5, 1.0);
    }

    #[test]
    fn per_axis_scale() {
        let m = compose_transform_axes(Vec2::new(2.0, 3.0), 0.0, Vec2::ZERO).unwrap();
        assert_eq!(m.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(2.0, 3.0));
    }

    // ── shape of the result ───────────────────────────────────────────────

    #[test]
    fn result_is_affine() {
        for (s, deg, tx, ty) in [(1.0, 0.0, 0.0, 0.0), (0.3, 123.0, -0.9, 0.4), (-1.0, -45.0, 1.0, 1.0)] {
            assert!(compose(s, deg, tx, ty).is_affine());
        }
    }

    #[test]
    fn mat3_form_agrees_with_glam_2d_composition() {
        let m = compose(0.75, 40.0, 0.2, -0.3).to_mat3();
        let expected = Mat3::from_translation(Vec2::new(0.2, -0.3))
            * Mat3::from_angle(degrees_to_radians(40.0))
            * Mat3::from_scale(Vec2::splat(0.75));
        for (a, b) in m.to_cols_array().iter().zip(expected.to_cols_array().iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = EPS);
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let a = compose(1.3, 77.0, -0.25, 0.6).to_cols_array();
        let b = compose(1.3, 77.0, -0.25, 0.6).to_cols_array();
        assert_eq!(a.map(f32::to_bits), b.map(f32::to_bits));
    }

    // ── degenerate and invalid input ──────────────────────────────────────

    #[test]
    fn zero_scale_collapses_to_translation() {
        let m = compose(0.0, 45.0, 0.1, 0.2);
        assert_eq!(m.transform_point(Vec2::new(5.0, -3.0)), Vec2::new(0.1, 0.2));
    }

    #[test]
    fn negative_scale_mirrors() {
        let p = compose(-1.0, 0.0, 0.0, 0.0).transform_point(Vec2::new(0.5, 0.25));
        assert_eq!(p, Vec2::new(-0.5, -0.25));
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        assert!(matches!(
            compose_transform(f32::NAN, 0.0, Vec2::ZERO),
            Err(GeometryError::InvalidInput { name: "scale", .. })
        ));
        assert!(matches!(
            compose_transform(1.0, f32::INFINITY, Vec2::ZERO),
            Err(GeometryError::InvalidInput { name: "rotation_degrees", .. })
        ));
        assert!(matches!(
            compose_transform(1.0, 0.0, Vec2::new(0.0, f32::NAN)),
            Err(GeometryError::InvalidInput { name: "translation.y", .. })
        ));
    }

    #[test]
    fn radians_conversion() {
        assert_abs_diff_eq!(degrees_to_radians(180.0), PI, epsilon = EPS);
        assert_abs_diff_eq!(degrees_to_radians(-90.0), -PI / 2.0, epsilon = EPS);
    }
}
