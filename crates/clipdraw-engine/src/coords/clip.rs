use crate::GeometryError;

use super::{SurfaceRect, Viewport};

/// A point in clip space.
///
/// The mapper does not clamp, so a click that lands slightly outside the
/// surface yields components outside [-1, 1]. Use [`ClipPoint::is_on_surface`]
/// or [`ClipPoint::clamped`] downstream when that matters.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ClipPoint {
    pub x: f32,
    pub y: f32,
}

impl ClipPoint {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// True when both components lie in [-1, 1].
    #[inline]
    pub fn is_on_surface(self) -> bool {
        (-1.0..=1.0).contains(&self.x) && (-1.0..=1.0).contains(&self.y)
    }

    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(self.x.clamp(-1.0, 1.0), self.y.clamp(-1.0, 1.0))
    }

    /// Layout used for attribute uploads: `[x, y]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl From<ClipPoint> for glam::Vec2 {
    #[inline]
    fn from(p: ClipPoint) -> Self {
        glam::Vec2::new(p.x, p.y)
    }
}

/// Maps a device-space offset (pixels from the surface's top-left corner) to clip space.
///
/// `x = 2 * device_x / width - 1`, `y = -(2 * device_y / height - 1)`.
/// The y flip is required: device y grows downward, clip y grows upward.
pub fn map_to_clip_space(
    device_x: f32,
    device_y: f32,
    surface: Viewport,
) -> Result<ClipPoint, GeometryError> {
    let surface = surface.validate()?;
    let device_x = GeometryError::require_finite("device_x", device_x)?;
    let device_y = GeometryError::require_finite("device_y", device_y)?;

    let x = (2.0 * device_x / surface.width) - 1.0;
    let y = -((2.0 * device_y / surface.height) - 1.0);

    // Finite inputs can still overflow against a tiny surface.
    if !x.is_finite() {
        return Err(GeometryError::InvalidInput { name: "device_x", value: device_x });
    }
    if !y.is_finite() {
        return Err(GeometryError::InvalidInput { name: "device_y", value: device_y });
    }

    Ok(ClipPoint::new(x, y))
}

/// Maps an absolute pointer position to clip space against the surface's bounding rect.
///
/// `left`/`top` are subtracted first; the rest is [`map_to_clip_space`].
pub fn map_client_to_clip(
    client_x: f32,
    client_y: f32,
    rect: SurfaceRect,
) -> Result<ClipPoint, GeometryError> {
    let left = GeometryError::require_finite("rect.left", rect.left)?;
    let top = GeometryError::require_finite("rect.top", rect.top)?;
    let rect = SurfaceRect { left, top, ..rect };

    let (dx, dy) = rect.local_offset(client_x, client_y);
    map_to_clip_space(dx, dy, rect.size())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: [(f32, f32); 5] = [
        (640.0, 480.0),
        (1.0, 1.0),
        (333.0, 17.0),
        (1920.0, 1080.0),
        (0.5, 2048.0),
    ];

    fn vp(w: f32, h: f32) -> Viewport { Viewport::new(w, h) }

    // ── fixed points ──────────────────────────────────────────────────────

    #[test]
    fn center_maps_to_origin() {
        for (w, h) in SIZES {
            let p = map_to_clip_space(w / 2.0, h / 2.0, vp(w, h)).unwrap();
            assert_eq!(p, ClipPoint::origin(), "surface {w}x{h}");
        }
    }

    #[test]
    fn top_left_maps_to_clip_top_left() {
        for (w, h) in SIZES {
            let p = map_to_clip_space(0.0, 0.0, vp(w, h)).unwrap();
            assert_eq!(p, ClipPoint::new(-1.0, 1.0), "surface {w}x{h}");
        }
    }

    #[test]
    fn bottom_right_maps_to_clip_bottom_right() {
        for (w, h) in SIZES {
            let p = map_to_clip_space(w, h, vp(w, h)).unwrap();
            assert_eq!(p, ClipPoint::new(1.0, -1.0), "surface {w}x{h}");
        }
    }

    #[test]
    fn y_axis_is_flipped() {
        // A point in the upper quarter of the surface is above the clip origin.
        let p = map_to_clip_space(320.0, 120.0, vp(640.0, 480.0)).unwrap();
        assert_eq!(p, ClipPoint::new(0.0, 0.5));
    }

    #[test]
    fn mapping_is_deterministic() {
        let a = map_to_clip_space(123.25, 77.5, vp(640.0, 480.0)).unwrap();
        let b = map_to_clip_space(123.25, 77.5, vp(640.0, 480.0)).unwrap();
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
    }

    // ── out-of-surface input ──────────────────────────────────────────────

    #[test]
    fn outside_surface_is_not_clamped() {
        let p = map_to_clip_space(-160.0, 720.0, vp(640.0, 480.0)).unwrap();
        assert_eq!(p, ClipPoint::new(-1.5, -2.0));
        assert!(!p.is_on_surface());
        assert_eq!(p.clamped(), ClipPoint::new(-1.0, -1.0));
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn zero_sized_surface_is_rejected() {
        assert_eq!(
            map_to_clip_space(0.0, 0.0, vp(0.0, 480.0)),
            Err(GeometryError::InvalidSurface { width: 0.0, height: 480.0 })
        );
        assert!(map_to_clip_space(0.0, 0.0, vp(640.0, 0.0)).is_err());
    }

    #[test]
    fn non_finite_surface_is_rejected() {
        assert!(matches!(
            map_to_clip_space(1.0, 1.0, vp(f32::INFINITY, 480.0)),
            Err(GeometryError::InvalidSurface { .. })
        ));
    }

    #[test]
    fn non_finite_coordinate_is_rejected() {
        assert!(matches!(
            map_to_clip_space(f32::NAN, 1.0, vp(640.0, 480.0)),
            Err(GeometryError::InvalidInput { name: "device_x", .. })
        ));
        assert!(matches!(
            map_to_clip_space(1.0, f32::NEG_INFINITY, vp(640.0, 480.0)),
            Err(GeometryError::InvalidInput { name: "device_y", .. })
        ));
    }

    #[test]
    fn overflowing_result_is_rejected() {
        assert_eq!(
            map_to_clip_space(f32::MAX, 0.0, vp(0.5, 1.0)),
            Err(GeometryError::InvalidInput { name: "device_x", value: f32::MAX })
        );
        assert!(matches!(
            map_to_clip_space(0.0, -f32::MAX, vp(1.0, 0.25)),
            Err(GeometryError::InvalidInput { name: "device_y", .. })
        ));
        // Large but representable stays unclamped.
        assert_eq!(
            map_to_clip_space(6400.0, 0.0, vp(640.0, 480.0)),
            Ok(ClipPoint::new(19.0, 1.0))
        );
    }

    // ── client coordinates ────────────────────────────────────────────────

    #[test]
    fn client_position_is_offset_by_rect_origin() {
        let rect = SurfaceRect::new(100.0, 50.0, 200.0, 100.0);
        assert_eq!(map_client_to_clip(200.0, 100.0, rect).unwrap(), ClipPoint::origin());
        assert_eq!(map_client_to_clip(100.0, 50.0, rect).unwrap(), ClipPoint::new(-1.0, 1.0));
        assert_eq!(map_client_to_clip(300.0, 150.0, rect).unwrap(), ClipPoint::new(1.0, -1.0));
    }

    #[test]
    fn client_rect_with_nan_origin_is_rejected() {
        let rect = SurfaceRect::new(f32::NAN, 0.0, 200.0, 100.0);
        assert!(matches!(
            map_client_to_clip(10.0, 10.0, rect),
            Err(GeometryError::InvalidInput { name: "rect.left", .. })
        ));
    }

    // ── ClipPoint ─────────────────────────────────────────────────────────

    #[test]
    fn upload_layout_is_xy() {
        assert_eq!(ClipPoint::new(0.25, -0.75).to_array(), [0.25, -0.75]);
    }
}
