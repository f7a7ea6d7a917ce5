use super::Viewport;

/// Bounding rectangle of a rendering surface, in logical pixels.
///
/// This is what a pointer event is measured against: `left`/`top` are the
/// surface's offset inside the coordinate space the pointer reports in.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    #[inline]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// Rectangle anchored at the origin, covering a whole window surface.
    #[inline]
    pub const fn from_size(size: Viewport) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    #[inline]
    pub const fn size(self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Converts an absolute pointer position into an offset from the top-left corner.
    #[inline]
    pub fn local_offset(self, x: f32, y: f32) -> (f32, f32) {
        (x - self.left, y - self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(left: f32, top: f32, w: f32, h: f32) -> SurfaceRect { SurfaceRect::new(left, top, w, h) }

    // ── local_offset ──────────────────────────────────────────────────────

    #[test]
    fn local_offset_subtracts_origin() {
        assert_eq!(r(10.0, 20.0, 100.0, 100.0).local_offset(15.0, 70.0), (5.0, 50.0));
    }

    #[test]
    fn local_offset_can_be_negative() {
        assert_eq!(r(10.0, 20.0, 100.0, 100.0).local_offset(0.0, 0.0), (-10.0, -20.0));
    }

    // ── size ──────────────────────────────────────────────────────────────

    #[test]
    fn from_size_round_trips_viewport() {
        let vp = Viewport::new(640.0, 480.0);
        let rect = SurfaceRect::from_size(vp);
        assert_eq!(rect.size(), vp);
        assert_eq!((rect.left, rect.top), (0.0, 0.0));
    }
}
