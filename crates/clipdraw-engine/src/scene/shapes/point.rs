use crate::coords::{ClipPoint, Color};
use crate::scene::{DrawCmd, DrawList};

/// A square point sprite centered on a clip-space position.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCmd {
    pub position: ClipPoint,
    /// Side length in logical pixels.
    pub size: f32,
    pub color: Color,
}

impl PointCmd {
    #[inline]
    pub fn new(position: ClipPoint, size: f32, color: Color) -> Self {
        Self { position, size, color }
    }
}

impl DrawList {
    /// Records a point.
    #[inline]
    pub fn push_point(&mut self, position: ClipPoint, size: f32, color: Color) {
        self.push(DrawCmd::Point(PointCmd::new(position, size, color)));
    }
}
