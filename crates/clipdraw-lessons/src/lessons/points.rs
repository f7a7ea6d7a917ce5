use clipdraw_engine::coords::{map_client_to_clip, ClipPoint, Color, SurfaceRect};
use clipdraw_engine::core::{App, AppControl, FrameCtx};
use clipdraw_engine::input::MouseButton;
use clipdraw_engine::render::shapes::points::PointRenderer;
use clipdraw_engine::scene::DrawList;
use clipdraw_engine::GeometryError;

/// Sprite size of a placed point, in logical pixels.
pub const POINT_SIZE: f32 = 10.0;

/// Red on the left half of the surface, blue elsewhere.
pub fn color_for(p: ClipPoint) -> Color {
    if p.x < 0.0 { Color::red() } else { Color::blue() }
}

/// Click-to-place points. Every click is kept and redrawn each frame.
#[derive(Default)]
pub struct PointsLesson {
    points: DrawList,
    renderer: PointRenderer,
}

impl PointsLesson {
    /// Places a point at a pointer release position.
    pub fn place(&mut self, x: f32, y: f32, surface: SurfaceRect) -> Result<ClipPoint, GeometryError> {
        let p = map_client_to_clip(x, y, surface)?;
        self.points.push_point(p, POINT_SIZE, color_for(p));
        Ok(p)
    }

    #[cfg(test)]
    pub fn points(&self) -> &DrawList {
        &self.points
    }
}

impl App for PointsLesson {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if super::exit_requested(ctx) {
            return AppControl::Exit;
        }

        let surface = ctx.window.surface_rect();
        let clicks: Vec<(f32, f32)> = ctx.input_frame.releases(MouseButton::Left).collect();
        for (x, y) in clicks {
            match self.place(x, y, surface) {
                Ok(p) => log::debug!("point {} at ({:.3}, {:.3})", self.points.len(), p.x, p.y),
                Err(e) => log::warn!("click at ({x}, {y}) skipped: {e}"),
            }
        }

        let (list, renderer) = (&self.points, &mut self.renderer);
        ctx.render(Color::black(), |rctx, target| renderer.render(rctx, target, list))
    }
}
