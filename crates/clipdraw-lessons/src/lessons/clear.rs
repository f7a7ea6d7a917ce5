use clipdraw_engine::coords::Color;
use clipdraw_engine::core::{App, AppControl, FrameCtx};

/// Clear color of the setup exercise.
pub const ORANGE: Color = Color::rgb(1.0, 0.7, 0.0);

/// Clears the surface every frame and draws nothing.
#[derive(Debug, Default)]
pub struct ClearLesson;

impl App for ClearLesson {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if super::exit_requested(ctx) {
            return AppControl::Exit;
        }
        ctx.render(ORANGE, |_, _| Ok(()))
    }
}
