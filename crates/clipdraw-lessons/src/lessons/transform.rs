use clipdraw_engine::coords::Color;
use clipdraw_engine::core::{App, AppControl, FrameCtx};
use clipdraw_engine::render::shapes::mesh::MeshRenderer;
use clipdraw_engine::scene::{DrawList, Mesh};
use clipdraw_engine::transform::{TransformMatrix, TransformParams};
use clipdraw_engine::GeometryError;

use crate::params::ParamPanel;

const BACKGROUND: Color = Color::rgb(0.08, 0.08, 0.1);

/// A rectangle whose transform is recomposed every frame from the panel.
pub struct TransformLesson {
    panel: ParamPanel,
    mesh: Mesh,
    list: DrawList,
    renderer: MeshRenderer,
}

impl Default for TransformLesson {
    fn default() -> Self {
        Self {
            panel: ParamPanel::default(),
            mesh: Mesh::rectangle_shaded(
                0.5,
                0.3,
                [Color::red(), Color::green(), Color::blue(), Color::white()],
            ),
            list: DrawList::new(),
            renderer: MeshRenderer::new(),
        }
    }
}

impl TransformLesson {
    /// Rebuilds the draw list for `params`.
    ///
    /// On error the previous frame's list is kept.
    pub fn apply(&mut self, params: TransformParams) -> Result<TransformMatrix, GeometryError> {
        let matrix = params.compose()?;
        self.list.clear();
        self.list.push_mesh(self.mesh.clone(), matrix, Color::white());
        Ok(matrix)
    }

    #[cfg(test)]
    pub fn draw_list(&self) -> &DrawList {
        &self.list
    }
}

impl App for TransformLesson {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if super::exit_requested(ctx) {
            return AppControl::Exit;
        }

        let changed = self.panel.update(ctx.input, ctx.input_frame, ctx.time.dt);
        let params = self.panel.snapshot();
        if changed || ctx.time.frame_index == 0 {
            ctx.runtime.set_title(format!("clipdraw: transform  {}", self.panel.summary()));
        }

        if let Err(e) = self.apply(params) {
            log::warn!("transform skipped: {e}");
        }

        let (list, renderer) = (&self.list, &mut self.renderer);
        ctx.render(BACKGROUND, |rctx, target| renderer.render(rctx, target, list))
    }
}
