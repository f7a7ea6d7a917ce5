use clipdraw_engine::coords::Color;
use clipdraw_engine::core::{App, AppControl, FrameCtx};
use clipdraw_engine::render::shapes::mesh::MeshRenderer;
use clipdraw_engine::scene::{DrawList, Mesh};
use clipdraw_engine::transform::TransformMatrix;

const BACKGROUND: Color = Color::rgb(0.08, 0.08, 0.1);

/// One static mesh drawn with the identity transform, so its local
/// coordinates are clip coordinates.
pub struct ShapeLesson {
    list: DrawList,
    renderer: MeshRenderer,
}

impl ShapeLesson {
    fn with_mesh(mesh: Mesh) -> Self {
        let mut list = DrawList::new();
        list.push_mesh(mesh, TransformMatrix::identity(), Color::white());
        Self { list, renderer: MeshRenderer::new() }
    }

    pub fn triangle() -> Self {
        Self::with_mesh(Mesh::triangle(
            [0.0, 0.5],
            [-0.5, -0.5],
            [0.5, -0.5],
            [Color::red(), Color::green(), Color::blue()],
        ))
    }

    pub fn rectangle() -> Self {
        Self::with_mesh(Mesh::rectangle_shaded(
            1.0,
            0.6,
            [Color::red(), Color::green(), Color::blue(), Color::white()],
        ))
    }

    pub fn polygon(sides: u32) -> Self {
        Self::with_mesh(Mesh::regular_polygon(sides, 0.6, Color::white(), Color::rgb(0.2, 0.5, 1.0)))
    }

    #[cfg(test)]
    pub fn draw_list(&self) -> &DrawList {
        &self.list
    }
}

impl App for ShapeLesson {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if super::exit_requested(ctx) {
            return AppControl::Exit;
        }

        let (list, renderer) = (&self.list, &mut self.renderer);
        ctx.render(BACKGROUND, |rctx, target| renderer.render(rctx, target, list))
    }
}
