use crate::scene::shapes::mesh::MeshCmd;
use crate::scene::shapes::point::PointCmd;

/// Renderer-agnostic draw command.
///
/// Adding a primitive:
/// - add a module under `scene::shapes`
/// - add a variant here with `DrawList::push_*` helpers in that module
/// - add a matching renderer under `render::shapes`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Point(PointCmd),
    Mesh(MeshCmd),
}
