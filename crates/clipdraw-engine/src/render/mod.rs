//! GPU rendering.
//!
//! Renderers consume a `scene::DrawList` and issue wgpu commands. Each one
//! builds its pipeline through `Program` on first use and keeps its buffers
//! across frames.
//!
//! Convention: positions reach the vertex stage already in clip space (points)
//! or in object-local space with a composed `TransformMatrix` (meshes). No
//! renderer converts pixels to clip space except for point sprite sizes.

mod ctx;
mod program;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use program::{AttributeDesc, Program, ProgramDesc, UniformDesc, VertexBufferDesc};
