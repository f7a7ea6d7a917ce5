//! Draw stream types.
//!
//! A `DrawList` is owned by the caller and handed to renderers each frame.
//! Nothing here is global: an exercise that accumulates points keeps its own
//! list alive across frames; one that redraws a fixed shape rebuilds it.

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::mesh::{Mesh, MeshCmd, MeshVertex};
pub use shapes::point::PointCmd;
