use super::DrawCmd;
use super::shapes::mesh::MeshCmd;
use super::shapes::point::PointCmd;

/// Ordered draw stream.
///
/// Paint order is insertion order. `clear()` keeps the allocation so a list
/// rebuilt every frame does not reallocate once warmed.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Point commands in paint order.
    pub fn points(&self) -> impl Iterator<Item = &PointCmd> {
        self.items.iter().filter_map(|c| match c {
            DrawCmd::Point(p) => Some(p),
            _ => None,
        })
    }

    /// Mesh commands in paint order.
    pub fn meshes(&self) -> impl Iterator<Item = &MeshCmd> {
        self.items.iter().filter_map(|c| match c {
            DrawCmd::Mesh(m) => Some(m),
            _ => None,
        })
    }
}
