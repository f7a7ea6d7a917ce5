use core::f32::consts::{FRAC_PI_2, TAU};

use bytemuck::{Pod, Zeroable};

use crate::coords::Color;
use crate::scene::{DrawCmd, DrawList};
use crate::transform::TransformMatrix;

/// Object-local vertex with a per-vertex color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl MeshVertex {
    #[inline]
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self { position: [x, y], color: color.to_array() }
    }
}

/// Triangle-list geometry in object-local coordinates.
///
/// Builders center shapes on the local origin so that rotation and scale act
/// about the shape's center.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
}

impl Mesh {
    #[inline]
    pub fn from_vertices(vertices: Vec<MeshVertex>) -> Self {
        Self { vertices }
    }

    /// One triangle; colors are interpolated across it.
    pub fn triangle(a: [f32; 2], b: [f32; 2], c: [f32; 2], colors: [Color; 3]) -> Self {
        Self::from_vertices(vec![
            MeshVertex::new(a[0], a[1], colors[0]),
            MeshVertex::new(b[0], b[1], colors[1]),
            MeshVertex::new(c[0], c[1], colors[2]),
        ])
    }

    /// Axis-aligned rectangle of `width` x `height` centered on the origin.
    pub fn rectangle(width: f32, height: f32, color: Color) -> Self {
        Self::rectangle_shaded(width, height, [color; 4])
    }

    /// Rectangle with per-corner colors: bottom-left, bottom-right, top-right, top-left.
    pub fn rectangle_shaded(width: f32, height: f32, corners: [Color; 4]) -> Self {
        let (hw, hh) = (width * 0.5, height * 0.5);
        let bl = MeshVertex::new(-hw, -hh, corners[0]);
        let br = MeshVertex::new(hw, -hh, corners[1]);
        let tr = MeshVertex::new(hw, hh, corners[2]);
        let tl = MeshVertex::new(-hw, hh, corners[3]);
        Self::from_vertices(vec![bl, br, tr, bl, tr, tl])
    }

    /// Regular convex polygon, fan-triangulated around its center.
    ///
    /// The first corner points straight up. `sides` below 3 is raised to 3.
    /// Emits `3 * sides` vertices.
    pub fn regular_polygon(sides: u32, radius: f32, center: Color, rim: Color) -> Self {
        let sides = sides.max(3);
        let corner = |k: u32| {
            let angle = FRAC_PI_2 + TAU * (k % sides) as f32 / sides as f32;
            MeshVertex::new(radius * angle.cos(), radius * angle.sin(), rim)
        };

        let mut vertices = Vec::with_capacity(3 * sides as usize);
        for k in 0..sides {
            vertices.push(MeshVertex::new(0.0, 0.0, center));
            vertices.push(corner(k));
            vertices.push(corner(k + 1));
        }
        Self::from_vertices(vertices)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.len() < 3
    }
}

/// Mesh draw payload: geometry, its composed transform and a color multiplier.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshCmd {
    pub mesh: Mesh,
    pub transform: TransformMatrix,
    pub tint: Color,
}

impl MeshCmd {
    #[inline]
    pub fn new(mesh: Mesh, transform: TransformMatrix, tint: Color) -> Self {
        Self { mesh, transform, tint }
    }
}

impl DrawList {
    /// Records a mesh drawn with `transform`.
    #[inline]
    pub fn push_mesh(&mut self, mesh: Mesh, transform: TransformMatrix, tint: Color) {
        self.push(DrawCmd::Mesh(MeshCmd::new(mesh, transform, tint)));
    }
}
