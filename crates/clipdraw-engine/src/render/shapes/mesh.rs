use std::mem::{offset_of, size_of};
use std::ops::Range;

use anyhow::Result;
use bytemuck::{Pod, Zeroable};

use crate::render::{AttributeDesc, Program, ProgramDesc, RenderCtx, RenderTarget, UniformDesc, VertexBufferDesc};
use crate::scene::{DrawList, MeshVertex};

use super::common::GrowableBuffer;

/// Draws every `DrawCmd::Mesh` in a list, each with its own transform.
///
/// All vertices go into one buffer; each mesh gets its own uniform slot
/// (matrix + tint) and one draw call.
pub struct MeshRenderer {
    program: Option<Program>,
    slots: Vec<UniformSlot>,
    vertices: GrowableBuffer,
}

struct UniformSlot {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl Default for MeshRenderer {
    fn default() -> Self {
        Self {
            program: None,
            slots: Vec::new(),
            vertices: GrowableBuffer::new("clipdraw mesh vertices"),
        }
    }
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the meshes in `list`, in insertion order, over the current target contents.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        list: &DrawList,
    ) -> Result<()> {
        let mut vertices: Vec<MeshVertex> = Vec::new();
        let mut draws: Vec<(Range<u32>, MeshUniform)> = Vec::new();

        for cmd in list.meshes() {
            if cmd.mesh.is_empty() {
                continue;
            }
            let start = vertices.len() as u32;
            vertices.extend_from_slice(&cmd.mesh.vertices);
            draws.push((
                start..vertices.len() as u32,
                MeshUniform {
                    matrix: cmd.transform.to_cols_array(),
                    tint: cmd.tint.to_array(),
                },
            ));
        }

        if draws.is_empty() {
            return Ok(());
        }

        self.ensure_program(ctx)?;
        self.ensure_slots(ctx, draws.len())?;

        for (slot, (_, uniform)) in self.slots.iter().zip(&draws) {
            ctx.queue.write_buffer(&slot.buffer, 0, bytemuck::bytes_of(uniform));
        }

        let Some(vbo) = self.vertices.write(ctx, &vertices) else { return Ok(()) };
        let Some(program) = self.program.as_ref() else { return Ok(()) };

        let mut rpass = target.begin_load_pass("clipdraw mesh pass");
        rpass.set_pipeline(program.pipeline());
        rpass.set_vertex_buffer(0, vbo.slice(..));
        for (slot, (range, _)) in self.slots.iter().zip(&draws) {
            rpass.set_bind_group(0, &slot.bind_group, &[]);
            rpass.draw(range.clone(), 0..1);
        }

        Ok(())
    }

    fn ensure_program(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        if self
            .program
            .as_ref()
            .is_some_and(|p| p.target_format() == ctx.surface_format)
        {
            return Ok(());
        }

        self.program = Some(Program::compile(ctx.device, ctx.surface_format, &program_desc())?);
        // Bind groups belong to the old layout.
        self.slots.clear();
        Ok(())
    }

    fn ensure_slots(&mut self, ctx: &RenderCtx<'_>, count: usize) -> Result<()> {
        let Some(program) = self.program.as_ref() else { return Ok(()) };
        while self.slots.len() < count {
            let buffer = program.create_uniform_buffer(ctx.device, "u_transform")?;
            let bind_group = program.bind_uniforms(ctx.device, &[("u_transform", &buffer)])?;
            self.slots.push(UniformSlot { buffer, bind_group });
        }
        Ok(())
    }
}

/// Matches `Transform` in `mesh.vert.wgsl`: column-major mat4 then tint.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct MeshUniform {
    matrix: [f32; 16],
    tint: [f32; 4],
}

fn program_desc() -> ProgramDesc<'static> {
    ProgramDesc::new(
        "clipdraw mesh",
        include_str!("shaders/mesh.vert.wgsl"),
        include_str!("shaders/mesh.frag.wgsl"),
    )
    .buffer(VertexBufferDesc {
        stride: size_of::<MeshVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: vec![
            AttributeDesc {
                name: "a_position",
                location: 0,
                format: wgpu::VertexFormat::Float32x2,
                offset: offset_of!(MeshVertex, position) as u64,
            },
            AttributeDesc {
                name: "a_color",
                location: 1,
                format: wgpu::VertexFormat::Float32x4,
                offset: offset_of!(MeshVertex, color) as u64,
            },
        ],
    })
    .uniform(UniformDesc {
        name: "u_transform",
        binding: 0,
        size: size_of::<MeshUniform>() as u64,
        visibility: wgpu::ShaderStages::VERTEX,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_is_valid() {
        program_desc().validate().unwrap();
    }

    #[test]
    fn attributes_match_shader_locations() {
        let desc = program_desc();
        assert_eq!(desc.attribute_location("a_position"), Some(0));
        assert_eq!(desc.attribute_location("a_color"), Some(1));
        assert_eq!(desc.attribute_location("a_corner"), None);
        assert_eq!(desc.uniform_binding("u_transform"), Some(0));
    }

    #[test]
    fn uniform_matches_shader_layout() {
        // mat4x4<f32> (64) + vec4<f32> (16)
        assert_eq!(size_of::<MeshUniform>(), 80);
        assert_eq!(size_of::<MeshVertex>(), 24);
    }
}
