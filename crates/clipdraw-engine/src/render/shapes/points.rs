use std::mem::{offset_of, size_of};

use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::render::{AttributeDesc, Program, ProgramDesc, RenderCtx, RenderTarget, UniformDesc, VertexBufferDesc};
use crate::scene::DrawList;

use super::common::{GrowableBuffer, ViewportUniform};

/// Draws every `DrawCmd::Point` in a list as a square sprite.
///
/// Positions are already in clip space; only the sprite size is converted
/// from pixels, using the viewport uniform.
pub struct PointRenderer {
    program: Option<Program>,
    viewport_ubo: Option<wgpu::Buffer>,
    bind_group: Option<wgpu::BindGroup>,
    corners: Option<wgpu::Buffer>,
    instances: GrowableBuffer,
}

impl Default for PointRenderer {
    fn default() -> Self {
        Self {
            program: None,
            viewport_ubo: None,
            bind_group: None,
            corners: None,
            instances: GrowableBuffer::new("clipdraw point instances"),
        }
    }
}

impl PointRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the points in `list`, in insertion order, over the current target contents.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        list: &DrawList,
    ) -> Result<()> {
        let instances: Vec<PointInstance> = list
            .points()
            .filter(|p| p.size > 0.0 && p.position.x.is_finite() && p.position.y.is_finite())
            .map(|p| PointInstance {
                position: p.position.to_array(),
                size: p.size,
                color: p.color.to_array(),
            })
            .collect();

        if instances.is_empty() {
            return Ok(());
        }

        self.ensure_program(ctx)?;
        self.ensure_corners(ctx);
        self.write_viewport_uniform(ctx);

        let Some(instance_vbo) = self.instances.write(ctx, &instances) else { return Ok(()) };
        let Some(program) = self.program.as_ref() else { return Ok(()) };
        let Some(bind_group) = self.bind_group.as_ref() else { return Ok(()) };
        let Some(corners) = self.corners.as_ref() else { return Ok(()) };

        let mut rpass = target.begin_load_pass("clipdraw points pass");
        rpass.set_pipeline(program.pipeline());
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, corners.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.draw(0..CORNERS.len() as u32, 0..instances.len() as u32);

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

        let program = Program::compile(ctx.device, ctx.surface_format, &program_desc())?;
        let ubo = program.create_uniform_buffer(ctx.device, "u_viewport")?;
        let bind_group = program.bind_uniforms(ctx.device, &[("u_viewport", &ubo)])?;

        self.program = Some(program);
        self.viewport_ubo = Some(ubo);
        self.bind_group = Some(bind_group);
        Ok(())
    }

    fn ensure_corners(&mut self, ctx: &RenderCtx<'_>) {
        if self.corners.is_some() {
            return;
        }
        self.corners = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("clipdraw point corners"),
            contents: bytemuck::cast_slice(&CORNERS),
            usage: wgpu::BufferUsages::VERTEX,
        }));
    }

    fn write_viewport_uniform(&self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&ViewportUniform::from_ctx(ctx)));
    }
}

/// Two triangles covering a unit square centered on the origin.
const CORNERS: [[f32; 2]; 6] = [
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [-0.5, -0.5],
    [0.5, 0.5],
    [-0.5, 0.5],
];

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct PointInstance {
    position: [f32; 2],
    size: f32,
    color: [f32; 4],
}

fn program_desc() -> ProgramDesc<'static> {
    ProgramDesc::new(
        "clipdraw points",
        include_str!("shaders/point.vert.wgsl"),
        include_str!("shaders/point.frag.wgsl"),
    )
    .buffer(VertexBufferDesc {
        stride: size_of::<[f32; 2]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: vec![AttributeDesc {
            name: "a_corner",
            location: 0,
            format: wgpu::VertexFormat::Float32x2,
            offset: 0,
        }],
    })
    .buffer(VertexBufferDesc {
        stride: size_of::<PointInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: vec![
            AttributeDesc {
                name: "a_position",
                location: 1,
                format: wgpu::VertexFormat::Float32x2,
                offset: offset_of!(PointInstance, position) as u64,
            },
            AttributeDesc {
                name: "a_size",
                location: 2,
                format: wgpu::VertexFormat::Float32,
                offset: offset_of!(PointInstance, size) as u64,
            },
            AttributeDesc {
                name: "a_color",
                location: 3,
                format: wgpu::VertexFormat::Float32x4,
                offset: offset_of!(PointInstance, color) as u64,
            },
        ],
    })
    .uniform(UniformDesc {
        name: "u_viewport",
        binding: 0,
        size: size_of::<ViewportUniform>() as u64,
        visibility: wgpu::ShaderStages::VERTEX,
    })
}
