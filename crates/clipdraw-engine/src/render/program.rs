use std::collections::{HashMap, HashSet};

use anyhow::{bail, ensure, Context, Result};

/// A named vertex attribute inside one vertex buffer.
#[derive(Debug, Clone)]
pub struct AttributeDesc {
    pub name: &'static str,
    pub location: u32,
    pub format: wgpu::VertexFormat,
    /// Byte offset inside one buffer element.
    pub offset: u64,
}

/// One vertex buffer slot and the attributes read from it.
#[derive(Debug, Clone)]
pub struct VertexBufferDesc {
    pub stride: u64,
    pub step_mode: wgpu::VertexStepMode,
    pub attributes: Vec<AttributeDesc>,
}

/// A named uniform buffer binding in bind group 0.
#[derive(Debug, Clone)]
pub struct UniformDesc {
    pub name: &'static str,
    pub binding: u32,
    /// Size of the uniform struct in bytes.
    pub size: u64,
    pub visibility: wgpu::ShaderStages,
}

/// Everything needed to build a shader program: the vertex/fragment source
/// pair plus the names of its inputs.
#[derive(Debug, Clone)]
pub struct ProgramDesc<'a> {
    pub label: &'a str,
    pub vertex_source: &'a str,
    pub fragment_source: &'a str,
    pub vertex_entry: &'a str,
    pub fragment_entry: &'a str,
    pub buffers: Vec<VertexBufferDesc>,
    pub uniforms: Vec<UniformDesc>,
    pub topology: wgpu::PrimitiveTopology,
}

impl<'a> ProgramDesc<'a> {
    /// Descriptor with the default `vs_main` / `fs_main` entry points and a triangle list.
    pub fn new(label: &'a str, vertex_source: &'a str, fragment_source: &'a str) -> Self {
        Self {
            label,
            vertex_source,
            fragment_source,
            vertex_entry: "vs_main",
            fragment_entry: "fs_main",
            buffers: Vec::new(),
            uniforms: Vec::new(),
            topology: wgpu::PrimitiveTopology::TriangleList,
        }
    }

    pub fn buffer(mut self, buffer: VertexBufferDesc) -> Self {
        self.buffers.push(buffer);
        self
    }

    pub fn uniform(mut self, uniform: UniformDesc) -> Self {
        self.uniforms.push(uniform);
        self
    }

    /// All attributes across every vertex buffer, in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = &AttributeDesc> {
        self.buffers.iter().flat_map(|b| b.attributes.iter())
    }

    /// Shader location of the named attribute.
    pub fn attribute_location(&self, name: &str) -> Option<u32> {
        self.attributes().find(|a| a.name == name).map(|a| a.location)
    }

    /// Binding slot of the named uniform.
    pub fn uniform_binding(&self, name: &str) -> Option<u32> {
        self.uniforms.iter().find(|u| u.name == name).map(|u| u.binding)
    }

    /// Name lookup tables kept by a compiled [`Program`].
    fn name_tables(&self) -> (HashMap<&'static str, u32>, HashMap<&'static str, UniformDesc>) {
        let attributes = self.attributes().map(|a| (a.name, a.location)).collect();
        let uniforms = self.uniforms.iter().map(|u| (u.name, u.clone())).collect();
        (attributes, uniforms)
    }

    /// CPU-side checks run before anything reaches the device.
    ///
    /// Catches the mistakes that otherwise surface as opaque pipeline
    /// validation panics: missing entry points, clashing names or locations,
    /// attributes that overrun their buffer stride, zero-sized uniforms.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            declares_entry_point(self.vertex_source, self.vertex_entry),
            "{}: vertex source has no `fn {}`",
            self.label,
            self.vertex_entry
        );
        ensure!(
            declares_entry_point(self.fragment_source, self.fragment_entry),
            "{}: fragment source has no `fn {}`",
            self.label,
            self.fragment_entry
        );

        let mut names = HashSet::new();
        let mut locations = HashSet::new();
        for buffer in &self.buffers {
            ensure!(buffer.stride > 0, "{}: vertex buffer with zero stride", self.label);
            for attr in &buffer.attributes {
                ensure!(names.insert(attr.name), "{}: duplicate attribute `{}`", self.label, attr.name);
                ensure!(
                    locations.insert(attr.location),
                    "{}: attribute `{}` reuses location {}",
                    self.label,
                    attr.name,
                    attr.location
                );
                ensure!(
                    attr.offset + attr.format.size() <= buffer.stride,
                    "{}: attribute `{}` overruns stride {}",
                    self.label,
                    attr.name,
                    buffer.stride
                );
            }
        }

        let mut names = HashSet::new();
        let mut bindings = HashSet::new();
        for u in &self.uniforms {
            ensure!(names.insert(u.name), "{}: duplicate uniform `{}`", self.label, u.name);
            ensure!(
                bindings.insert(u.binding),
                "{}: uniform `{}` reuses binding {}",
                self.label,
                u.name,
                u.binding
            );
            ensure!(u.size > 0, "{}: uniform `{}` has zero size", self.label, u.name);
        }

        Ok(())
    }
}

fn declares_entry_point(source: &str, entry: &str) -> bool {
    source
        .match_indices(entry)
        .any(|(i, _)| {
            let before = source[..i].trim_end();
            let after = source[i + entry.len()..].trim_start();
            before.ends_with("fn") && after.starts_with('(')
        })
}

/// A compiled and linked shader program.
///
/// Holds the render pipeline and the bind group layout for its uniforms, and
/// answers name lookups for attributes and uniforms.
#[derive(Debug)]
pub struct Program {
    label: String,
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    attributes: HashMap<&'static str, u32>,
    uniforms: HashMap<&'static str, UniformDesc>,
    target_format: wgpu::TextureFormat,
}

impl Program {
    /// Compiles both shader stages and links them into a pipeline for `target_format`.
    pub fn compile(
        device: &wgpu::Device,
        target_format: wgpu::TextureFormat,
        desc: &ProgramDesc<'_>,
    ) -> Result<Self> {
        desc.validate()?;

        let vertex = compile_module(device, &format!("{} vertex", desc.label), desc.vertex_source)
            .with_context(|| format!("{}: vertex stage failed to compile", desc.label))?;
        let fragment =
            compile_module(device, &format!("{} fragment", desc.label), desc.fragment_source)
                .with_context(|| format!("{}: fragment stage failed to compile", desc.label))?;

        let layout_entries: Vec<wgpu::BindGroupLayoutEntry> = desc
            .uniforms
            .iter()
            .map(|u| wgpu::BindGroupLayoutEntry {
                binding: u.binding,
                visibility: u.visibility,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(u.size),
                },
                count: None,
            })
            .collect();

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(desc.label),
            entries: &layout_entries,
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(desc.label),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        // Layouts borrow their attribute slices; keep the owners alive alongside.
        let raw_attributes: Vec<Vec<wgpu::VertexAttribute>> = desc
            .buffers
            .iter()
            .map(|b| {
                b.attributes
                    .iter()
                    .map(|a| wgpu::VertexAttribute {
                        format: a.format,
                        offset: a.offset,
                        shader_location: a.location,
                    })
                    .collect()
            })
            .collect();

        let buffer_layouts: Vec<wgpu::VertexBufferLayout<'_>> = desc
            .buffers
            .iter()
            .zip(&raw_attributes)
            .map(|(b, attrs)| wgpu::VertexBufferLayout {
                array_stride: b.stride,
                step_mode: b.step_mode,
                attributes: attrs,
            })
            .collect();

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(desc.label),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vertex,
                entry_point: Some(desc.vertex_entry),
                compilation_options: Default::default(),
                buffers: &buffer_layouts,
            },

            fragment: Some(wgpu::FragmentState {
                module: &fragment,
                entry_point: Some(desc.fragment_entry),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: desc.topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("program `{}` linked for {:?}", desc.label, target_format);

        let (attributes, uniforms) = desc.name_tables();
        Ok(Self {
            label: desc.label.to_string(),
            pipeline,
            bind_group_layout,
            attributes,
            uniforms,
            target_format,
        })
    }

    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    /// Surface format the pipeline was built for; rebuild when it changes.
    pub fn target_format(&self) -> wgpu::TextureFormat {
        self.target_format
    }

    pub fn attribute_location(&self, name: &str) -> Option<u32> {
        self.attributes.get(name).copied()
    }

    pub fn uniform_binding(&self, name: &str) -> Option<u32> {
        self.uniforms.get(name).map(|u| u.binding)
    }

    /// Allocates a uniform buffer sized for the named uniform.
    pub fn create_uniform_buffer(&self, device: &wgpu::Device, name: &str) -> Result<wgpu::Buffer> {
        let Some(u) = self.uniforms.get(name) else {
            bail!("{}: no uniform named `{name}`", self.label);
        };
        Ok(device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(u.name),
            size: u.size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }))
    }

    /// Binds buffers to uniforms by name.
    ///
    /// Every uniform the program declares must be supplied exactly once.
    pub fn bind_uniforms(
        &self,
        device: &wgpu::Device,
        buffers: &[(&str, &wgpu::Buffer)],
    ) -> Result<wgpu::BindGroup> {
        ensure!(
            buffers.len() == self.uniforms.len(),
            "{}: expected {} uniform buffers, got {}",
            self.label,
            self.uniforms.len(),
            buffers.len()
        );

        let mut entries = Vec::with_capacity(buffers.len());
        for (name, buffer) in buffers {
            let binding = self
                .uniform_binding(name)
                .with_context(|| format!("{}: no uniform named `{name}`", self.label))?;
            entries.push(wgpu::BindGroupEntry {
                binding,
                resource: buffer.as_entire_binding(),
            });
        }

        Ok(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(self.label.as_str()),
            layout: &self.bind_group_layout,
            entries: &entries,
        }))
    }
}

fn compile_module(device: &wgpu::Device, label: &str, source: &str) -> Result<wgpu::ShaderModule> {
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    let info = pollster::block_on(module.get_compilation_info());
    let mut errors = Vec::new();
    for msg in &info.messages {
        let at = msg
            .location
            .as_ref()
            .map(|l| format!("{}:{}", l.line_number, l.line_position))
            .unwrap_or_default();
        match msg.message_type {
            wgpu::CompilationMessageType::Error => errors.push(format!("{at} {}", msg.message)),
            wgpu::CompilationMessageType::Warning => log::warn!("{label} {at}: {}", msg.message),
            wgpu::CompilationMessageType::Info => log::debug!("{label} {at}: {}", msg.message),
        }
    }

    if !errors.is_empty() {
        bail!("{label}: {}", errors.join("; "));
    }
    Ok(module)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VS: &str = "@vertex\nfn vs_main(@location(0) p: vec2<f32>) -> @builtin(position) vec4<f32> { return vec4<f32>(p, 0.0, 1.0); }";
    const FS: &str = "@fragment\nfn fs_main() -> @location(0) vec4<f32> { return vec4<f32>(1.0); }";

    fn attr(name: &'static str, location: u32, offset: u64) -> AttributeDesc {
        AttributeDesc { name, location, format: wgpu::VertexFormat::Float32x2, offset }
    }

    fn buffer(attributes: Vec<AttributeDesc>) -> VertexBufferDesc {
        VertexBufferDesc { stride: 16, step_mode: wgpu::VertexStepMode::Vertex, attributes }
    }

    fn uniform(name: &'static str, binding: u32) -> UniformDesc {
        UniformDesc { name, binding, size: 16, visibility: wgpu::ShaderStages::VERTEX }
    }

    #[test]
    fn well_formed_descriptor_validates() {
        let desc = ProgramDesc::new("ok", VS, FS)
            .buffer(buffer(vec![attr("a_position", 0, 0), attr("a_uv", 1, 8)]))
            .uniform(uniform("u_viewport", 0));
        assert!(desc.validate().is_ok());
    }

    #[test]
    fn missing_entry_point_is_rejected() {
        let desc = ProgramDesc::new("bad", VS, "fn main() {}");
        let err = desc.validate().unwrap_err().to_string();
        assert!(err.contains("fs_main"), "{err}");
    }

    #[test]
    fn entry_point_must_be_a_function_declaration() {
        // Mentioned, but not declared.
        assert!(!declares_entry_point("// call vs_main later", "vs_main"));
        assert!(declares_entry_point("fn  vs_main (x: f32)", "vs_main"));
        assert!(!declares_entry_point("fn vs_main_two()", "vs_main"));
    }

    #[test]
    fn duplicate_attribute_location_is_rejected() {
        let desc = ProgramDesc::new("dup", VS, FS)
            .buffer(buffer(vec![attr("a_position", 0, 0)]))
            .buffer(buffer(vec![attr("a_color", 0, 0)]));
        assert!(desc.validate().is_err());
    }

    #[test]
    fn duplicate_attribute_name_is_rejected() {
        let desc = ProgramDesc::new("dup", VS, FS)
            .buffer(buffer(vec![attr("a_position", 0, 0), attr("a_position", 1, 8)]));
        assert!(desc.validate().is_err());
    }

    #[test]
    fn attribute_overrunning_stride_is_rejected() {
        let desc = ProgramDesc::new("overrun", VS, FS)
            .buffer(buffer(vec![attr("a_position", 0, 12)]));
        assert!(desc.validate().is_err());
    }

    #[test]
    fn duplicate_uniform_binding_is_rejected() {
        let desc = ProgramDesc::new("dup", VS, FS)
            .uniform(uniform("u_a", 0))
            .uniform(uniform("u_b", 0));
        assert!(desc.validate().is_err());
    }

    // ── name lookups ─────────────────────────────────────────────────────

    #[test]
    fn lookups_span_every_buffer() {
        let desc = ProgramDesc::new("lookup", VS, FS)
            .buffer(buffer(vec![attr("a_corner", 0, 0)]))
            .buffer(buffer(vec![attr("a_position", 1, 0), attr("a_uv", 2, 8)]))
            .uniform(uniform("u_viewport", 3));

        assert_eq!(desc.attribute_location("a_corner"), Some(0));
        assert_eq!(desc.attribute_location("a_uv"), Some(2));
        assert_eq!(desc.attribute_location("a_missing"), None);
        assert_eq!(desc.uniform_binding("u_viewport"), Some(3));
        assert_eq!(desc.uniform_binding("a_corner"), None);
    }

    #[test]
    fn name_tables_agree_with_descriptor() {
        let desc = ProgramDesc::new("tables", VS, FS)
            .buffer(buffer(vec![attr("a_position", 4, 0), attr("a_uv", 5, 8)]))
            .uniform(uniform("u_transform", 1));
        let (attributes, uniforms) = desc.name_tables();

        assert_eq!(attributes.len(), 2);
        for a in desc.attributes() {
            assert_eq!(attributes.get(a.name).copied(), desc.attribute_location(a.name));
        }
        assert_eq!(uniforms.get("u_transform").map(|u| u.binding), Some(1));
        assert_eq!(uniforms.get("u_transform").map(|u| u.size), Some(16));
    }

    #[test]
    fn zero_sized_uniform_is_rejected() {
        let mut u = uniform("u_a", 0);
        u.size = 0;
        assert!(ProgramDesc::new("zero", VS, FS).uniform(u).validate().is_err());
    }
}
