use anyhow::{Context, Result};
use trigon_shader::ShaderSource;

use super::mesh::{Mesh, MeshData};
use super::polygon::PolygonMode;
use super::program::ShaderProgram;
use super::vertex::Vertex;
use super::{RenderCtx, RenderTarget};

/// Draws one static mesh with one shader program.
///
/// GPU objects are created on first use: the program and mesh buffers once,
/// the pipeline whenever the surface format or effective polygon mode
/// changes. Drawing loads the existing color attachment, so a clear pass is
/// expected to have run first.
pub struct TriangleRenderer<V: Vertex> {
    label: String,
    source: ShaderSource,
    mesh_data: MeshData<V>,
    polygon_mode: PolygonMode,

    program: Option<ShaderProgram>,
    pipeline_key: Option<(wgpu::TextureFormat, PolygonMode)>,
    pipeline: Option<wgpu::RenderPipeline>,
    mesh: Option<Mesh>,

    warned_no_line_mode: bool,
}

impl<V: Vertex> TriangleRenderer<V> {
    /// Checks the shader stages and mesh up front so a bad lesson fails
    /// before a window opens.
    pub fn new(label: impl Into<String>, source: ShaderSource, mesh_data: MeshData<V>) -> Result<Self> {
        let label = label.into();
        ShaderProgram::check(&source).with_context(|| format!("{label}: invalid shader"))?;
        mesh_data
            .validate()
            .with_context(|| format!("{label}: invalid mesh"))?;

        Ok(Self {
            label,
            source,
            mesh_data,
            polygon_mode: PolygonMode::Fill,
            program: None,
            pipeline_key: None,
            pipeline: None,
            mesh: None,
            warned_no_line_mode: false,
        })
    }

    pub fn with_polygon_mode(mut self, mode: PolygonMode) -> Self {
        self.polygon_mode = mode;
        self
    }

    pub fn polygon_mode(&self) -> PolygonMode {
        self.polygon_mode
    }

    /// Flips between fill and wireframe; returns the new requested mode.
    pub fn toggle_wireframe(&mut self) -> PolygonMode {
        self.polygon_mode = self.polygon_mode.toggled();
        self.polygon_mode
    }

    pub fn source(&self) -> &ShaderSource {
        &self.source
    }

    /// Records the draw into `target`.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) -> Result<()> {
        self.ensure_program(ctx)?;
        self.ensure_pipeline(ctx);
        self.ensure_mesh(ctx);

        let (Some(pipeline), Some(mesh)) = (self.pipeline.as_ref(), self.mesh.as_ref()) else {
            return Ok(());
        };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(&format!("{} pass", self.label)),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        mesh.draw(&mut rpass);

        Ok(())
    }

    fn ensure_program(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        if self.program.is_some() {
            return Ok(());
        }

        let program = ShaderProgram::compile(ctx.device, &self.label, &self.source)
            .with_context(|| format!("{}: shader compilation failed", self.label))?;
        self.program = Some(program);
        self.pipeline = None;
        self.pipeline_key = None;
        Ok(())
    }

    fn effective_mode(&mut self, features: wgpu::Features) -> PolygonMode {
        let mode = self.polygon_mode.resolve(features);
        if mode != self.polygon_mode && !self.warned_no_line_mode {
            log::warn!(
                "{}: wireframe needs POLYGON_MODE_LINE, which this device lacks; drawing filled",
                self.label
            );
            self.warned_no_line_mode = true;
        }
        mode
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        let mode = self.effective_mode(ctx.features);
        let key = (ctx.surface_format, mode);
        if self.pipeline_key == Some(key) && self.pipeline.is_some() {
            return;
        }
        let Some(program) = self.program.as_ref() else { return };

        let layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some(&format!("{} pipeline layout", self.label)),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&format!("{} pipeline", self.label)),
            layout: Some(&layout),

            vertex: wgpu::VertexState {
                module: &program.vertex.module,
                entry_point: Some(&program.vertex.entry_point),
                compilation_options: Default::default(),
                buffers: &[V::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &program.fragment.module,
                entry_point: Some(&program.fragment.entry_point),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: mode.to_wgpu(),
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("{}: built pipeline for {:?} / {:?}", self.label, key.0, key.1);

        self.pipeline_key = Some(key);
        self.pipeline = Some(pipeline);
    }

    fn ensure_mesh(&mut self, ctx: &RenderCtx<'_>) {
        if self.mesh.is_none() {
            self.mesh = Some(Mesh::upload(ctx.device, &self.label, &self.mesh_data));
        }
    }
}
