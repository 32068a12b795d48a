//! wgpu renderer for the LOD mesh family.
//!
//! All three meshes are uploaded once at startup. Each frame the published
//! uniforms are staged into a single [`SceneUniform`] buffer and the one
//! selected mesh is drawn in a depth-tested, alpha-blended pass.

use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use super::pipeline_util::{blended_color_target, depth_stencil_state};
use super::uniform::SceneUniform;
use super::RenderBackend;
use crate::error::ViewerError;
use crate::gpu::pipeline_helpers::{clear_color, uniform_buffer};
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::gpu::texture::DepthTarget;
use crate::lod::LodLevel;
use crate::options::WindowOptions;
use crate::scene::{LodMeshSet, Mesh, Vertex};

const MESH_SHADER: &str = include_str!("../../assets/shaders/raster/mesh.wgsl");

/// Vertex and index buffers for one LOD level.
struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuMesh {
    fn upload(
        device: &wgpu::Device,
        level: LodLevel,
        mesh: &Mesh,
    ) -> Result<Self, ViewerError> {
        let index_count = u32::try_from(mesh.indices.len()).map_err(|_| {
            ViewerError::InvalidOptions(format!(
                "{level:?} mesh has too many indices ({})",
                mesh.indices.len()
            ))
        })?;

        let vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{level:?} LOD Vertex Buffer")),
                contents: bytemuck::cast_slice(&mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{level:?} LOD Index Buffer")),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        Ok(Self {
            vertex_buffer,
            index_buffer,
            index_count,
        })
    }
}

/// Draws one LOD mesh per frame to the window surface.
pub struct MeshRenderer {
    meshes: [GpuMesh; 3],
    pipeline: wgpu::RenderPipeline,
    uniform: SceneUniform,
    scene_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    depth: DepthTarget,
    clear_color: wgpu::Color,
    pending_draw: Option<LodLevel>,
    context: RenderContext,
}

impl MeshRenderer {
    /// Initialize the GPU, upload the meshes, and build the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Gpu`] if the device cannot be created and
    /// [`ViewerError::Shader`] if the shader or pipeline fails validation.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: &WindowOptions,
        meshes: &LodMeshSet,
    ) -> Result<Self, ViewerError> {
        let context = RenderContext::new(window, size, options.vsync).await?;
        let device = &context.device;

        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let mut composer = ShaderComposer::new()?;
        let shader =
            composer.compose(device, "Mesh Shader", MESH_SHADER, "raster/mesh.wgsl")?;

        let uniform = SceneUniform::default();
        let scene_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Scene Uniform Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Scene Bind Group Layout"),
                entries: &[uniform_buffer(0)],
            });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_buffer.as_entire_binding(),
            }],
        });

        let pipeline =
            Self::create_pipeline(device, &shader, &bind_group_layout, context.format());

        if let Some(err) = device.pop_error_scope().await {
            return Err(ViewerError::Shader(err.to_string()));
        }

        let [high, medium, low] = LodLevel::ALL;
        let gpu_meshes = [
            GpuMesh::upload(device, high, meshes.get(high))?,
            GpuMesh::upload(device, medium, meshes.get(medium))?,
            GpuMesh::upload(device, low, meshes.get(low))?,
        ];
        for (level, mesh) in meshes.iter() {
            log::info!(
                "uploaded {level:?} mesh: {} vertices, {} triangles",
                mesh.vertices.len(),
                mesh.triangle_count()
            );
        }

        let (width, height) = context.size();
        let depth = DepthTarget::new(device, width, height);

        Ok(Self {
            meshes: gpu_meshes,
            pipeline,
            uniform,
            scene_buffer,
            bind_group,
            depth,
            clear_color: clear_color(options.clear_color),
            pending_draw: None,
            context,
        })
    }

    fn create_pipeline(
        device: &wgpu::Device,
        shader: &wgpu::ShaderModule,
        bind_group_layout: &wgpu::BindGroupLayout,
        format: wgpu::TextureFormat,
    ) -> wgpu::RenderPipeline {
        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Mesh Pipeline Layout"),
                bind_group_layouts: &[bind_group_layout],
                push_constant_ranges: &[],
            });

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0, // position
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1, // normal
                },
            ],
        };

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Mesh Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_layout],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &blended_color_target(format),
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(depth_stencil_state()),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }

    /// Handle a window resize. Zero sizes (minimized) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(width, height);
        self.depth = DepthTarget::new(&self.context.device, width, height);
    }

    /// The staged uniform block.
    #[must_use]
    pub const fn uniform(&self) -> &SceneUniform {
        &self.uniform
    }

    fn render_frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.context.queue.write_buffer(
            &self.scene_buffer,
            0,
            bytemuck::cast_slice(&[self.uniform]),
        );

        let draw = self.pending_draw.take().map(|level| &self.meshes[level.index()]);
        let mut encoder = self.context.create_encoder();
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Mesh Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(
                    wgpu::RenderPassDepthStencilAttachment {
                        view: &self.depth.view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    },
                ),
                ..Default::default()
            });

            if let Some(mesh) = draw {
                pass.set_pipeline(&self.pipeline);
                pass.set_bind_group(0, &self.bind_group, &[]);
                pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                pass.set_index_buffer(
                    mesh.index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        self.context.submit(encoder);
        frame.present();
        Ok(())
    }
}

impl RenderBackend for MeshRenderer {
    fn clear(&mut self, color: [f32; 4]) {
        self.clear_color = clear_color(color);
        self.pending_draw = None;
    }

    fn set_float(&mut self, name: &str, value: f32) {
        if !self.uniform.set_float(name, value) {
            log::warn!("unknown float uniform '{name}'");
        }
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        if !self.uniform.set_vec3(name, value) {
            log::warn!("unknown vec3 uniform '{name}'");
        }
    }

    fn set_mat4(&mut self, name: &str, value: Mat4) {
        if !self.uniform.set_mat4(name, value) {
            log::warn!("unknown mat4 uniform '{name}'");
        }
    }

    fn draw_mesh(&mut self, level: LodLevel) {
        self.pending_draw = Some(level);
    }

    fn present(&mut self) {
        match self.render_frame() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                log::debug!("surface outdated, reconfiguring");
                self.context.reconfigure();
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("surface timeout, skipping frame");
            }
            Err(e) => log::error!("render error: {e:?}"),
        }
    }
}
