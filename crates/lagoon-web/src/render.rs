//! WebGPU state and the per-frame pass: fullscreen sky + water backdrop,
//! the loaded wall mesh, then instanced base/blob markers.

use glam::Vec3;
use lagoon_core::{
    FrameTick, SceneError, SceneState, WallMesh, BASE_HEIGHT, BASE_MARKER_SCALE,
    BLOB_HOVER_HEIGHT, BLOB_MARKER_SCALE,
};
use web_sys as web;

mod pipelines;

use pipelines::{MarkerInstance, SceneUniforms, WallVertex, MARKER_CAPACITY};

struct WallBuffers {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    scene_pipeline: wgpu::RenderPipeline,
    marker_pipeline: wgpu::RenderPipeline,
    wall_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    wall: Option<WallBuffers>,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    /// Bring up the surface, adapter and device for the canvas. A missing
    /// adapter or device is a hard `ContextUnsupported` error.
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> Result<Self, SceneError> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| SceneError::ContextUnsupported(format!("{e:?}")))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| SceneError::ContextUnsupported("no WebGPU adapter".into()))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits on web to avoid passing unknown fields
                    // to older WebGPU implementations.
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| SceneError::ContextUnsupported(format!("request_device: {e:?}")))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let (uniform_buffer, uniform_bgl, uniform_bind_group) =
            pipelines::create_uniform_resources(&device);
        let scene_pipeline = pipelines::create_scene_pipeline(&device, format, &uniform_bgl);
        let marker_pipeline = pipelines::create_marker_pipeline(&device, format, &uniform_bgl);
        let wall_pipeline = pipelines::create_wall_pipeline(&device, format, &uniform_bgl);
        let (quad_vb, instance_vb) = pipelines::create_marker_buffers(&device);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene_pipeline,
            marker_pipeline,
            wall_pipeline,
            uniform_buffer,
            uniform_bind_group,
            quad_vb,
            instance_vb,
            wall: None,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn upload_wall(&mut self, mesh: &WallMesh) {
        use wgpu::util::DeviceExt;

        let vertices: Vec<WallVertex> = mesh
            .positions
            .iter()
            .zip(mesh.normals.iter())
            .map(|(p, n)| WallVertex {
                position: *p,
                normal: *n,
            })
            .collect();
        let vertex_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("wall_vb"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("wall_ib"),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        self.wall = Some(WallBuffers {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        });
    }

    pub fn render(
        &mut self,
        scene: &SceneState,
        tick: &FrameTick,
    ) -> Result<(), wgpu::SurfaceError> {
        // Lazily upload the wall once the async load delivered it.
        if self.wall.is_none() {
            if let Some(mesh) = scene.entities().wall().mesh() {
                self.upload_wall(mesh);
            }
        }

        let camera = scene.camera();
        let view_proj = camera.view_proj();
        let sun: Vec3 = scene.entities().sky().sun();
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&SceneUniforms {
                view_proj: view_proj.to_cols_array_2d(),
                inv_view_proj: view_proj.inverse().to_cols_array_2d(),
                eye: [camera.eye.x, camera.eye.y, camera.eye.z, 1.0],
                sun: [sun.x, sun.y, sun.z, 0.0],
                misc: [
                    self.width as f32,
                    self.height as f32,
                    tick.water_phase,
                    tick.elapsed,
                ],
            }),
        );

        let mut instances: Vec<MarkerInstance> = Vec::with_capacity(MARKER_CAPACITY);
        for base in scene.entities().bases() {
            let p = base.position();
            instances.push(MarkerInstance {
                pos: [p.x, BASE_HEIGHT, p.y],
                scale: BASE_MARKER_SCALE,
                color: [0.45, 0.42, 0.38, 1.0],
                pulse: 0.0,
                _pad: [0.0; 3],
            });
        }
        for blob in scene.entities().blobs() {
            let p = blob.position();
            let rgb = blob.palette().rgb();
            // inactive emitters stay visible but dimmed
            let dim = if blob.is_active() { 1.0 } else { 0.35 };
            instances.push(MarkerInstance {
                pos: [p.x, BLOB_HOVER_HEIGHT + blob.bob(), p.y],
                scale: BLOB_MARKER_SCALE * (1.0 + 0.25 * blob.pulse()),
                color: [rgb[0] * dim, rgb[1] * dim, rgb[2] * dim, 1.0],
                pulse: blob.pulse(),
                _pad: [0.0; 3],
            });
        }
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(&instances));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.03,
                            g: 0.04,
                            b: 0.08,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_bind_group(0, &self.uniform_bind_group, &[]);

            rpass.set_pipeline(&self.scene_pipeline);
            rpass.draw(0..3, 0..1);

            if let Some(wall) = &self.wall {
                rpass.set_pipeline(&self.wall_pipeline);
                rpass.set_vertex_buffer(0, wall.vertex_buffer.slice(..));
                rpass.set_index_buffer(wall.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..wall.index_count, 0, 0..1);
            }

            rpass.set_pipeline(&self.marker_pipeline);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            rpass.draw(0..6, 0..(instances.len() as u32));
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
