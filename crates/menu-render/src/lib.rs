//! wgpu renderer for the sphere menu.
//!
//! Two pipelines share `menu_core::SCENE_WGSL`: a line-list pipeline for the
//! wireframe spheres (one unit-sphere vertex buffer, instanced per sphere) and
//! a textured-quad pipeline for label panels (one bind group per label).
//! Front-ends own surface creation; everything after that lives here.

use menu_core::{
    panel_quad, wire_sphere_lines, FrameSnapshot, PanelInstance, SceneContext, SphereInstance,
    Uniforms, CLEAR_RGB, PANEL_HEIGHT, PANEL_WIDTH, SPHERE_HEIGHT_SEGMENTS, SPHERE_WIDTH_SEGMENTS,
};
use wgpu::util::DeviceExt;

mod helpers;
mod labels;

use helpers::InstanceBuffer;
use labels::LabelTexture;

pub struct Renderer<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    line_pipeline: wgpu::RenderPipeline,
    panel_pipeline: wgpu::RenderPipeline,

    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,

    sphere_vb: wgpu::Buffer,
    sphere_vertex_count: u32,
    sphere_instances: InstanceBuffer,

    quad_vb: wgpu::Buffer,
    panel_instances: InstanceBuffer,

    label_layout: wgpu::BindGroupLayout,
    label_sampler: wgpu::Sampler,
    labels: Vec<LabelTexture>,

    #[allow(dead_code)]
    depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,

    clear_color: wgpu::Color,
}

impl<'a> Renderer<'a> {
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'a>,
        width: u32,
        height: u32,
    ) -> anyhow::Result<Self> {
        let width = width.max(1);
        let height = height.max(1);
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

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
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[render] surface {}x{} format={:?}", width, height, format);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(menu_core::SCENE_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("uniform_bg"),
            layout: &uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let label_layout = labels::label_bind_group_layout(&device);
        let label_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("label_sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        // Geometry
        let sphere_lines = wire_sphere_lines(SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS);
        let sphere_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere_vb"),
            contents: bytemuck::cast_slice(&sphere_lines),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let quad = panel_quad(PANEL_WIDTH, PANEL_HEIGHT);
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let sphere_instances = InstanceBuffer::new(
            &device,
            "sphere_instances",
            std::mem::size_of::<SphereInstance>(),
            3,
        );
        let panel_instances = InstanceBuffer::new(
            &device,
            "panel_instances",
            std::mem::size_of::<PanelInstance>(),
            8,
        );

        // Pipelines
        let line_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("line_pl"),
            bind_group_layouts: &[&uniform_layout],
            push_constant_ranges: &[],
        });
        let panel_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("panel_pl"),
            bind_group_layouts: &[&uniform_layout, &label_layout],
            push_constant_ranges: &[],
        });

        let [m0, m1, m2, m3] = helpers::model_matrix_attributes(1);
        let line_instance_attrs = [
            m0,
            m1,
            m2,
            m3,
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 64,
                shader_location: 5,
            },
        ];
        let line_buffers = [
            // slot 0: unit sphere line vertices
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 3) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: per-sphere model + color
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<SphereInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &line_instance_attrs,
            },
        ];
        let line_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("line_pipeline"),
            layout: Some(&line_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_lines"),
                buffers: &line_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
            depth_stencil: Some(helpers::depth_state()),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_lines"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let panel_instance_attrs = helpers::model_matrix_attributes(2);
        let panel_buffers = [
            // slot 0: quad [x, y, u, v]
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 4) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x2,
                        offset: 0,
                        shader_location: 0,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x2,
                        offset: 8,
                        shader_location: 1,
                    },
                ],
            },
            // slot 1: per-panel model
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<PanelInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &panel_instance_attrs,
            },
        ];
        let panel_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("panel_pipeline"),
            layout: Some(&panel_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_panel"),
                buffers: &panel_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            // double-sided panels
            primitive: wgpu::PrimitiveState {
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(helpers::depth_state()),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_panel"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            line_pipeline,
            panel_pipeline,
            uniform_buffer,
            uniform_bind_group,
            sphere_vb,
            sphere_vertex_count: sphere_lines.len() as u32,
            sphere_instances,
            quad_vb,
            panel_instances,
            label_layout,
            label_sampler,
            labels: Vec::new(),
            depth_tex,
            depth_view,
            clear_color: wgpu::Color {
                r: CLEAR_RGB[0],
                g: CLEAR_RGB[1],
                b: CLEAR_RGB[2],
                a: 1.0,
            },
        })
    }

    /// Create one texture per scene panel, indexed by panel id.
    pub fn upload_labels(&mut self, scene: &SceneContext) {
        self.labels = scene
            .panels()
            .iter()
            .map(|p| {
                labels::upload_label(
                    &self.device,
                    &self.queue,
                    &self.label_layout,
                    &self.label_sampler,
                    &p.label,
                    &p.bitmap,
                )
            })
            .collect();
        log::info!("[render] uploaded {} label textures", self.labels.len());
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width == self.config.width && height == self.config.height {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        (self.depth_tex, self.depth_view) = helpers::create_depth_texture(&self.device, width, height);
    }

    /// Reconfigure with the current size, e.g. after `SurfaceError::Lost`.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, frame: &FrameSnapshot) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&frame.uniforms));
        self.sphere_instances
            .write(&self.device, &self.queue, bytemuck::cast_slice(&frame.spheres));
        self.panel_instances
            .write(&self.device, &self.queue, bytemuck::cast_slice(&frame.panels));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_bind_group(0, &self.uniform_bind_group, &[]);

            if !frame.spheres.is_empty() {
                rpass.set_pipeline(&self.line_pipeline);
                rpass.set_vertex_buffer(0, self.sphere_vb.slice(..));
                rpass.set_vertex_buffer(1, self.sphere_instances.buffer.slice(..));
                rpass.draw(0..self.sphere_vertex_count, 0..frame.spheres.len() as u32);
            }

            if !frame.panels.is_empty() {
                rpass.set_pipeline(&self.panel_pipeline);
                rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, self.panel_instances.buffer.slice(..));
                for (i, slot) in frame.panel_slots.iter().enumerate() {
                    let Some(label) = self.labels.get(*slot) else {
                        continue;
                    };
                    rpass.set_bind_group(1, &label.bind_group, &[]);
                    let i = i as u32;
                    rpass.draw(0..6, i..i + 1);
                }
            }
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}
