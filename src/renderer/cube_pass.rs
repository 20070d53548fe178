//! Instanced, depth-tested Phong pass over the ten scene cubes.
//!
//! Bind group convention:
//! - group(0): camera uniform
//! - group(1): lighting uniform
//! - group(2): diffuse texture + sampler

use wgpu::util::DeviceExt;

use crate::camera::{Camera, CameraUniform};
use crate::gpu::pipeline_helpers::UniformBinding;
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::{self, DiffuseTexture};
use crate::options::CameraOptions;
use crate::scene::{
    cube_instances, cube_vertices, CubeInstance, CubeVertex, LightingUniform,
    CUBE_VERTEX_COUNT,
};

/// Near/far clip planes used for the projection matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPlanes {
    /// Near plane distance.
    pub near: f32,
    /// Far plane distance.
    pub far: f32,
}

impl Default for ClipPlanes {
    fn default() -> Self {
        Self {
            near: 0.1,
            far: 100.0,
        }
    }
}

impl From<&CameraOptions> for ClipPlanes {
    fn from(options: &CameraOptions) -> Self {
        Self {
            near: options.znear,
            far: options.zfar,
        }
    }
}

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
    0 => Float32x3, // position
    1 => Float32x3, // normal
    2 => Float32x2, // uv
];

const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
    3 => Float32x4, // model col 0
    4 => Float32x4,
    5 => Float32x4,
    6 => Float32x4,
];

/// Owns the cube mesh, per-cube model matrices, both uniforms, the diffuse
/// texture, and the render pipeline.
pub struct CubeRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
    camera_uniform: CameraUniform,
    camera: UniformBinding,
    lighting: UniformBinding,
    diffuse: DiffuseTexture,
    clip: ClipPlanes,
}

impl CubeRenderer {
    /// Upload the cube mesh, layout and diffuse image and build the pipeline
    /// for the surface format.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        clip: ClipPlanes,
        diffuse: &image::RgbaImage,
    ) -> Self {
        let device = &context.device;

        let vertices = cube_vertices();
        let vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Cube Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let instances = cube_instances();
        let instance_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Cube Instance Buffer"),
                contents: bytemuck::cast_slice(&instances),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let stages = wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT;
        let camera_uniform = CameraUniform::new();
        let camera =
            UniformBinding::new(device, "Camera", &camera_uniform, stages);
        let lighting = UniformBinding::new(
            device,
            "Lighting",
            &LightingUniform::default(),
            stages,
        );
        let diffuse = DiffuseTexture::from_image(
            device,
            &context.queue,
            diffuse,
            "Cube Diffuse",
        );

        let pipeline = Self::create_pipeline(
            context,
            &[&camera.layout, &lighting.layout, &diffuse.layout],
        );

        log::debug!(
            "cube renderer ready: {} vertices, {} instances, {}x{} texture",
            vertices.len(),
            instances.len(),
            diffuse.texture.width(),
            diffuse.texture.height()
        );

        Self {
            pipeline,
            vertex_buffer,
            instance_buffer,
            instance_count: instances.len() as u32,
            camera_uniform,
            camera,
            lighting,
            diffuse,
            clip,
        }
    }

    fn create_pipeline(
        context: &RenderContext,
        bind_group_layouts: &[&wgpu::BindGroupLayout],
    ) -> wgpu::RenderPipeline {
        let shader = context.device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/lit_cubes.wgsl"
        ));

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Cube Pipeline Layout"),
                bind_group_layouts,
                push_constant_ranges: &[],
            },
        );

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: size_of::<CubeVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &VERTEX_ATTRIBUTES,
        };
        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: size_of::<CubeInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRIBUTES,
        };

        context
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Cube Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[vertex_layout, instance_layout],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: Some(wgpu::Face::Back),
                    ..Default::default()
                },
                depth_stencil: Some(texture::depth_stencil_state()),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
    }

    /// Refresh both uniforms from the camera and lighting state.
    pub fn update(
        &mut self,
        queue: &wgpu::Queue,
        camera: &Camera,
        aspect: f32,
        lighting: &LightingUniform,
    ) {
        self.camera_uniform
            .update(camera, aspect, self.clip.near, self.clip.far);
        self.camera.write(queue, &self.camera_uniform);
        self.lighting.write(queue, lighting);
    }

    /// Record the instanced draw of all cubes.
    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.camera.bind_group, &[]);
        render_pass.set_bind_group(1, &self.lighting.bind_group, &[]);
        render_pass.set_bind_group(2, &self.diffuse.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        render_pass.draw(0..CUBE_VERTEX_COUNT, 0..self.instance_count);
    }
}
