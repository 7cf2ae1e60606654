//! Vertex/fragment shader loading.
//!
//! Each stage lives in its own WGSL file and is compiled into its own module.
//! Compilation and pipeline creation run inside validation error scopes so a
//! bad shader comes back as a [`ShaderError`] instead of aborting the process.

use crate::error::{ShaderError, ShaderStage};
use crate::renderer::quad::Vertex;
use std::path::Path;

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Linked vertex + fragment program sampling one texture (`u_tex` at binding 0,
/// its sampler at binding 1).
pub struct ShaderProgram {
    pipeline: wgpu::RenderPipeline,
    texture_layout: wgpu::BindGroupLayout,
}

impl ShaderProgram {
    /// Read both stages from disk and link them.
    pub fn load(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        vertex_path: &Path,
        fragment_path: &Path,
    ) -> Result<Self, ShaderError> {
        let vertex_src = read_source(ShaderStage::Vertex, vertex_path)?;
        let fragment_src = read_source(ShaderStage::Fragment, fragment_path)?;

        let vertex = compile(device, ShaderStage::Vertex, vertex_path, &vertex_src)?;
        let fragment = compile(device, ShaderStage::Fragment, fragment_path, &fragment_src)?;
        // Host-side sources are no longer needed once the modules exist
        drop((vertex_src, fragment_src));

        let program = Self::link(device, format, &vertex, &fragment)?;
        log::info!(
            "shader program ready ({}, {})",
            vertex_path.display(),
            fragment_path.display()
        );
        Ok(program)
    }

    fn link(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        vertex: &wgpu::ShaderModule,
        fragment: &wgpu::ShaderModule,
    ) -> Result<Self, ShaderError> {
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
            label: Some("texture_bind_group_layout"),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Quad Pipeline Layout"),
            bind_group_layouts: &[&texture_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Quad Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: vertex,
                entry_point: Some(VERTEX_ENTRY),
                buffers: &[Vertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: fragment,
                entry_point: Some(FRAGMENT_ENTRY),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(device.pop_error_scope()) {
            return Err(ShaderError::Link(err.to_string()));
        }

        Ok(Self {
            pipeline,
            texture_layout,
        })
    }

    /// Use this program for the following draws.
    pub fn bind(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(&self.pipeline);
    }

    /// Layout every texture bind group must be created against.
    pub fn texture_layout(&self) -> &wgpu::BindGroupLayout {
        &self.texture_layout
    }
}

fn read_source(stage: ShaderStage, path: &Path) -> Result<String, ShaderError> {
    std::fs::read_to_string(path).map_err(|source| ShaderError::Read {
        stage,
        path: path.to_path_buf(),
        source,
    })
}

/// Compile one stage.
pub fn compile(
    device: &wgpu::Device,
    stage: ShaderStage,
    path: &Path,
    source: &str,
) -> Result<wgpu::ShaderModule, ShaderError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(&format!("{stage} shader")),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    match pollster::block_on(device.pop_error_scope()) {
        Some(err) => Err(ShaderError::Compile {
            stage,
            path: path.to_path_buf(),
            message: err.to_string(),
        }),
        None => Ok(module),
    }
}
