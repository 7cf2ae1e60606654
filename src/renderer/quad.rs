//! Textured rectangles.
//!
//! A quad is two triangles (6 vertices, no index buffer) in clip space. Texture
//! coordinates have `v` pointing up, so `(0, 1)` is the top-left of the image;
//! textures are flipped on load to match.

use crate::piece::Square;
use crate::renderer::texture::Texture;
use wgpu::util::DeviceExt;

pub const QUAD_VERTICES: usize = 6;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y, 0.0],
            tex_coords: [u, v],
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Vertices for the rectangle spanning `(x0, y0)`..`(x1, y1)` in clip space.
fn rect_vertices(x0: f32, y0: f32, x1: f32, y1: f32) -> [Vertex; QUAD_VERTICES] {
    [
        Vertex::new(x0, y1, 0.0, 1.0),
        Vertex::new(x0, y0, 0.0, 0.0),
        Vertex::new(x1, y0, 1.0, 0.0),
        Vertex::new(x0, y1, 0.0, 1.0),
        Vertex::new(x1, y0, 1.0, 0.0),
        Vertex::new(x1, y1, 1.0, 1.0),
    ]
}

/// Full-screen quad for the board texture.
pub fn board_vertices() -> [Vertex; QUAD_VERTICES] {
    rect_vertices(-1.0, -1.0, 1.0, 1.0)
}

/// Quad covering one square of the board.
pub fn square_vertices(square: Square) -> [Vertex; QUAD_VERTICES] {
    let size = 2.0 / 8.0;
    let x0 = -1.0 + (square.file() - 1) as f32 * size;
    let y0 = -1.0 + (square.rank() - 1) as f32 * size;
    rect_vertices(x0, y0, x0 + size, y0 + size)
}

/// GPU-resident rectangle.
pub struct Quad {
    vertex_buffer: wgpu::Buffer,
}

impl Quad {
    pub fn new(device: &wgpu::Device, label: &str, vertices: &[Vertex; QUAD_VERTICES]) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        Self { vertex_buffer }
    }

    /// Overwrite the vertices in place; the buffer keeps its size.
    pub fn update(&self, queue: &wgpu::Queue, vertices: &[Vertex; QUAD_VERTICES]) {
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(vertices));
    }

    /// Draw with `texture` bound. The shader program must already be set on the pass.
    pub fn render(&self, render_pass: &mut wgpu::RenderPass<'_>, texture: &Texture) {
        texture.bind(render_pass);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..QUAD_VERTICES as u32, 0..1);
    }
}
