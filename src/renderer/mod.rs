use crate::error::RenderError;
use crate::piece_manager::PieceManager;
use winit::dpi::PhysicalSize;

pub mod quad;
pub mod shader;
pub mod texture;
pub mod wgpu_renderer;

pub use quad::{Quad, Vertex};
pub use shader::ShaderProgram;
pub use texture::Texture;

/// Trait for drawing the board.
/// Keeps the view logic independent of the GPU backend so it can be driven without a window.
pub trait Renderer {
    /// Draw one frame: the board, then every valid piece in slot order.
    ///
    /// # Arguments
    /// * `pieces` - Pieces to draw; renderers that only show the board ignore it
    fn draw(&mut self, pieces: &PieceManager) -> Result<(), RenderError>;

    /// Handle window resize events
    ///
    /// # Arguments
    /// * `new_size` - New window dimensions in pixels
    fn resize(&mut self, new_size: PhysicalSize<u32>);

    /// Current drawable size, used to map cursor positions to squares
    fn window_size(&self) -> PhysicalSize<u32>;
}
