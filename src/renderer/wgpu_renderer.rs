use crate::assets::AssetPaths;
use crate::config::Config;
use crate::error::RenderError;
use crate::piece::{Kind, Square, Team};
use crate::piece_manager::{PieceManager, MAX_PIECES};
use crate::renderer::quad::{self, Quad};
use crate::renderer::shader::ShaderProgram;
use crate::renderer::texture::{self, Texture};
use crate::renderer::Renderer;
use std::collections::HashMap;
use std::sync::Arc;
use winit::dpi::PhysicalSize;
use winit::window::Window;

/// What a slot's sprite needs before it can draw the piece at `wanted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpriteAction {
    Create,
    Move,
    Keep,
}

fn sprite_action(current: Option<Square>, wanted: Square) -> SpriteAction {
    match current {
        None => SpriteAction::Create,
        Some(square) if square != wanted => SpriteAction::Move,
        Some(_) => SpriteAction::Keep,
    }
}

struct PieceSprite {
    quad: Quad,
    // Square the quad's vertices were last written for
    square: Square,
}

pub struct WgpuRenderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    // Keeps the surface's window alive
    _window: Arc<Window>,

    shader: ShaderProgram,
    clear_color: wgpu::Color,

    board: Quad,
    board_texture: Texture,

    draw_pieces: bool,
    paths: AssetPaths,
    sampler: wgpu::Sampler,
    // Indexed by piece slot
    piece_sprites: [Option<PieceSprite>; MAX_PIECES],
    texture_cache: HashMap<(Team, Kind), Texture>,

    window_size: PhysicalSize<u32>,
}

impl WgpuRenderer {
    /// Set up the GPU, load the shader pair and every texture the variant needs.
    pub async fn new(
        window: Arc<Window>,
        app_config: &Config,
        pieces: &PieceManager,
    ) -> Result<Self, RenderError> {
        let mut window_size = window.inner_size();

        // Some platforms report 0x0 before the window is first shown
        if window_size.width == 0 || window_size.height == 0 {
            window_size = PhysicalSize::new(app_config.window.width, app_config.window.height);
        }

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::NoAdapter)?;

        log::info!("using adapter {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    label: None,
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or(RenderError::NoSurfaceFormat)?;

        let present_mode = if app_config.render.vsync {
            wgpu::PresentMode::Fifo
        } else {
            wgpu::PresentMode::AutoNoVsync
        };

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: window_size.width,
            height: window_size.height,
            present_mode,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let paths = AssetPaths::new(&app_config.assets);

        let shader = ShaderProgram::load(
            &device,
            config.format,
            &paths.vertex_shader(),
            &paths.fragment_shader(),
        )?;

        let sampler = texture::create_sampler(&device);

        let board = Quad::new(&device, "Board Quad", &quad::board_vertices());
        let board_texture = Texture::load(
            &device,
            &queue,
            shader.texture_layout(),
            &sampler,
            &paths.board_texture(),
        )?;

        let [r, g, b, a] = app_config.render.clear_color;

        let mut renderer = Self {
            surface,
            device,
            queue,
            config,
            _window: window,
            shader,
            clear_color: wgpu::Color { r, g, b, a },
            board,
            board_texture,
            draw_pieces: app_config.variant.draws_pieces(),
            paths,
            sampler,
            piece_sprites: std::array::from_fn(|_| None),
            texture_cache: HashMap::new(),
            window_size,
        };

        // Load the starting set up front so missing sprites fail at startup
        renderer.sync_pieces(pieces)?;
        if renderer.draw_pieces {
            log::info!(
                "created {} piece sprites from {} textures",
                renderer.piece_sprites.iter().flatten().count(),
                renderer.texture_cache.len()
            );
        }

        Ok(renderer)
    }

    /// Bring per-slot sprites and the texture cache in line with `pieces`.
    ///
    /// Textures are loaded the first time a team/kind pair shows up. A slot's
    /// quad is created on first use and its vertices rewritten whenever the
    /// piece in that slot sits on a different square than last drawn.
    fn sync_pieces(&mut self, pieces: &PieceManager) -> Result<(), RenderError> {
        if !self.draw_pieces {
            return Ok(());
        }

        for (slot, piece) in pieces.pieces() {
            let key = (piece.team, piece.kind);
            if !self.texture_cache.contains_key(&key) {
                let texture = Texture::load(
                    &self.device,
                    &self.queue,
                    self.shader.texture_layout(),
                    &self.sampler,
                    &self.paths.piece_texture(piece.team, piece.kind),
                )?;
                self.texture_cache.insert(key, texture);
            }

            let sprite = &mut self.piece_sprites[slot];
            let vertices = quad::square_vertices(piece.square);
            match sprite_action(sprite.as_ref().map(|s| s.square), piece.square) {
                SpriteAction::Create => {
                    let label = format!("{} {} Quad", piece.team, piece.kind);
                    *sprite = Some(PieceSprite {
                        quad: Quad::new(&self.device, &label, &vertices),
                        square: piece.square,
                    });
                }
                SpriteAction::Move => {
                    if let Some(sprite) = sprite.as_mut() {
                        log::debug!("slot {slot} moved from {} to {}", sprite.square, piece.square);
                        sprite.quad.update(&self.queue, &vertices);
                        sprite.square = piece.square;
                    }
                }
                SpriteAction::Keep => {}
            }
        }

        Ok(())
    }
}

impl Renderer for WgpuRenderer {
    fn draw(&mut self, pieces: &PieceManager) -> Result<(), RenderError> {
        self.sync_pieces(pieces)?;

        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("timed out waiting for the next frame, skipping it");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            self.shader.bind(&mut render_pass);
            self.board.render(&mut render_pass, &self.board_texture);

            if self.draw_pieces {
                for (slot, piece) in pieces.pieces() {
                    let sprite = self.piece_sprites.get(slot).and_then(Option::as_ref);
                    let texture = self.texture_cache.get(&(piece.team, piece.kind));
                    if let (Some(sprite), Some(texture)) = (sprite, texture) {
                        sprite.quad.render(&mut render_pass, texture);
                    }
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            log::debug!("resizing surface to {}x{}", new_size.width, new_size.height);
            self.window_size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        } else {
            log::warn!("ignoring resize to {}x{}", new_size.width, new_size.height);
        }
    }

    fn window_size(&self) -> PhysicalSize<u32> {
        self.window_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;

    fn sq(file: u8, rank: u8) -> Square {
        Square::new(file, rank).unwrap()
    }

    #[test]
    fn new_slot_gets_a_sprite() {
        assert_eq!(sprite_action(None, sq(4, 4)), SpriteAction::Create);
    }

    #[test]
    fn unchanged_square_keeps_the_sprite() {
        assert_eq!(sprite_action(Some(sq(4, 4)), sq(4, 4)), SpriteAction::Keep);
    }

    #[test]
    fn reused_slot_moves_its_sprite() {
        let mut pieces = PieceManager::standard();
        let drawn = pieces.get(3).map(|p| p.square);

        pieces.remove(3);
        let slot = pieces.add(Piece::new(Team::Black, Kind::Queen, sq(4, 4))).unwrap();
        assert_eq!(slot, 3);

        let wanted = pieces.get(slot).unwrap().square;
        assert_eq!(sprite_action(drawn, wanted), SpriteAction::Move);
    }

    #[test]
    fn moved_piece_moves_its_sprite() {
        let mut pieces = PieceManager::standard();
        let drawn = pieces.get(12).map(|p| p.square);
        pieces.set_square(12, sq(5, 5)).unwrap();
        assert_eq!(sprite_action(drawn, sq(5, 5)), SpriteAction::Move);
    }
}
