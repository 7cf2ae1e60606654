//! Native window lifecycle.
//!
//! The window is created hidden on the first `resumed` call, every GPU
//! resource is set up, and only then is it shown. From there a frame is
//! requested every time the event loop runs dry, so the board is redrawn
//! continuously.

use crate::config::Config;
use crate::piece_manager::PieceManager;
use crate::renderer::wgpu_renderer::WgpuRenderer;
use crate::view::{ChessView, ViewAction};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

pub struct App {
    config: Config,
    window: Option<Arc<Window>>,
    view: Option<ChessView<WgpuRenderer>>,
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            window: None,
            view: None,
            error: None,
        }
    }

    /// Run the event loop until the window closes.
    ///
    /// # Errors
    /// Returns the first fatal setup or render error, or the event loop's own error.
    pub fn run(config: Config) -> anyhow::Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = Self::new(config);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window_attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(PhysicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ))
            .with_resizable(self.config.window.resizable)
            .with_visible(false);

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let pieces = PieceManager::standard();
        let renderer = pollster::block_on(WgpuRenderer::new(window.clone(), &self.config, &pieces))?;

        let view = ChessView::new(renderer, pieces, self.config.variant);
        log::info!(
            "{:?} view ready with {} pieces on the board",
            view.variant(),
            view.pieces().len()
        );

        self.view = Some(view);
        window.set_visible(true);
        window.request_redraw();
        self.window = Some(window);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error.get_or_insert(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.init(event_loop) {
            self.fail(event_loop, err.context("can't set up the chess window"));
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let Some(view) = self.view.as_mut() else {
            return;
        };

        if let WindowEvent::RedrawRequested = event {
            if let Err(err) = view.redraw() {
                self.fail(event_loop, err.into());
            }
            return;
        }

        if view.handle_event(&event) == ViewAction::Exit {
            log::info!("closing window");
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
