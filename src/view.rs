//! Per-window state: what is drawn and how clicks are interpreted.
//!
//! [`ChessView`] owns the [`PieceManager`] and a [`Renderer`], tracks the cursor
//! and turns left-button clicks into a [`Selection`]. It never moves pieces;
//! the selection is only logged and returned to the caller.
//!
//! # Control Flow
//!
//! ```text
//! WindowEvent → App::window_event()
//!     ↓
//! view.handle_event(event)
//!     ↓
//! CursorMoved  → remember position
//! MouseInput   → ClickTracker → on release: board::square_at → Selection
//! Resized      → renderer.resize (zero sizes dropped)
//! Escape/Close → ViewAction::Exit
//! ```

use crate::board;
use crate::config::Variant;
use crate::error::RenderError;
use crate::input::ClickTracker;
use crate::piece::{Piece, Square};
use crate::piece_manager::PieceManager;
use crate::renderer::Renderer;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// What a completed click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A square, when the variant knows nothing about occupancy
    Square(Square),
    /// A square the occupancy grid marks as populated
    Occupied(Square),
    /// A square the occupancy grid marks as empty
    Empty(Square),
    /// A piece, with the slot it occupies in the manager
    Piece { slot: usize, piece: Piece },
}

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    Continue,
    Exit,
}

pub struct ChessView<R: Renderer> {
    renderer: R,
    pieces: PieceManager,
    variant: Variant,
    clicks: ClickTracker,
    cursor: PhysicalPosition<f64>,
}

impl<R: Renderer> ChessView<R> {
    pub fn new(renderer: R, pieces: PieceManager, variant: Variant) -> Self {
        Self {
            renderer,
            pieces,
            variant,
            clicks: ClickTracker::new(),
            cursor: PhysicalPosition::new(0.0, 0.0),
        }
    }

    /// Route a window event.
    ///
    /// Redraws are not handled here; the caller invokes [`ChessView::redraw`]
    /// so it can react to render errors.
    pub fn handle_event(&mut self, event: &WindowEvent) -> ViewAction {
        match event {
            WindowEvent::CloseRequested => return ViewAction::Exit,

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    return ViewAction::Exit;
                }
            }

            WindowEvent::Resized(new_size) => {
                // Minimised windows report 0x0; keep the last usable size
                if new_size.width == 0 || new_size.height == 0 {
                    log::warn!("ignoring resize to {}x{}", new_size.width, new_size.height);
                } else {
                    self.renderer.resize(*new_size);
                }
            }

            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(*position),

            WindowEvent::MouseInput { state, button, .. } => {
                self.mouse_input(*button, *state);
            }

            _ => {}
        }

        ViewAction::Continue
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = position;
    }

    /// Feed a mouse button transition. Returns the selection when it completes a click.
    pub fn mouse_input(&mut self, button: MouseButton, state: ElementState) -> Option<Selection> {
        if !self.clicks.update(button, state) {
            return None;
        }

        let selection = self.select(self.cursor)?;
        match selection {
            Selection::Square(square) => log::info!("Square clicked! Pos: {square}"),
            Selection::Occupied(square) => log::info!("Occupied square clicked! Pos: {square}"),
            Selection::Empty(square) => log::info!("Empty square clicked! Pos: {square}"),
            Selection::Piece { piece, .. } => log::info!(
                "Piece selected! Team: {}, Pos: {}",
                piece.team,
                piece.square
            ),
        }
        Some(selection)
    }

    /// Resolve what lies under `coords` for the active variant.
    pub fn select(&self, coords: PhysicalPosition<f64>) -> Option<Selection> {
        let Some(square) = board::square_at(coords, self.renderer.window_size()) else {
            log::debug!("click at ({:.1}, {:.1}) is off the board", coords.x, coords.y);
            return None;
        };
        log::debug!("click at ({:.1}, {:.1}) maps to {}", coords.x, coords.y, square);

        let occupied = self.pieces.occupancy().is_occupied(square);
        match self.variant {
            Variant::Board => Some(Selection::Square(square)),
            Variant::Occupancy if occupied => Some(Selection::Occupied(square)),
            Variant::Occupancy => Some(Selection::Empty(square)),
            Variant::Pieces => {
                if !occupied {
                    return None;
                }
                self.pieces
                    .piece_at(square)
                    .map(|(slot, piece)| Selection::Piece { slot, piece: *piece })
            }
        }
    }

    pub fn redraw(&mut self) -> Result<(), RenderError> {
        self.renderer.draw(&self.pieces)
    }

    pub fn pieces(&self) -> &PieceManager {
        &self.pieces
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }
}
