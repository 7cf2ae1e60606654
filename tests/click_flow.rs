//! Drive the click handling through a renderer that draws nothing.

use chess_board::config::Variant;
use chess_board::error::RenderError;
use chess_board::renderer::Renderer;
use chess_board::view::{ChessView, Selection, ViewAction};
use chess_board::{Kind, PieceManager, Square, Team};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, WindowEvent};

struct MockRenderer {
    size: PhysicalSize<u32>,
    frames: usize,
    resizes: usize,
}

impl MockRenderer {
    fn new() -> Self {
        Self {
            size: PhysicalSize::new(800, 800),
            frames: 0,
            resizes: 0,
        }
    }
}

impl Renderer for MockRenderer {
    fn draw(&mut self, _pieces: &PieceManager) -> Result<(), RenderError> {
        self.frames += 1;
        Ok(())
    }
    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.resizes += 1;
        self.size = new_size;
    }
    fn window_size(&self) -> PhysicalSize<u32> {
        self.size
    }
}

fn view(variant: Variant) -> ChessView<MockRenderer> {
    ChessView::new(MockRenderer::new(), PieceManager::standard(), variant)
}

fn click(view: &mut ChessView<MockRenderer>, x: f64, y: f64) -> Option<Selection> {
    view.cursor_moved(PhysicalPosition::new(x, y));
    assert_eq!(view.mouse_input(MouseButton::Left, ElementState::Pressed), None);
    view.mouse_input(MouseButton::Left, ElementState::Released)
}

fn sq(file: u8, rank: u8) -> Square {
    Square::new(file, rank).unwrap()
}

#[test]
fn clicking_the_white_king_selects_it() {
    let mut view = view(Variant::Pieces);
    match click(&mut view, 450.0, 750.0) {
        Some(Selection::Piece { slot, piece }) => {
            assert_eq!(slot, 23);
            assert_eq!((piece.team, piece.kind, piece.square), (Team::White, Kind::King, sq(5, 1)));
        }
        other => panic!("expected the white king, got {other:?}"),
    }
}

#[test]
fn clicking_a_black_pawn_selects_it() {
    let mut view = view(Variant::Pieces);
    match click(&mut view, 10.0, 150.0) {
        Some(Selection::Piece { piece, .. }) => {
            assert_eq!((piece.team, piece.kind, piece.square), (Team::Black, Kind::Pawn, sq(1, 7)));
        }
        other => panic!("expected a black pawn, got {other:?}"),
    }
}

#[test]
fn clicking_an_empty_square_selects_nothing() {
    let mut view = view(Variant::Pieces);
    assert_eq!(click(&mut view, 350.0, 450.0), None);
}

#[test]
fn press_without_release_selects_nothing() {
    let mut view = view(Variant::Pieces);
    view.cursor_moved(PhysicalPosition::new(450.0, 750.0));
    assert_eq!(view.mouse_input(MouseButton::Left, ElementState::Pressed), None);
    assert_eq!(view.mouse_input(MouseButton::Right, ElementState::Released), None);
}

#[test]
fn release_without_press_selects_nothing() {
    let mut view = view(Variant::Pieces);
    view.cursor_moved(PhysicalPosition::new(450.0, 750.0));
    assert_eq!(view.mouse_input(MouseButton::Left, ElementState::Released), None);
}

#[test]
fn cursor_position_at_release_decides_the_square() {
    let mut view = view(Variant::Board);
    view.cursor_moved(PhysicalPosition::new(10.0, 10.0));
    view.mouse_input(MouseButton::Left, ElementState::Pressed);
    view.cursor_moved(PhysicalPosition::new(790.0, 790.0));
    assert_eq!(
        view.mouse_input(MouseButton::Left, ElementState::Released),
        Some(Selection::Square(sq(8, 1)))
    );
}

#[test]
fn removed_piece_is_no_longer_selectable() {
    let mut pieces = PieceManager::standard();
    pieces.remove(23);
    let mut view = ChessView::new(MockRenderer::new(), pieces, Variant::Pieces);
    assert_eq!(click(&mut view, 450.0, 750.0), None);
}

#[test]
fn occupancy_variant_reports_grid_state() {
    let mut view = view(Variant::Occupancy);
    assert_eq!(click(&mut view, 50.0, 50.0), Some(Selection::Occupied(sq(1, 8))));
    assert_eq!(click(&mut view, 50.0, 350.0), Some(Selection::Empty(sq(1, 5))));
}

#[test]
fn board_variant_reports_any_square() {
    let mut view = view(Variant::Board);
    assert_eq!(click(&mut view, 350.0, 450.0), Some(Selection::Square(sq(4, 4))));
}

#[test]
fn clicks_follow_the_resized_window() {
    let mut view = view(Variant::Board);
    view.handle_event(&WindowEvent::Resized(PhysicalSize::new(400, 400)));
    assert_eq!(view.renderer().window_size(), PhysicalSize::new(400, 400));
    assert_eq!(click(&mut view, 390.0, 10.0), Some(Selection::Square(sq(8, 8))));
    assert_eq!(click(&mut view, 450.0, 10.0), None);
}

#[test]
fn redraw_goes_through_the_renderer() {
    let mut view = view(Variant::Pieces);
    view.redraw().unwrap();
    view.redraw().unwrap();
    assert_eq!(view.renderer().frames, 2);
    assert_eq!(view.pieces().len(), 32);
}

#[test]
fn zero_size_resize_is_not_forwarded() {
    let mut view = view(Variant::Board);
    assert_eq!(view.handle_event(&WindowEvent::Resized(PhysicalSize::new(0, 0))), ViewAction::Continue);
    assert_eq!(view.handle_event(&WindowEvent::Resized(PhysicalSize::new(0, 600))), ViewAction::Continue);
    assert_eq!(view.renderer().resizes, 0);
    assert_eq!(view.renderer().window_size(), PhysicalSize::new(800, 800));
    assert_eq!(click(&mut view, 790.0, 790.0), Some(Selection::Square(sq(8, 1))));
}

#[test]
fn close_request_exits() {
    let mut view = view(Variant::Pieces);
    assert_eq!(view.handle_event(&WindowEvent::CloseRequested), ViewAction::Exit);
}

#[test]
fn unrelated_events_continue() {
    let mut view = view(Variant::Pieces);
    assert_eq!(view.handle_event(&WindowEvent::Focused(true)), ViewAction::Continue);
    assert_eq!(
        view.handle_event(&WindowEvent::CursorMoved {
            device_id: unsafe { winit::event::DeviceId::dummy() },
            position: PhysicalPosition::new(450.0, 750.0),
        }),
        ViewAction::Continue
    );
    assert_eq!(view.renderer().frames, 0);
}

#[test]
fn events_drive_a_full_click() {
    let mut view = view(Variant::Pieces);
    let device_id = unsafe { winit::event::DeviceId::dummy() };
    view.handle_event(&WindowEvent::CursorMoved {
        device_id,
        position: PhysicalPosition::new(450.0, 750.0),
    });
    view.handle_event(&WindowEvent::MouseInput {
        device_id,
        state: ElementState::Pressed,
        button: MouseButton::Left,
    });
    // Release through the direct API to read the selection back
    match view.mouse_input(MouseButton::Left, ElementState::Released) {
        Some(Selection::Piece { slot, .. }) => assert_eq!(slot, 23),
        other => panic!("expected the white king, got {other:?}"),
    }
}
