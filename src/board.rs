//! Board geometry: the occupancy grid and the mapping from window pixels to
//! board squares.
//!
//! The board fills the whole window, so a square is always `width / 8` by
//! `height / 8` pixels regardless of the window's aspect ratio. The window
//! origin is the top-left corner while rank 1 sits at the bottom, which is why
//! the rank axis is inverted.

use crate::piece::Square;
use winit::dpi::{PhysicalPosition, PhysicalSize};

pub const FILES: usize = 8;
pub const RANKS: usize = 8;

/// Marks which squares were populated when the board was set up.
///
/// Squares are only ever marked, never cleared, so this reflects the
/// initial layout rather than where pieces currently are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OccupancyGrid {
    cells: [[bool; RANKS]; FILES],
}

impl OccupancyGrid {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, square: Square) {
        self.cells[square.file() as usize - 1][square.rank() as usize - 1] = true;
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.cells[square.file() as usize - 1][square.rank() as usize - 1]
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell).count()
    }
}

/// Convert a cursor position to the square under it.
///
/// # Arguments
/// * `coords` - Cursor position in physical pixels, origin at the top-left
/// * `window` - Current inner size of the window in physical pixels
///
/// # Returns
/// * `Some(Square)` - The square under the cursor
/// * `None` - If the cursor is outside the window or the window has no area
pub fn square_at(coords: PhysicalPosition<f64>, window: PhysicalSize<u32>) -> Option<Square> {
    if window.width == 0 || window.height == 0 {
        return None;
    }

    let (width, height) = (window.width as f64, window.height as f64);
    if !(0.0..=width).contains(&coords.x) || !(0.0..=height).contains(&coords.y) {
        return None;
    }

    let x = (coords.x / width * FILES as f64).min(FILES as f64 - 1.0);
    let y = (coords.y / height * RANKS as f64).min(RANKS as f64 - 1.0);

    let file = x.floor() as u8 + 1;
    let rank = RANKS as u8 - y.floor() as u8;

    Square::new(file, rank)
}
