//! Fixed-capacity store for the pieces on the board.
//!
//! The manager holds up to [`MAX_PIECES`] slots. A slot is valid while it holds
//! a [`Piece`] and invalid once that piece is removed. Slot indices are stable,
//! so renderers can key per-piece GPU resources by slot.

use crate::board::{OccupancyGrid, FILES};
use crate::error::LayoutError;
use crate::piece::{Kind, Piece, Square, Team};

pub const MAX_PIECES: usize = 8 * 4;

/// Back rank order as (kind, file), in the order the slots are filled.
const BACK_RANK: [(Kind, u8); 8] = [
    (Kind::Rook, 1),
    (Kind::Rook, 8),
    (Kind::Knight, 2),
    (Kind::Knight, 7),
    (Kind::Bishop, 3),
    (Kind::Bishop, 6),
    (Kind::Queen, 4),
    (Kind::King, 5),
];

#[derive(Debug, Clone)]
pub struct PieceManager {
    occupancy: OccupancyGrid,
    slots: [Option<Piece>; MAX_PIECES],
}

impl Default for PieceManager {
    fn default() -> Self {
        Self::empty()
    }
}

impl PieceManager {
    pub fn empty() -> Self {
        Self {
            occupancy: OccupancyGrid::empty(),
            slots: [None; MAX_PIECES],
        }
    }

    /// Manager holding the standard chess starting position.
    ///
    /// Slots are filled white pawns first, then black pawns, then the white
    /// and black back ranks.
    pub fn standard() -> Self {
        let mut manager = Self::empty();

        for (team, rank) in [(Team::White, 2), (Team::Black, 7)] {
            for file in 1..=FILES as u8 {
                manager.place(team, Kind::Pawn, file, rank);
            }
        }
        for (team, rank) in [(Team::White, 1), (Team::Black, 8)] {
            for (kind, file) in BACK_RANK {
                manager.place(team, kind, file, rank);
            }
        }

        manager
    }

    // Only used for the fixed starting layout, which fits exactly.
    fn place(&mut self, team: Team, kind: Kind, file: u8, rank: u8) {
        if let Some(square) = Square::new(file, rank) {
            if let Err(err) = self.add(Piece::new(team, kind, square)) {
                log::error!("starting layout rejected {team} {kind}: {err}");
            }
        }
    }

    /// Put a piece into the first free slot and mark its square occupied.
    ///
    /// # Returns
    /// * `Ok(usize)` - The slot the piece was stored in
    /// * `Err(LayoutError)` - If every slot is taken or a valid piece already sits on the square
    pub fn add(&mut self, piece: Piece) -> Result<usize, LayoutError> {
        if self.piece_at(piece.square).is_some() {
            return Err(LayoutError::Taken(piece.square));
        }

        let slot = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(LayoutError::Full(MAX_PIECES))?;

        self.slots[slot] = Some(piece);
        self.occupancy.mark(piece.square);
        Ok(slot)
    }

    /// Invalidate a slot, returning the piece it held.
    ///
    /// The occupancy grid keeps the square marked.
    pub fn remove(&mut self, slot: usize) -> Option<Piece> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    /// Move the piece in `slot` to `square`.
    ///
    /// The occupancy grid is left as it is, like [`PieceManager::remove`].
    ///
    /// # Returns
    /// * `Err(LayoutError::NoPiece)` - If the slot is out of range or invalid
    /// * `Err(LayoutError::Taken)` - If another valid piece sits on `square`
    pub fn set_square(&mut self, slot: usize, square: Square) -> Result<(), LayoutError> {
        if let Some((other, _)) = self.piece_at(square) {
            if other != slot {
                return Err(LayoutError::Taken(square));
            }
        }

        let piece = self
            .slots
            .get_mut(slot)
            .and_then(Option::as_mut)
            .ok_or(LayoutError::NoPiece(slot))?;
        piece.square = square;
        Ok(())
    }

    pub fn get(&self, slot: usize) -> Option<&Piece> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Valid pieces with their slot index, in slot order.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, &Piece)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, piece)| piece.as_ref().map(|p| (slot, p)))
    }

    pub fn piece_at(&self, square: Square) -> Option<(usize, &Piece)> {
        self.pieces().find(|(_, piece)| piece.square == square)
    }

    pub fn occupancy(&self) -> &OccupancyGrid {
        &self.occupancy
    }

    pub fn len(&self) -> usize {
        self.pieces().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
