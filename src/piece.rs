use std::fmt;

/// Side a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    White,
    Black,
}

impl Team {
    /// Lowercase name used in asset file names.
    pub fn asset_name(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::White => write!(f, "White"),
            Self::Black => write!(f, "Black"),
        }
    }
}

/// Piece type; with [`Team`] it picks the sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl Kind {
    pub const ALL: [Kind; 6] = [
        Kind::Pawn,
        Kind::Rook,
        Kind::Knight,
        Kind::Bishop,
        Kind::Queen,
        Kind::King,
    ];

    pub fn asset_name(&self) -> &'static str {
        match self {
            Self::Pawn => "pawn",
            Self::Rook => "rook",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pawn => "Pawn",
            Self::Rook => "Rook",
            Self::Knight => "Knight",
            Self::Bishop => "Bishop",
            Self::Queen => "Queen",
            Self::King => "King",
        };
        f.write_str(name)
    }
}

/// A square addressed by 1-based file (a = 1) and rank (white's back rank = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Returns `None` unless both coordinates are in `1..=8`.
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        if (1..=8).contains(&file) && (1..=8).contains(&rank) {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    pub fn file(&self) -> u8 {
        self.file
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}

/// Visual record of a chess piece. Carries no behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub team: Team,
    pub kind: Kind,
    pub square: Square,
}

impl Piece {
    pub fn new(team: Team, kind: Kind, square: Square) -> Self {
        Self { team, kind, square }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_rejects_out_of_range() {
        assert!(Square::new(0, 1).is_none());
        assert!(Square::new(1, 0).is_none());
        assert!(Square::new(9, 8).is_none());
        assert!(Square::new(8, 9).is_none());
        assert!(Square::new(8, 8).is_some());
    }

    #[test]
    fn square_display_is_file_then_rank() {
        assert_eq!(Square::new(5, 2).unwrap().to_string(), "(5, 2)");
        assert_eq!(Square::new(1, 8).unwrap().to_string(), "(1, 8)");
    }

    #[test]
    fn team_display_matches_log_format() {
        assert_eq!(Team::White.to_string(), "White");
        assert_eq!(Team::Black.to_string(), "Black");
    }
}
