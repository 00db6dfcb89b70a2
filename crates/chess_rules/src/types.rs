use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction a pawn of this color advances in.
    pub fn pawn_dir(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank a pawn of this color starts on (double-step origin).
    pub fn pawn_start_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Notation letter: the uppercased first letter of the piece name.
    ///
    /// This mirrors the game's display notation rather than SAN, so pawns
    /// get a letter and knight shares `K` with king.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'K',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A board coordinate: file `x` and rank `y`, both in `0..8` when on the
/// board. Plain value type, equality by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i8,
    pub y: i8,
}

impl Pos {
    pub fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(self) -> bool {
        (0..8).contains(&self.x) && (0..8).contains(&self.y)
    }

    /// File letter `a`..`h`. Only meaningful for in-bounds positions.
    pub fn file_char(self) -> char {
        (b'a' + self.x as u8) as char
    }

    /// Rank digit `1`..`8`. Only meaningful for in-bounds positions.
    pub fn rank_char(self) -> char {
        (b'1' + self.y as u8) as char
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
