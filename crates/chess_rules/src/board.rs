use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::piece::Piece;
use crate::square::Square;
use crate::types::{Color, PieceKind, Pos};

/// The authoritative mapping from coordinates to squares and their pieces.
///
/// The map is total over the 8×8 grid: all 64 squares exist from construction
/// and are never removed. `Board` enforces structural consistency only (one
/// occupant per square, piece positions in sync); move legality lives in
/// `Move` and `ChessGame`.
#[derive(Clone, Debug)]
pub struct Board {
    squares: HashMap<Pos, Square>,
}

/// Deep copy of board occupancy, sufficient to restore the exact piece set.
///
/// A snapshot is a value the caller owns, so a speculative legality probe and
/// a longer-lived pause checkpoint can coexist without clobbering each other.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pieces: Vec<(Pos, PieceKind, Color)>,
}

impl Board {
    /// All 64 squares, no pieces.
    pub fn empty() -> Self {
        let mut squares = HashMap::with_capacity(64);
        for x in 0..8 {
            for y in 0..8 {
                let pos = Pos::new(x, y);
                squares.insert(pos, Square::new(pos));
            }
        }
        Self { squares }
    }

    /// Standard starting layout.
    pub fn new() -> Self {
        let mut board = Self::empty();

        for x in 0..8 {
            board.place(PieceKind::Pawn, Color::White, Pos::new(x, 1));
            board.place(PieceKind::Pawn, Color::Black, Pos::new(x, 6));
        }

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (x, &kind) in back.iter().enumerate() {
            board.place(kind, Color::White, Pos::new(x as i8, 0));
            board.place(kind, Color::Black, Pos::new(x as i8, 7));
        }

        board
    }

    /// Put a fresh piece on a square, replacing any occupant. Returns `false`
    /// for out-of-range positions.
    pub fn place(&mut self, kind: PieceKind, color: Color, pos: Pos) -> bool {
        match self.squares.get_mut(&pos) {
            Some(square) => {
                square.set_piece(Some(Piece::new(kind, color, pos)));
                true
            }
            None => false,
        }
    }

    /// Bounds-checked square lookup.
    pub fn square(&self, pos: Pos) -> Option<&Square> {
        self.squares.get(&pos)
    }

    /// The occupant of `pos`, copied out.
    pub fn piece_at(&self, pos: Pos) -> Option<Piece> {
        self.squares.get(&pos).and_then(|sq| sq.piece().copied())
    }

    /// All squares, for enumeration by movegen and the display layer.
    /// Iteration order is unspecified.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.values()
    }

    /// All live pieces, copied out.
    pub fn pieces(&self) -> Vec<Piece> {
        self.squares
            .values()
            .filter_map(|sq| sq.piece().copied())
            .collect()
    }

    /// Relocate the piece on `from` to `to`, capturing any occupant of `to`
    /// first. Purely structural: no legality checking of any kind.
    ///
    /// Returns `false` without mutation when `from` is empty or either square
    /// is missing.
    pub fn move_piece(&mut self, from: Pos, to: Pos) -> bool {
        if !self.squares.contains_key(&to) {
            return false;
        }
        let piece = match self.squares.get_mut(&from) {
            Some(square) => match square.take_piece() {
                Some(piece) => piece,
                None => return false,
            },
            None => return false,
        };
        // Captured occupant of `to` is dropped here; disposal of its visual
        // counterpart is the rendering layer's concern.
        let dest = self.squares.get_mut(&to).expect("destination checked above");
        dest.set_piece(Some(piece));
        true
    }

    /// Detach and return the occupant of `pos`, if any.
    pub fn remove_piece(&mut self, pos: Pos) -> Option<Piece> {
        self.squares.get_mut(&pos).and_then(|sq| sq.take_piece())
    }

    /// Positions of `turn`'s pieces that some enemy piece could move onto.
    /// O(pieces × movegen); recomputed from scratch each call.
    pub fn endangered_pieces(&self, turn: Color) -> Vec<Pos> {
        let mut out = Vec::new();
        for attacker in self.pieces() {
            if attacker.color == turn {
                continue;
            }
            for dest in attacker.valid_moves(self) {
                let attacked = match self.piece_at(dest) {
                    Some(p) => p.color == turn,
                    None => false,
                };
                if attacked && !out.contains(&dest) {
                    out.push(dest);
                }
            }
        }
        out
    }

    /// The unique king of `color`, if present.
    pub fn king_pos(&self, color: Color) -> Option<Pos> {
        self.pieces()
            .into_iter()
            .find(|p| p.kind == PieceKind::King && p.color == color)
            .map(|p| p.pos())
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut pieces: Vec<(Pos, PieceKind, Color)> = self
            .pieces()
            .into_iter()
            .map(|p| (p.pos(), p.kind, p.color))
            .collect();
        // Stable order so equal boards produce equal snapshots.
        pieces.sort_by_key(|(pos, _, _)| (pos.x, pos.y));
        BoardSnapshot { pieces }
    }

    /// Clear every square, then recreate occupancy from the snapshot.
    pub fn restore(&mut self, snapshot: &BoardSnapshot) {
        for square in self.squares.values_mut() {
            square.set_piece(None);
        }
        for &(pos, kind, color) in &snapshot.pieces {
            self.place(kind, color, pos);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
