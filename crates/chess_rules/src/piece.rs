use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::moves::Move;
use crate::types::{Color, PieceKind, Pos};

/// A piece: identity (kind, color) plus the square it currently stands on.
///
/// The recorded position always equals the position of the square holding
/// the piece. Only `Square::set_piece` updates it; rule logic never moves a
/// piece directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pos: Pos,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, pos: Pos) -> Self {
        Self { kind, color, pos }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub(crate) fn set_pos(&mut self, pos: Pos) {
        self.pos = pos;
    }

    /// Every square this piece may move to under geometry, occupancy, and
    /// path-blocking rules (check safety is the game's concern, not the
    /// piece's).
    ///
    /// Trial-validates a `Move` against all 64 squares. O(64 × per-move
    /// cost), which is fine at board scale; no pruning.
    pub fn valid_moves(&self, board: &Board) -> Vec<Pos> {
        let mut out = Vec::new();
        for square in board.squares() {
            let mv = Move::new(*self, square.pos(), board);
            if mv.is_valid() {
                out.push(square.pos());
            }
        }
        out
    }
}
