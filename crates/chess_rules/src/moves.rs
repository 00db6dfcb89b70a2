use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::piece::Piece;
use crate::types::{Color, PieceKind, Pos};

/// Where a move is headed, resolved once when the move is built: either an
/// empty square or a square with its occupant.
#[derive(Clone, Copy, Debug)]
pub enum Target {
    Empty(Pos),
    Occupied(Piece),
}

impl Target {
    pub fn pos(&self) -> Pos {
        match self {
            Target::Empty(pos) => *pos,
            Target::Occupied(piece) => piece.pos(),
        }
    }
}

/// A proposed transition of one piece, validated against a board.
///
/// Moves are throwaway values: built fresh for each validation attempt,
/// never stored. `is_valid` is pure and idempotent for an unchanged board.
pub struct Move<'a> {
    piece: Piece,
    target: Target,
    board: &'a Board,
}

impl<'a> Move<'a> {
    pub fn new(piece: Piece, to: Pos, board: &'a Board) -> Self {
        let target = match board.piece_at(to) {
            Some(occupant) => Target::Occupied(occupant),
            None => Target::Empty(to),
        };
        Self {
            piece,
            target,
            board,
        }
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn from(&self) -> Pos {
        self.piece.pos()
    }

    pub fn to(&self) -> Pos {
        self.target.pos()
    }

    /// Whether the destination holds a piece. Committed moves only ever
    /// capture enemies; a same-color occupant fails validation instead.
    pub fn is_capture(&self) -> bool {
        matches!(self.target, Target::Occupied(_))
    }

    /// Geometry, occupancy, and path rules for the moving piece's kind.
    /// Deliberately silent on check safety; that is the game's guard.
    pub fn is_valid(&self) -> bool {
        let to = self.to();
        if !to.in_bounds() || self.board.square(to).is_none() {
            return false;
        }
        match self.piece.kind {
            PieceKind::Pawn => self.valid_pawn(),
            PieceKind::Rook => self.valid_rook(),
            PieceKind::Knight => self.valid_knight(),
            PieceKind::Bishop => self.valid_bishop(),
            PieceKind::Queen => self.valid_rook() || self.valid_bishop(),
            PieceKind::King => self.valid_king(),
        }
    }

    fn valid_pawn(&self) -> bool {
        let from = self.from();
        let to = self.to();
        let dir = self.piece.color.pawn_dir();

        // Forward one: destination must be empty, enemy or not.
        if to.x == from.x && to.y == from.y + dir {
            return !self.is_capture();
        }

        // Forward two from the starting rank: both squares empty.
        if to.x == from.x
            && from.y == self.piece.color.pawn_start_rank()
            && to.y == from.y + 2 * dir
        {
            let mid = Pos::new(from.x, from.y + dir);
            return self.board.piece_at(mid).is_none() && !self.is_capture();
        }

        // Diagonal one forward: only as a capture of an enemy piece.
        // No en passant.
        if (to.x - from.x).abs() == 1 && to.y == from.y + dir {
            return match self.target {
                Target::Occupied(occupant) => occupant.color != self.piece.color,
                Target::Empty(_) => false,
            };
        }

        false
    }

    fn valid_rook(&self) -> bool {
        let from = self.from();
        let to = self.to();
        if from.x != to.x && from.y != to.y {
            return false;
        }
        !self.path_blocked() && self.can_capture_target()
    }

    fn valid_knight(&self) -> bool {
        let from = self.from();
        let to = self.to();
        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();
        ((dx == 1 && dy == 2) || (dx == 2 && dy == 1)) && self.can_capture_target()
    }

    fn valid_bishop(&self) -> bool {
        let from = self.from();
        let to = self.to();
        if (to.x - from.x).abs() != (to.y - from.y).abs() {
            return false;
        }
        !self.path_blocked() && self.can_capture_target()
    }

    fn valid_king(&self) -> bool {
        let from = self.from();
        let to = self.to();
        (to.x - from.x).abs() <= 1
            && (to.y - from.y).abs() <= 1
            && self.can_capture_target()
    }

    /// Walks unit steps over the open interval between from and to; any
    /// occupied intermediate square blocks, regardless of its color.
    fn path_blocked(&self) -> bool {
        let from = self.from();
        let to = self.to();
        let dx = (to.x - from.x).signum();
        let dy = (to.y - from.y).signum();
        if dx == 0 && dy == 0 {
            return false;
        }

        let mut cur = Pos::new(from.x + dx, from.y + dy);
        while cur != to {
            if self.board.piece_at(cur).is_some() {
                return true;
            }
            cur = Pos::new(cur.x + dx, cur.y + dy);
        }
        false
    }

    /// Empty destinations are always fine; occupied ones only when the
    /// occupant belongs to the other side.
    fn can_capture_target(&self) -> bool {
        match self.target {
            Target::Empty(_) => true,
            Target::Occupied(occupant) => occupant.color != self.piece.color,
        }
    }

    /// Notation token: `"<n>. "` prefix on white's move, then piece letter,
    /// origin, `x` on capture, destination. The scheme reproduces the game's
    /// display notation, not SAN.
    pub fn notation(&self, turn_number: u32, is_white: bool) -> String {
        let from = self.from();
        let to = self.to();
        let prefix = if is_white {
            format!("{}. ", turn_number)
        } else {
            String::new()
        };
        format!(
            "{}{}{}{}{}{}{}",
            prefix,
            self.piece.kind.letter(),
            from.file_char(),
            from.rank_char(),
            if self.is_capture() { "x" } else { "" },
            to.file_char(),
            to.rank_char(),
        )
    }

    /// The facts worth keeping once the move commits.
    pub fn record(&self, turn_number: u32, is_white: bool) -> MoveRecord {
        MoveRecord {
            kind: self.piece.kind,
            color: self.piece.color,
            from: self.from(),
            to: self.to(),
            captured: match self.target {
                Target::Occupied(occupant) => Some(occupant.kind),
                Target::Empty(_) => None,
            },
            notation: self.notation(turn_number, is_white),
        }
    }
}

/// One committed ply in the game history: minimal from/to/capture facts plus
/// the derived notation token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub kind: PieceKind,
    pub color: Color,
    pub from: Pos,
    pub to: Pos,
    pub captured: Option<PieceKind>,
    pub notation: String,
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
