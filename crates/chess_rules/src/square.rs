use crate::piece::Piece;
use crate::types::Pos;

/// One board cell. Holds at most one piece.
///
/// A square's position is fixed at construction; placing a piece here pushes
/// that position down into the piece, which is the single point where the
/// piece/square position invariant is maintained.
#[derive(Clone, Debug)]
pub struct Square {
    pos: Pos,
    piece: Option<Piece>,
}

impl Square {
    pub(crate) fn new(pos: Pos) -> Self {
        Self { pos, piece: None }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// Occupancy-level capture test: empty, or held by the other color.
    /// Movement geometry is `Move`'s job, not the square's.
    pub fn can_be_occupied_by(&self, piece: &Piece) -> bool {
        match &self.piece {
            None => true,
            Some(occupant) => occupant.color != piece.color,
        }
    }

    pub(crate) fn set_piece(&mut self, piece: Option<Piece>) {
        self.piece = piece.map(|mut p| {
            p.set_pos(self.pos);
            p
        });
    }

    pub(crate) fn take_piece(&mut self) -> Option<Piece> {
        self.piece.take()
    }
}
