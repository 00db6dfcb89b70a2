use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::board::{Board, BoardSnapshot};
use crate::moves::{Move, MoveRecord};
use crate::types::{Color, Pos};

/// Why a move attempt was rejected. Rule violations are values, never
/// panics; the display text is what the player sees.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Invalid move")]
    Invalid,
    #[error("It is not your turn")]
    OutOfTurn,
    #[error("King is still in check after this move")]
    StillInCheck,
    /// Structural refusal from the board (missing square, empty origin after
    /// validation passed). Indicates an invariant breach, not a normal game
    /// condition.
    #[error("Move execution failed")]
    ExecutionFailed,
}

/// Checkpoint of a whole game: board occupancy, turn, and history.
/// Serializable, so a paused game can be written out and resumed later.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSnapshot {
    board: BoardSnapshot,
    turn: Color,
    history: Vec<MoveRecord>,
}

/// Turn order, move acceptance, and history for one game.
///
/// `make_move` is the sole mutating entry point. Everything else is a query
/// the display layer may call freely.
#[derive(Clone, Debug)]
pub struct ChessGame {
    board: Board,
    turn: Color,
    history: Vec<MoveRecord>,
    saved: Option<GameSnapshot>,
    in_check: bool,
    endangered: Vec<Pos>,
}

impl ChessGame {
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Start from an arbitrary board, white to move. Used by tests and
    /// scenario setups.
    pub fn with_board(board: Board) -> Self {
        let mut game = Self {
            board,
            turn: Color::White,
            history: Vec::new(),
            saved: None,
            in_check: false,
            endangered: Vec::new(),
        };
        game.refresh_danger();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Color {
        self.turn
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Whether the side to move is currently in check. Recomputed after
    /// every commit; the display layer reads it for check highlighting.
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    /// Positions of the side to move's pieces under attack, for danger
    /// highlighting.
    pub fn endangered(&self) -> &[Pos] {
        &self.endangered
    }

    /// Validate and commit one move. On success the turn flips, the move is
    /// appended to history, and the check/danger state of the new side to
    /// move is recomputed.
    pub fn make_move(&mut self, from: Pos, to: Pos) -> Result<MoveRecord, MoveError> {
        let piece = self.board.piece_at(from).ok_or(MoveError::Invalid)?;
        if piece.color != self.turn {
            debug!(%from, %to, turn = ?self.turn, "rejected: out of turn");
            return Err(MoveError::OutOfTurn);
        }

        let mv = Move::new(piece, to, &self.board);
        if !mv.is_valid() {
            debug!(%from, %to, kind = ?piece.kind, "rejected: illegal geometry");
            return Err(MoveError::Invalid);
        }
        let turn_number = self.history.len() as u32 / 2 + 1;
        let record = mv.record(turn_number, self.turn == Color::White);

        if self.is_king_in_check(piece.color) {
            // Already in check: apply speculatively and keep the move only if
            // it resolves the check. (The mover may otherwise still expose
            // their own king; pin detection is out of scope.)
            let probe = self.board.snapshot();
            if !self.board.move_piece(from, to) {
                return Err(MoveError::ExecutionFailed);
            }
            if self.is_king_in_check(piece.color) {
                self.board.restore(&probe);
                debug!(%from, %to, "rejected: king still in check");
                return Err(MoveError::StillInCheck);
            }
        } else if !self.board.move_piece(from, to) {
            return Err(MoveError::ExecutionFailed);
        }

        self.turn = self.turn.other();
        self.history.push(record.clone());
        self.refresh_danger();
        info!(
            notation = %record.notation,
            next = ?self.turn,
            in_check = self.in_check,
            "move committed"
        );
        Ok(record)
    }

    /// True iff some enemy piece's valid-move set contains the king of
    /// `color`. Full enemy move enumeration each call; no caching, which is
    /// acceptable at board scale.
    pub fn is_king_in_check(&self, color: Color) -> bool {
        let king = match self.board.king_pos(color) {
            Some(pos) => pos,
            None => return false,
        };
        self.board
            .pieces()
            .iter()
            .filter(|p| p.color != color)
            .any(|p| p.valid_moves(&self.board).contains(&king))
    }

    /// Space-joined notation tokens in ply order.
    pub fn notation(&self) -> String {
        self.history
            .iter()
            .map(|record| record.notation.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Checkpoint the game into the pause slot. One slot only: a second save
    /// overwrites the first.
    pub fn save_state(&mut self) {
        self.saved = Some(self.checkpoint());
    }

    /// Restore and consume the pause checkpoint, returning the restored
    /// side to move, or `None` when nothing was saved.
    pub fn restore_state(&mut self) -> Option<Color> {
        let snapshot = self.saved.take()?;
        self.apply_snapshot(&snapshot);
        Some(self.turn)
    }

    /// A standalone checkpoint the caller owns, e.g. for writing a paused
    /// game to disk.
    pub fn checkpoint(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.snapshot(),
            turn: self.turn,
            history: self.history.clone(),
        }
    }

    /// Rebuild a game from a checkpoint.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Self {
        let mut game = Self::with_board(Board::empty());
        game.apply_snapshot(snapshot);
        game
    }

    fn apply_snapshot(&mut self, snapshot: &GameSnapshot) {
        self.board.restore(&snapshot.board);
        self.turn = snapshot.turn;
        self.history = snapshot.history.clone();
        self.refresh_danger();
    }

    fn refresh_danger(&mut self) {
        self.in_check = self.is_king_in_check(self.turn);
        self.endangered = self.board.endangered_pieces(self.turn);
    }
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}
