//! Random-move opponent
//!
//! Picks uniformly at random from every (piece, destination) pair the rule
//! engine allows for the side to move. No evaluation, no search; it exists
//! to exercise the engine and to give a lone player something to push back.

use chess_rules::{ChessGame, MoveRecord, Pos};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// An opponent that plays random legal moves.
#[derive(Debug, Clone, Default)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }

    /// Choose a `(from, to)` pair for the side to move, or `None` when that
    /// side has no legal destination anywhere.
    pub fn choose(&self, game: &ChessGame) -> Option<(Pos, Pos)> {
        self.candidates(game).choose(&mut thread_rng()).copied()
    }

    /// Commit one random move, trying shuffled candidates until the game
    /// accepts one. Valid-move sets ignore check safety, so single picks can
    /// be refused while the side to move is in check; retrying the rest of
    /// the candidates finds an escape whenever one exists. `None` when no
    /// candidate commits.
    pub fn play(&self, game: &mut ChessGame) -> Option<MoveRecord> {
        let mut candidates = self.candidates(game);
        candidates.shuffle(&mut thread_rng());
        for (from, to) in candidates {
            if let Ok(record) = game.make_move(from, to) {
                return Some(record);
            }
        }
        None
    }

    fn candidates(&self, game: &ChessGame) -> Vec<(Pos, Pos)> {
        let board = game.board();
        let mut candidates = Vec::new();
        for piece in board.pieces() {
            if piece.color != game.current_turn() {
                continue;
            }
            for dest in piece.valid_moves(board) {
                candidates.push((piece.pos(), dest));
            }
        }
        candidates
    }
}
