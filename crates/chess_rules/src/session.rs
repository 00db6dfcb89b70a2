use std::collections::HashSet;

use crate::game::{ChessGame, MoveError};
use crate::moves::MoveRecord;
use crate::types::Pos;

/// What a tap on the board resolved to.
#[derive(Clone, Debug, PartialEq)]
pub enum TapOutcome {
    /// A piece of the side to move was picked up.
    Selected(Pos),
    /// The selected piece was tapped again and put down.
    Cleared,
    /// A move was committed.
    Moved(MoveRecord),
    /// A move was attempted and rejected.
    Rejected(MoveError),
    /// The tap hit nothing actionable.
    Ignored,
}

/// Input-layer orchestration: which piece is picked up and where it may go.
///
/// Selection state lives here, owned by one value and queried by whoever
/// needs it, instead of in a process-wide variable shared across the piece
/// and highlight code.
#[derive(Clone, Debug)]
pub struct Session {
    game: ChessGame,
    selected: Option<Pos>,
    targets: HashSet<Pos>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_game(ChessGame::new())
    }

    pub fn with_game(game: ChessGame) -> Self {
        Self {
            game,
            selected: None,
            targets: HashSet::new(),
        }
    }

    pub fn game(&self) -> &ChessGame {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut ChessGame {
        &mut self.game
    }

    pub fn selected(&self) -> Option<Pos> {
        self.selected
    }

    /// Legal destinations of the selected piece, for highlighting.
    pub fn targets(&self) -> &HashSet<Pos> {
        &self.targets
    }

    /// Pick up the piece on `pos` if it belongs to the side to move.
    /// Returns whether a selection took hold.
    pub fn select(&mut self, pos: Pos) -> bool {
        let piece = match self.game.board().piece_at(pos) {
            Some(piece) if piece.color == self.game.current_turn() => piece,
            _ => {
                self.clear_selection();
                return false;
            }
        };
        self.selected = Some(pos);
        self.targets = piece.valid_moves(self.game.board()).into_iter().collect();
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.targets.clear();
    }

    /// Resolve one select-or-move gesture against the board.
    pub fn tap(&mut self, pos: Pos) -> TapOutcome {
        if self.selected == Some(pos) {
            self.clear_selection();
            return TapOutcome::Cleared;
        }

        let own_piece = matches!(
            self.game.board().piece_at(pos),
            Some(piece) if piece.color == self.game.current_turn()
        );
        if own_piece {
            self.select(pos);
            return TapOutcome::Selected(pos);
        }

        let from = match self.selected {
            Some(from) => from,
            None => return TapOutcome::Ignored,
        };
        if !self.targets.contains(&pos) {
            self.clear_selection();
            return TapOutcome::Ignored;
        }

        let result = self.game.make_move(from, pos);
        self.clear_selection();
        match result {
            Ok(record) => TapOutcome::Moved(record),
            Err(err) => TapOutcome::Rejected(err),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
