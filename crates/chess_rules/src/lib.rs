//! Game-state and rule engine for a two-player chess game.
//!
//! The board is modeled as 64 piece-owning squares; a `Move` validates one
//! proposed transition against the board, and `ChessGame` owns turn order,
//! the self-check guard, and move history. The display/input layer drives
//! the engine through a narrow interface: it resolves a gesture to a source
//! and destination, calls [`ChessGame::make_move`] (or goes through
//! [`Session::tap`]), and queries valid-move sets, endangered pieces, and
//! the check flag for highlighting.
//!
//! Deliberately out of scope: castling, en passant, promotion,
//! checkmate/stalemate/draw detection, multi-level undo, and time controls.

pub mod board;
pub mod game;
pub mod moves;
pub mod piece;
pub mod session;
pub mod square;
pub mod types;

pub use board::{Board, BoardSnapshot};
pub use game::{ChessGame, GameSnapshot, MoveError};
pub use moves::{Move, MoveRecord, Target};
pub use piece::Piece;
pub use session::{Session, TapOutcome};
pub use square::Square;
pub use types::{Color, PieceKind, Pos};
