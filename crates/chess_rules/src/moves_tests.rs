use super::*;
use crate::board::Board;

fn p(x: i8, y: i8) -> Pos {
    Pos::new(x, y)
}

fn valid(board: &Board, from: Pos, to: Pos) -> bool {
    let piece = board.piece_at(from).expect("no piece on from-square");
    Move::new(piece, to, board).is_valid()
}

// =============================================================================
// Pawn
// =============================================================================

#[test]
fn test_pawn_single_and_double_step() {
    let board = Board::new();
    assert!(valid(&board, p(4, 1), p(4, 2)));
    assert!(valid(&board, p(4, 1), p(4, 3)));
    assert!(!valid(&board, p(4, 1), p(4, 4)));
    // Black mirrors downward.
    assert!(valid(&board, p(4, 6), p(4, 5)));
    assert!(valid(&board, p(4, 6), p(4, 4)));
    assert!(!valid(&board, p(4, 6), p(4, 7)));
}

#[test]
fn test_pawn_double_step_needs_both_squares_empty() {
    let mut board = Board::new();
    board.place(PieceKind::Knight, Color::Black, p(4, 2));
    assert!(!valid(&board, p(4, 1), p(4, 3)));
    assert!(!valid(&board, p(4, 1), p(4, 2)));

    let mut board = Board::new();
    board.place(PieceKind::Knight, Color::Black, p(4, 3));
    assert!(!valid(&board, p(4, 1), p(4, 3)));
    assert!(valid(&board, p(4, 1), p(4, 2)));
}

#[test]
fn test_pawn_double_step_only_from_start_rank() {
    let mut board = Board::empty();
    board.place(PieceKind::Pawn, Color::White, p(4, 2));
    assert!(valid(&board, p(4, 2), p(4, 3)));
    assert!(!valid(&board, p(4, 2), p(4, 4)));
}

#[test]
fn test_pawn_forward_cannot_capture() {
    let mut board = Board::empty();
    board.place(PieceKind::Pawn, Color::White, p(4, 1));
    board.place(PieceKind::Pawn, Color::Black, p(4, 2));
    assert!(!valid(&board, p(4, 1), p(4, 2)));
}

#[test]
fn test_pawn_diagonal_only_captures_enemies() {
    let mut board = Board::empty();
    board.place(PieceKind::Pawn, Color::White, p(4, 1));
    // Empty diagonal: no.
    assert!(!valid(&board, p(4, 1), p(5, 2)));
    // Enemy on the diagonal: yes.
    board.place(PieceKind::Knight, Color::Black, p(5, 2));
    assert!(valid(&board, p(4, 1), p(5, 2)));
    // Own piece on the diagonal: no.
    board.place(PieceKind::Knight, Color::White, p(3, 2));
    assert!(!valid(&board, p(4, 1), p(3, 2)));
    // Never backwards.
    board.place(PieceKind::Knight, Color::Black, p(5, 0));
    assert!(!valid(&board, p(4, 1), p(5, 0)));
}

// =============================================================================
// Rook / bishop / queen and path blocking
// =============================================================================

#[test]
fn test_rook_moves_along_files_and_ranks() {
    let mut board = Board::empty();
    board.place(PieceKind::Rook, Color::White, p(3, 3));
    assert!(valid(&board, p(3, 3), p(3, 7)));
    assert!(valid(&board, p(3, 3), p(0, 3)));
    assert!(!valid(&board, p(3, 3), p(4, 4)));
}

#[test]
fn test_rook_blocked_by_any_color() {
    let mut board = Board::empty();
    board.place(PieceKind::Rook, Color::White, p(3, 0));
    board.place(PieceKind::Pawn, Color::White, p(3, 3));
    assert!(!valid(&board, p(3, 0), p(3, 5)));

    let mut board = Board::empty();
    board.place(PieceKind::Rook, Color::White, p(3, 0));
    board.place(PieceKind::Pawn, Color::Black, p(3, 3));
    assert!(!valid(&board, p(3, 0), p(3, 5)));
    // Capturing the blocker itself is fine.
    assert!(valid(&board, p(3, 0), p(3, 3)));
}

#[test]
fn test_bishop_moves_diagonally() {
    let mut board = Board::empty();
    board.place(PieceKind::Bishop, Color::White, p(2, 0));
    assert!(valid(&board, p(2, 0), p(7, 5)));
    assert!(valid(&board, p(2, 0), p(0, 2)));
    assert!(!valid(&board, p(2, 0), p(2, 4)));

    board.place(PieceKind::Pawn, Color::Black, p(4, 2));
    assert!(!valid(&board, p(2, 0), p(7, 5)));
    assert!(valid(&board, p(2, 0), p(4, 2)));
}

#[test]
fn test_queen_combines_rook_and_bishop() {
    let mut board = Board::empty();
    board.place(PieceKind::Queen, Color::White, p(3, 3));
    assert!(valid(&board, p(3, 3), p(3, 0)));
    assert!(valid(&board, p(3, 3), p(6, 6)));
    assert!(!valid(&board, p(3, 3), p(4, 5)));
}

// =============================================================================
// Knight and king
// =============================================================================

#[test]
fn test_knight_jumps_ignore_blockers() {
    let board = Board::new();
    // b1 over the pawn rank.
    assert!(valid(&board, p(1, 0), p(2, 2)));
    assert!(valid(&board, p(1, 0), p(0, 2)));
    assert!(!valid(&board, p(1, 0), p(1, 2)));
    // Own piece on the landing square.
    assert!(!valid(&board, p(1, 0), p(3, 1)));
}

#[test]
fn test_king_single_step_any_direction() {
    let mut board = Board::empty();
    board.place(PieceKind::King, Color::White, p(4, 4));
    for (dx, dy) in [(1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1), (1, -1)] {
        assert!(valid(&board, p(4, 4), p(4 + dx, 4 + dy)));
    }
    assert!(!valid(&board, p(4, 4), p(6, 4)));
    assert!(!valid(&board, p(4, 4), p(4, 4)));
}

// =============================================================================
// Shared behavior
// =============================================================================

#[test]
fn test_destination_must_be_on_the_board() {
    let mut board = Board::empty();
    board.place(PieceKind::Rook, Color::White, p(0, 0));
    assert!(!valid(&board, p(0, 0), p(0, 8)));
    assert!(!valid(&board, p(0, 0), p(-1, 0)));
}

#[test]
fn test_own_piece_blocks_the_destination() {
    let mut board = Board::empty();
    board.place(PieceKind::Queen, Color::White, p(0, 0));
    board.place(PieceKind::Pawn, Color::White, p(0, 5));
    assert!(!valid(&board, p(0, 0), p(0, 5)));
}

#[test]
fn test_validation_is_idempotent() {
    let board = Board::new();
    let piece = board.piece_at(p(4, 1)).unwrap();
    let mv = Move::new(piece, p(4, 3), &board);
    assert!(mv.is_valid());
    assert!(mv.is_valid());

    let bad = Move::new(piece, p(5, 3), &board);
    assert!(!bad.is_valid());
    assert!(!bad.is_valid());
}

#[test]
fn test_target_resolves_occupancy_at_construction() {
    let board = Board::new();
    let pawn = board.piece_at(p(4, 1)).unwrap();
    let quiet = Move::new(pawn, p(4, 2), &board);
    assert!(!quiet.is_capture());
    // A square already holding a piece resolves to an occupied target.
    assert!(Move::new(pawn, p(4, 6), &board).is_capture());
}

// =============================================================================
// Notation
// =============================================================================

#[test]
fn test_notation_prefixes_white_moves() {
    let board = Board::new();
    let pawn = board.piece_at(p(4, 1)).unwrap();
    let mv = Move::new(pawn, p(4, 3), &board);
    assert_eq!(mv.notation(1, true), "1. Pe2e4");
    assert_eq!(mv.notation(1, false), "Pe2e4");
}

#[test]
fn test_notation_marks_captures() {
    let mut board = Board::empty();
    board.place(PieceKind::Rook, Color::White, p(0, 0));
    board.place(PieceKind::Pawn, Color::Black, p(0, 6));
    let rook = board.piece_at(p(0, 0)).unwrap();
    let mv = Move::new(rook, p(0, 6), &board);
    assert_eq!(mv.notation(3, false), "Ra1xa7");
}

#[test]
fn test_record_keeps_capture_facts() {
    let mut board = Board::empty();
    board.place(PieceKind::Queen, Color::Black, p(3, 7));
    board.place(PieceKind::Knight, Color::White, p(3, 0));
    let queen = board.piece_at(p(3, 7)).unwrap();
    let record = Move::new(queen, p(3, 0), &board).record(5, false);
    assert_eq!(record.kind, PieceKind::Queen);
    assert_eq!(record.color, Color::Black);
    assert_eq!(record.from, p(3, 7));
    assert_eq!(record.to, p(3, 0));
    assert_eq!(record.captured, Some(PieceKind::Knight));
    assert_eq!(record.notation, "Qd8xd1");
}
