//! Chess CLI
//!
//! Plays a game in the terminal against a second player at the same prompt,
//! or against the random opponent. Purely a consumer of the rule engine's
//! interface: it resolves text input to source/destination squares, calls
//! `make_move`, and renders the results.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

use chess_rules::{ChessGame, Color, GameSnapshot, Piece, PieceKind, Pos};
use random_player::RandomPlayer;
use tracing::warn;

fn print_usage() {
    println!("Chess CLI");
    println!();
    println!("Usage:");
    println!("  chess_cli [--ai] [--load FILE]");
    println!();
    println!("Options:");
    println!("  --ai          Random opponent plays black");
    println!("  --load FILE   Resume a saved game");
    println!();
    println!("Commands at the prompt:");
    println!("  e2e4          Move the piece on e2 to e4");
    println!("  moves e2      List legal destinations for the piece on e2");
    println!("  notation      Print the game notation so far");
    println!("  save FILE     Save the game and keep playing");
    println!("  quit          Exit");
}

/// Parse a square like `e2` into engine coordinates.
fn parse_square(text: &str) -> Option<Pos> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    Some(Pos::new((file - b'a') as i8, (rank - b'1') as i8))
}

/// Parse a move like `e2e4` into a from/to pair.
fn parse_move(text: &str) -> Option<(Pos, Pos)> {
    // ASCII only, so the midpoint slice cannot land inside a character.
    if text.len() != 4 || !text.is_ascii() {
        return None;
    }
    Some((parse_square(&text[..2])?, parse_square(&text[2..])?))
}

/// Display letter for one piece. Knight gets `N` here so the board stays
/// readable; the engine's notation scheme is separate.
fn piece_char(piece: &Piece) -> char {
    let letter = match piece.kind {
        PieceKind::Pawn => 'P',
        PieceKind::Rook => 'R',
        PieceKind::Knight => 'N',
        PieceKind::Bishop => 'B',
        PieceKind::Queen => 'Q',
        PieceKind::King => 'K',
    };
    match piece.color {
        Color::White => letter,
        Color::Black => letter.to_ascii_lowercase(),
    }
}

fn render_board(game: &ChessGame) {
    println!();
    for y in (0..8).rev() {
        print!("  {} ", y + 1);
        for x in 0..8 {
            match game.board().piece_at(Pos::new(x, y)) {
                Some(piece) => print!(" {}", piece_char(&piece)),
                None => print!(" ."),
            }
        }
        println!();
    }
    println!("     a b c d e f g h");
    println!();
}

fn print_status(game: &ChessGame) {
    let turn = match game.current_turn() {
        Color::White => "White",
        Color::Black => "Black",
    };
    if game.in_check() {
        println!("{} to move -- check!", turn);
    } else {
        println!("{} to move", turn);
    }
    if !game.endangered().is_empty() {
        let squares: Vec<String> = game
            .endangered()
            .iter()
            .map(|pos| format!("{}{}", pos.file_char(), pos.rank_char()))
            .collect();
        println!("Under attack: {}", squares.join(" "));
    }
}

fn save_game(game: &ChessGame, path: &str) -> Result<(), String> {
    let json = serde_json::to_string_pretty(&game.checkpoint())
        .map_err(|e| format!("Failed to serialize: {}", e))?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
}

fn load_game(path: &Path) -> Result<ChessGame, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
    let snapshot: GameSnapshot =
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))?;
    Ok(ChessGame::from_snapshot(&snapshot))
}

fn ai_reply(game: &mut ChessGame, player: &RandomPlayer) {
    // `play` retries candidates internally, so a refusal here means the
    // opponent truly has no committing move.
    match player.play(game) {
        Some(record) => println!("Opponent plays {}", record.notation),
        None => {
            warn!(turn = ?game.current_turn(), "opponent found no committing move");
            println!("Opponent has no moves");
        }
    }
}

fn run(mut game: ChessGame, ai: bool) {
    let opponent = RandomPlayer::new();
    let stdin = io::stdin();

    render_board(&game);
    print_status(&game);

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let command = parts.next().unwrap_or("");
        match command {
            "quit" | "exit" => break,
            "help" => print_usage(),
            "notation" => println!("{}", game.notation()),
            "moves" => match parts.next().and_then(parse_square) {
                Some(pos) => match game.board().piece_at(pos) {
                    Some(piece) => {
                        let targets: Vec<String> = piece
                            .valid_moves(game.board())
                            .iter()
                            .map(|p| format!("{}{}", p.file_char(), p.rank_char()))
                            .collect();
                        if targets.is_empty() {
                            println!("No legal destinations");
                        } else {
                            println!("{}", targets.join(" "));
                        }
                    }
                    None => println!("No piece on that square"),
                },
                None => println!("Usage: moves <square>, e.g. moves e2"),
            },
            "save" => match parts.next() {
                Some(path) => match save_game(&game, path) {
                    Ok(()) => println!("Saved to {}", path),
                    Err(err) => eprintln!("{}", err),
                },
                None => println!("Usage: save <file>"),
            },
            _ => match parse_move(command) {
                Some((from, to)) => {
                    match game.make_move(from, to) {
                        Ok(record) => {
                            println!("{}", record.notation);
                            if ai && game.current_turn() == Color::Black {
                                ai_reply(&mut game, &opponent);
                            }
                        }
                        Err(err) => println!("{}", err),
                    }
                    render_board(&game);
                    print_status(&game);
                }
                None => println!("Unrecognized command: {} (try `help`)", input),
            },
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut ai = false;
    let mut load: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--ai" => ai = true,
            "--load" => {
                if i + 1 < args.len() {
                    load = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    eprintln!("Error: --load requires a file");
                    print_usage();
                    return;
                }
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                return;
            }
        }
        i += 1;
    }

    let game = match load {
        Some(path) => match load_game(Path::new(&path)) {
            Ok(game) => {
                println!("Resumed {}", path);
                game
            }
            Err(err) => {
                eprintln!("{}", err);
                return;
            }
        },
        None => ChessGame::new(),
    };

    run(game, ai);
}
