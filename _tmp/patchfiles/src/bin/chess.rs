/*
 * This file is part of a chess engine.
 *
 * This program is free software: you can redistribute it and/or modify it
 * under the terms of the GNU General Public License as published by the Free
 * Software Foundation, either version 3 of the License, or (at your option)
 * any later version.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
 * FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for
 * more details.
 *
 * You should have received a copy of the GNU General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>.
 */

//! The command-line front-end: `perft` and `play`.
//!
//! Neither subcommand is part of the library (`chess_core`): this binary is
//! the one place FEN and coordinate-notation input actually reach stdin/argv,
//! and the one place a board gets printed as text.

use std::{
    env, io,
    io::Write as _,
    process::ExitCode,
    time::Duration,
};

use chess_core::{
    algebraic,
    board::Board,
    defs::{File, Piece, Rank, Side, Square},
    evaluation::evaluate,
    movegen::GameStatus,
    perft::perft_divide,
    search::search,
    transposition_table::TranspositionTable,
};

/// How long the engine side of `play` is given to choose each move.
const ENGINE_TIME_BUDGET: Duration = Duration::from_secs(3);

fn main() -> ExitCode {
    let mut args = env::args();
    args.next();

    match args.next().as_deref() {
        Some("perft") => run_perft(&args.collect::<Vec<_>>()),
        Some("play") => {
            run_play();
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("usage: chess perft <depth> <fen> [<moves>]");
            eprintln!("       chess play");
            ExitCode::FAILURE
        }
    }
}

/// Runs the `perft <depth> <fen> [<moves>]` subcommand.
fn run_perft(args: &[String]) -> ExitCode {
    let (Some(depth), Some(fen)) = (args.first(), args.get(1)) else {
        eprintln!("usage: chess perft <depth> <fen> [<moves>]");
        return ExitCode::FAILURE;
    };

    let Ok(depth) = depth.parse::<u32>() else {
        eprintln!("malformed depth: {depth}");
        return ExitCode::FAILURE;
    };

    let mut board: Board = match fen.parse() {
        Ok(board) => board,
        Err(err) => {
            eprintln!("malformed FEN: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(moves) = args.get(2) {
        for token in moves.split_whitespace() {
            if let Err(err) = apply_algebraic(&mut board, token) {
                eprintln!("malformed move {token}: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    let (breakdown, total) = perft_divide(&mut board, depth);
    for (mv, count) in breakdown {
        println!("{mv} {count}");
    }
    println!("{total}");

    ExitCode::SUCCESS
}

/// Parses and applies one coordinate-notation move to `board`. Used only for
/// the `perft` subcommand's optional move-sequence argument, which is
/// trusted (pseudo-legal) input rather than user-facing.
fn apply_algebraic(board: &mut Board, token: &str) -> Result<(), chess_core::error::ParseError> {
    let parsed = algebraic::parse(token)?;
    let (moves, _) = board.legal_moves();
    match moves.find(parsed.from, parsed.to, parsed.promotion) {
        Some(mv) => {
            board.apply(mv);
            Ok(())
        }
        None => Err(chess_core::error::ParseError::InvalidToken),
    }
}

/// Runs the interactive `play` subcommand.
fn run_play() {
    let stdin = io::stdin();

    let white_is_human = ask_yes_no(&stdin, "Is White a human? (y/n) ");
    let black_is_human = ask_yes_no(&stdin, "Is Black a human? (y/n) ");

    let mut board = Board::default();
    let mut tt = TranspositionTable::new();

    loop {
        let (moves, status) = board.legal_moves();
        print_board(&board);
        println!("evaluation (White's perspective): {}", side_relative_to_white(&board, evaluate(&board)));

        match status {
            GameStatus::Checkmate => {
                let winner = if board.side_to_move() == Side::WHITE { "Black" } else { "White" };
                println!("checkmate, {winner} wins");
                break;
            }
            GameStatus::Stalemate => {
                println!("stalemate");
                break;
            }
            GameStatus::FiftyMoveDraw => {
                println!("draw by the fifty-move rule");
                break;
            }
            GameStatus::InProgress => {}
        }

        let is_human = if board.side_to_move() == Side::WHITE { white_is_human } else { black_is_human };

        let mv = if is_human {
            loop {
                let input = read_line(&stdin, "your move (e.g. e2e4): ");
                match algebraic::parse(input.trim()) {
                    Ok(parsed) => match moves.find(parsed.from, parsed.to, parsed.promotion) {
                        Some(mv) => break mv,
                        None => println!("illegal move, try again"),
                    },
                    Err(err) => println!("malformed move ({err}), try again"),
                }
            }
        } else {
            println!("engine is thinking...");
            search(&mut board, &mut tt, ENGINE_TIME_BUDGET)
        };

        println!("playing {mv}");
        board.apply(mv);
    }
}

/// Flips `score` (from the side-to-move's perspective) to White's
/// perspective for display.
fn side_relative_to_white(board: &Board, score: i32) -> i32 {
    if board.side_to_move() == Side::WHITE {
        score
    } else {
        -score
    }
}

/// Prints a rank-by-rank textual grid of `board`, rank 8 first, file 'a'
/// first within each rank.
fn print_board(board: &Board) {
    for rank in (0..Rank::TOTAL as u8).rev() {
        for file in 0..File::TOTAL as u8 {
            let square = Square::from_pos(Rank(rank), File(file));
            let piece = board.piece_at(square);
            let letter = if piece == Piece::NONE { '.' } else { char::from(piece) };
            print!("{letter} ");
        }
        println!();
    }
}

/// Prompts with `prompt` and reads a trimmed line from `stdin`.
fn read_line(stdin: &io::Stdin, prompt: &str) -> String {
    print!("{prompt}");
    io::stdout().flush().expect("stdout is writable");
    let mut line = String::new();
    stdin.read_line(&mut line).expect("stdin is readable");
    line
}

/// Prompts with `prompt` until the user answers `y`/`n` (case-insensitive),
/// returning `true` for `y`.
fn ask_yes_no(stdin: &io::Stdin, prompt: &str) -> bool {
    loop {
        let answer = read_line(stdin, prompt);
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" => return true,
            "n" => return false,
            _ => println!("please answer y or n"),
        }
    }
}


