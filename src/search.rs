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

//! Iterative deepening over a negamax/alpha-beta search.
//!
//! No null-move pruning, killer moves, aspiration windows, or principal
//! variation beyond the best root move: this crate searches one position on
//! one thread with one transposition table, so none of that machinery has a
//! job to do here.

use std::time::{Duration, Instant};

use crate::{
    board::Board,
    evaluation::{evaluate, Eval, INF_EVAL, MATE_BASE},
    movegen::GameStatus,
    moves::Move,
    transposition_table::{Bound, TranspositionTable},
    zobrist,
};

/// A search depth or ply count. Plain `i32`: this engine's depths never
/// approach a range where a smaller width would matter.
pub type Depth = i32;

/// Runs iterative deepening from `board`'s current position until `budget`
/// elapses, and returns the best root move found.
///
/// # Panics
///
/// Panics if `board`'s game has already ended (checkmate, stalemate, or a
/// fifty-move draw) — searching a terminated position is a caller bug, not
/// a recoverable condition.
pub fn search(board: &mut Board, tt: &mut TranspositionTable, budget: Duration) -> Move {
    let deadline = Instant::now() + budget;
    let (root_moves, status) = board.legal_moves();
    assert!(!status.is_terminal(), "search invoked on a position with no legal moves");

    let mut ordered: Vec<Move> = root_moves.as_slice().to_vec();
    let mut best = ordered[0];
    let mut depth: Depth = 1;

    loop {
        let mut scored = Vec::with_capacity(ordered.len());
        let mut cancelled = false;

        for &mv in &ordered {
            if depth > 1 && Instant::now() >= deadline {
                cancelled = true;
                break;
            }
            board.apply(mv);
            let score = -negamax(board, tt, depth - 1, -INF_EVAL, INF_EVAL, 1);
            board.unapply();
            scored.push((mv, score));
        }

        if cancelled {
            break;
        }

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        ordered = scored.into_iter().map(|(mv, _)| mv).collect();
        best = ordered[0];

        if Instant::now() >= deadline {
            break;
        }
        depth += 1;
    }

    best
}

/// Negamax with alpha-beta pruning and transposition-table probing, scored
/// from the perspective of the side to move at `ply` plies from the root.
fn negamax(board: &mut Board, tt: &mut TranspositionTable, depth: Depth, mut alpha: Eval, beta: Eval, ply: Depth) -> Eval {
    let key = zobrist::hash(board);
    let original_alpha = alpha;

    if let Some(entry) = tt.load(key, ply) {
        if entry.depth() >= depth {
            let score = entry.score();
            match entry.bound() {
                Bound::Exact => return score,
                Bound::Lower if score >= beta => return score,
                Bound::Upper if score < alpha => return score,
                Bound::Lower | Bound::Upper => {}
            }
        }
    }

    let (moves, status) = board.legal_moves();
    match status {
        GameStatus::Checkmate => return MATE_BASE + Eval::from(ply),
        GameStatus::Stalemate | GameStatus::FiftyMoveDraw => return 0,
        GameStatus::InProgress => {}
    }

    if depth == 0 {
        return evaluate(board);
    }

    let mut value = -INF_EVAL;
    let mut best_move = None;

    for &mv in moves.as_slice() {
        board.apply(mv);
        let score = -negamax(board, tt, depth - 1, -beta, -alpha, ply + 1);
        board.unapply();

        if score > value {
            value = score;
            best_move = Some(mv);
        }
        alpha = alpha.max(value);
        if alpha >= beta {
            break;
        }
    }

    let bound = if value <= original_alpha {
        Bound::Upper
    } else if value >= beta {
        Bound::Lower
    } else {
        Bound::Exact
    };
    tt.store(key, depth, value, bound, best_move, ply);

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_mate_in_one() {
        // White to move, Qh5-f7 is mate.
        let mut board: Board =
            "rnbqkbnr/pppp1ppp/8/4p2Q/4P3/8/PPPP1PPP/RNB1KBNR w KQkq - 2 2".parse().expect("valid FEN");
        let mut tt = TranspositionTable::new();
        let mv = search(&mut board, &mut tt, Duration::from_millis(200));
        let f7 = crate::defs::Square::from_pos(crate::defs::Rank::RANK7, crate::defs::File::F);
        assert_eq!(mv.to(), f7);
    }

    #[test]
    fn avoids_losing_material_for_nothing() {
        let mut board: Board = crate::board::STARTPOS.parse().expect("valid FEN");
        let mut tt = TranspositionTable::new();
        let mv = search(&mut board, &mut tt, Duration::from_millis(100));
        // Any legal opening move is acceptable; the search must simply
        // terminate and return one.
        let (legal, _) = board.legal_moves();
        assert!(legal.as_slice().iter().any(|&legal_mv| legal_mv == mv));
    }
}
