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

//! Perft: counts the leaf positions reachable by exhaustively playing every
//! legal move sequence of a given length, the canonical correctness measure
//! for a move generator.

use crate::board::Board;

/// Counts the leaf positions reachable from `board` by playing every legal
/// move sequence of length `depth`. `depth == 0` counts the current position
/// itself as the single leaf.
pub fn perft(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let (moves, _) = board.legal_moves();
    let mut total = 0;
    for &mv in moves.as_slice() {
        board.apply(mv);
        total += perft(board, depth - 1);
        board.unapply();
    }
    total
}

/// Runs perft from `board`'s position one ply at a time, returning the
/// per-root-move leaf counts (in generation order) alongside their sum. Used
/// by the `perft` CLI subcommand to print a `<move> <count>` breakdown.
pub fn perft_divide(board: &mut Board, depth: u32) -> (Vec<(crate::moves::Move, u64)>, u64) {
    let (moves, _) = board.legal_moves();
    let mut breakdown = Vec::with_capacity(moves.len());
    let mut total = 0;

    for &mv in moves.as_slice() {
        board.apply(mv);
        let count = perft(board, depth.saturating_sub(1));
        board.unapply();
        breakdown.push((mv, count));
        total += count;
    }

    (breakdown, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::STARTPOS;

    #[test]
    fn startpos_perft_one_and_two() {
        let mut board: Board = STARTPOS.parse().expect("valid FEN");
        assert_eq!(perft(&mut board, 1), 20);
        assert_eq!(perft(&mut board, 2), 400);
    }

    #[test]
    fn startpos_perft_three() {
        let mut board: Board = STARTPOS.parse().expect("valid FEN");
        assert_eq!(perft(&mut board, 3), 8_902);
    }

    #[test]
    fn kiwipete_perft_two() {
        let mut board: Board = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -"
            .parse()
            .expect("valid FEN");
        assert_eq!(perft(&mut board, 2), 2_039);
    }

    #[test]
    fn divide_sums_to_the_total() {
        let mut board: Board = STARTPOS.parse().expect("valid FEN");
        let (breakdown, total) = perft_divide(&mut board, 3);
        assert_eq!(breakdown.len(), 20);
        assert_eq!(breakdown.iter().map(|(_, count)| count).sum::<u64>(), total);
        assert_eq!(total, 8_902);
    }
}
