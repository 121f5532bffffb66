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

#![cfg(test)]

//! The canonical perft correctness table (§8 of the design notes): every
//! `(fen, depth, expected_count)` triple is asserted in one pass.

use lazy_static::lazy_static;

use crate::{board::Board, perft::perft};

#[derive(Clone, Copy)]
struct TestPosition<'a> {
    position: &'a str,
    depth: u32,
    expected: u64,
}

impl<'a> TestPosition<'a> {
    const fn new(position: &'a str, depth: u32, expected: u64) -> Self {
        Self { position, depth, expected }
    }

    fn run(&self) {
        let mut board: Board = self.position.parse().expect("valid FEN");
        println!("position: {}, depth: {}", self.position, self.depth);
        assert_eq!(perft(&mut board, self.depth), self.expected);
    }
}

lazy_static! {
    /// The five positions and depths from the project's perft suite.
    static ref TEST_POSITIONS: Vec<TestPosition<'static>> = vec![
        TestPosition::new("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 4, 197_281),
        TestPosition::new(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
            4,
            4_085_603,
        ),
        TestPosition::new("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 5, 674_624),
        TestPosition::new(
            "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
            4,
            422_333,
        ),
        TestPosition::new(
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
            4,
            2_103_487,
        ),
    ];
}

#[test]
fn perft_suite() {
    for position in TEST_POSITIONS.iter() {
        position.run();
    }
}
