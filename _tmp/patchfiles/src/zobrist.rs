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

//! Zobrist hashing, recomputed on demand from a position's bitboards and
//! flags rather than maintained as an incremental accumulator.
//!
//! The constants themselves are opaque, baked in at compile time from
//! `build.rs`'s output via `transmute(*include_bytes!(...))`.

use std::mem::transmute;

use crate::{
    board::Board,
    defs::{PieceType, Side, Square},
};

/// One 64-bit constant per (side, piece kind, square), one per
/// castling-rights value, one per en-passant file, and one for "Black to
/// move".
///
/// Layout must match `build.rs`'s `ZobristConstants` exactly.
#[repr(C)]
struct ZobristConstants {
    /// `pieces[side][piece_kind][square]`.
    pieces: [[[u64; 64]; 6]; 2],
    /// Indexed by the 4-bit castling-rights mask.
    castling_rights: [u64; 16],
    /// Indexed by file, 0..8.
    en_passant_file: [u64; 8],
    /// XORed in when Black is to move.
    black_to_move: u64,
}

// SAFETY: the bytes are a build artifact generated by this crate's own
// `build.rs` from the same `ZobristConstants` layout, entirely `u64`s with no
// invalid bit patterns.
static CONSTANTS: ZobristConstants =
    unsafe { transmute(*include_bytes!(concat!(env!("OUT_DIR"), "/zobrist.bin"))) };

/// Computes the Zobrist hash of `board`, from scratch.
pub fn hash(board: &Board) -> u64 {
    let mut key = 0_u64;

    for side in [Side::WHITE, Side::BLACK] {
        for piece_type_index in 0..PieceType::TOTAL {
            let piece_type = PieceType(piece_type_index as u8);
            for square in board.piece_bb(side, piece_type) {
                key ^= piece_constant(side, piece_type, square);
            }
        }
    }

    key ^= CONSTANTS.castling_rights[board.castling_rights().to_u8() as usize];

    if let Some(file) = board.en_passant_file() {
        key ^= CONSTANTS.en_passant_file[file.0 as usize];
    }

    if board.side_to_move() == Side::BLACK {
        key ^= CONSTANTS.black_to_move;
    }

    key
}

/// The constant for `side`'s `piece_type` standing on `square`.
fn piece_constant(side: Side, piece_type: PieceType, square: Square) -> u64 {
    CONSTANTS.pieces[side.to_index()][piece_type.to_index()][square.to_index()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::STARTPOS;

    #[test]
    fn startpos_hash_is_deterministic() {
        let board: Board = STARTPOS.parse().expect("valid FEN");
        assert_eq!(hash(&board), hash(&board));
    }

    #[test]
    fn different_positions_hash_differently() {
        let startpos: Board = STARTPOS.parse().expect("valid FEN");
        let after_e4: Board = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
            .parse()
            .expect("valid FEN");
        assert_ne!(hash(&startpos), hash(&after_e4));
    }

    #[test]
    fn side_to_move_changes_the_hash() {
        let white_to_move: Board = "4k3/8/8/8/8/8/8/4K3 w - - 0 1".parse().expect("valid FEN");
        let black_to_move: Board = "4k3/8/8/8/8/8/8/4K3 b - - 0 1".parse().expect("valid FEN");
        assert_ne!(hash(&white_to_move), hash(&black_to_move));
    }
}

