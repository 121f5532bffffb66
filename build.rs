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

//! Generates the opaque Zobrist constant table as a build artifact.
//!
//! The constants are deterministic (seeded splitmix64), so this only needs to
//! re-run if the layout of `zobrist::ZobristConstants` changes. This plays the
//! same role as the source project's own `zobrist_generate.go`: a one-shot
//! generator that is not part of the crate's runtime surface.

use std::{
    env, fs, io,
    mem::{size_of, transmute},
    path::Path,
};

/// One 64-bit constant per (side, piece kind, square), one per castling-rights
/// value, one per en passant file, and one for "black to move".
///
/// Layout must match `zobrist::ZobristConstants` exactly.
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

/// A minimal splitmix64 generator, used only to bake deterministic constants
/// into a build artifact.
struct SplitMix64 {
    /// The generator's internal state.
    state: u64,
}

impl SplitMix64 {
    /// Creates a generator seeded with `seed`.
    const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Returns the next pseudo-random `u64`.
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

fn main() -> io::Result<()> {
    let out_dir = env::var("OUT_DIR").expect("cargo always sets OUT_DIR");
    create_zobrist_constants(&out_dir)?;

    println!("cargo::rerun-if-changed=build.rs");

    Ok(())
}

/// Creates the file `$OUT_DIR/zobrist.bin`, laid out as [`ZobristConstants`].
fn create_zobrist_constants(out_dir: &str) -> io::Result<()> {
    const SIZE: usize = size_of::<ZobristConstants>();
    let mut rng = SplitMix64::new(0x5EED_C0DE_1234_5678);

    let mut pieces = [[[0_u64; 64]; 6]; 2];
    for side in &mut pieces {
        for piece_kind in side {
            for square in piece_kind {
                *square = rng.next_u64();
            }
        }
    }

    let mut castling_rights = [0_u64; 16];
    for value in &mut castling_rights {
        *value = rng.next_u64();
    }

    let mut en_passant_file = [0_u64; 8];
    for value in &mut en_passant_file {
        *value = rng.next_u64();
    }

    let black_to_move = rng.next_u64();

    let constants = ZobristConstants {
        pieces,
        castling_rights,
        en_passant_file,
        black_to_move,
    };

    // SAFETY: `ZobristConstants` is `repr(C)` and made up entirely of `u64`s,
    // which have no invalid bit patterns.
    let bytes = unsafe { transmute::<ZobristConstants, [u8; SIZE]>(constants) };
    fs::write(Path::new(out_dir).join("zobrist.bin"), bytes)
}
