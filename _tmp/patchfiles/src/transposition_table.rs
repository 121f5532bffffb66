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

//! A direct-mapped transposition table.
//!
//! Concurrency is out of scope for this engine (a single search runs on the
//! calling thread), so unlike an engine built to share one table across
//! search threads, this one is plain `&mut self` storage with no atomics and
//! no XOR-corruption detection.

use crate::{evaluation::Eval, moves::Move};

/// How a stored score relates to the window it was found in.
#[derive(Clone, Copy, Eq, PartialEq)]
pub enum Bound {
    /// `score >= beta`: a lower bound on the true value.
    Lower,
    /// `alpha < score < beta`: the true value.
    Exact,
    /// `score <= alpha`: an upper bound on the true value.
    Upper,
}

/// One stored search result.
#[derive(Clone, Copy)]
pub struct TranspositionEntry {
    /// The Zobrist key this entry was stored under.
    key: u64,
    /// The depth the score was searched to.
    depth: i32,
    /// The score, normalised to be mate-distance-from-root rather than
    /// mate-distance-from-this-node (see [`normalise`]).
    score: Eval,
    /// How `score` bounds the position's true value.
    bound: Bound,
    /// The best move found in this position, if any moves were searched.
    best_move: Option<Move>,
}

impl TranspositionEntry {
    /// The depth the score was searched to.
    pub const fn depth(self) -> i32 {
        self.depth
    }

    /// How the stored score bounds the position's true value.
    pub const fn bound(self) -> Bound {
        self.bound
    }

    /// The best move found in this position, if any.
    pub const fn best_move(self) -> Option<Move> {
        self.best_move
    }

    /// The stored score, already denormalised for the ply it was loaded at.
    pub const fn score(self) -> Eval {
        self.score
    }

    /// The stored score, denormalised for use at `ply`.
    fn score_at(self, ply: i32) -> Eval {
        denormalise(self.score, ply)
    }
}

/// A direct-mapped table of `2^SIZE_POWER` entries, indexed by the low bits
/// of the Zobrist key. No replacement policy beyond always-overwrite.
pub struct TranspositionTable {
    /// The backing storage. `None` marks an empty slot.
    entries: Vec<Option<TranspositionEntry>>,
}

/// `2^16` entries is a modest fixed size appropriate for a single-threaded
/// engine with no `setoption Hash` configuration (out of scope, see §6 of
/// the design notes).
const SIZE_POWER: u32 = 16;

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TranspositionTable {
    /// Creates a table of `2^`[`SIZE_POWER`] empty entries.
    pub fn new() -> Self {
        Self { entries: vec![None; 1 << SIZE_POWER] }
    }

    /// Empties every entry.
    pub fn clear(&mut self) {
        self.entries.fill(None);
    }

    /// Returns the entry stored under `key`, if its key matches (a mismatch
    /// means a different position aliased to the same index, which this
    /// table does not detect beyond the key comparison itself).
    pub fn load(&self, key: u64, ply: i32) -> Option<TranspositionEntry> {
        let entry = self.entries[index(key, self.entries.len())]?;
        (entry.key == key).then(|| TranspositionEntry { score: entry.score_at(ply), ..entry })
    }

    /// Stores an entry, unconditionally overwriting whatever was at its
    /// index.
    pub fn store(
        &mut self,
        key: u64,
        depth: i32,
        score: Eval,
        bound: Bound,
        best_move: Option<Move>,
        ply: i32,
    ) {
        let index = index(key, self.entries.len());
        self.entries[index] =
            Some(TranspositionEntry { key, depth, score: normalise(score, ply), bound, best_move });
    }
}

/// Maps a 64-bit key onto `0..len`. `len` is always a power of two, so this
/// is a mask rather than a modulo.
fn index(key: u64, len: usize) -> usize {
    (key as usize) & (len - 1)
}

/// If `score` is a mate score relative to the node it was found at (`ply`
/// away from the root), converts it to be relative to the root instead, so
/// it can be cached and reused from any node.
fn normalise(score: Eval, ply: i32) -> Eval {
    use crate::evaluation::MATE_BOUND;
    if score >= MATE_BOUND {
        score + score_ply_adjustment(ply)
    } else if score <= -MATE_BOUND {
        score - score_ply_adjustment(ply)
    } else {
        score
    }
}

/// The inverse of [`normalise`]: converts a root-relative mate score back
/// into one relative to the node `ply` away from the root.
fn denormalise(score: Eval, ply: i32) -> Eval {
    use crate::evaluation::MATE_BOUND;
    if score >= MATE_BOUND {
        score - score_ply_adjustment(ply)
    } else if score <= -MATE_BOUND {
        score + score_ply_adjustment(ply)
    } else {
        score
    }
}

/// The amount a mate score shifts by per ply of distance from the root.
const fn score_ply_adjustment(ply: i32) -> Eval {
    ply
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::{PieceType, Square};

    fn sample_move() -> Move {
        Move::new(
            PieceType::PAWN,
            Square::from_pos(crate::defs::Rank::RANK2, crate::defs::File::E),
            Square::from_pos(crate::defs::Rank::RANK4, crate::defs::File::E),
            crate::moves::Promotion::NONE,
            crate::moves::Capture::NONE,
            false,
            0,
            crate::moves::CastleSide::NONE,
        )
    }

    #[test]
    fn stored_entry_is_found_again() {
        let mut tt = TranspositionTable::new();
        let mv = sample_move();
        tt.store(0x1234, 4, 55, Bound::Exact, Some(mv), 0);
        let hit = tt.load(0x1234, 0).expect("entry was just stored");
        assert_eq!(hit.depth(), 4);
        assert_eq!(hit.best_move(), Some(mv));
    }

    #[test]
    fn key_mismatch_is_not_returned() {
        let mut tt = TranspositionTable::new();
        tt.store(0x1234, 4, 55, Bound::Exact, None, 0);
        // Force a different key that aliases to the same index.
        let len = 1_u64 << SIZE_POWER;
        assert!(tt.load(0x1234 + len, 0).is_none());
    }

    #[test]
    fn mate_score_round_trips_through_normalisation() {
        use crate::evaluation::MATE_BASE;
        let mut tt = TranspositionTable::new();
        let mate_score = MATE_BASE + 3;
        tt.store(0x5678, 2, mate_score, Bound::Exact, None, 5);
        let hit = tt.load(0x5678, 5).expect("entry was just stored");
        assert_eq!(hit.score, mate_score);
    }
}


