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

//! Legal-move generation.
//!
//! Pin detection, the enemy attack map, check response, and the en-passant
//! discovered-check edge case are all expressed as ray casts over the
//! `stop`/`block` primitive in `bitboard.rs`. Rather than the many small
//! closures a generator like this is often written with, state is held on a
//! single [`Generator`] so helpers can be plain methods.

use crate::{
    bitboard::Bitboard,
    board::Board,
    defs::{Direction, File, PieceType, Rank, Side, Square},
    movelist::MoveList,
    moves::{CastleSide, Capture, Move, Promotion},
};

/// The four orthogonal ray directions.
const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];
/// The four diagonal ray directions.
const DIAGONAL_DIRECTIONS: [Direction; 4] = [Direction::NE, Direction::NW, Direction::SE, Direction::SW];

/// The outcome of a position once its legal moves have been generated.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum GameStatus {
    /// The game continues.
    InProgress,
    /// The side to move has no legal moves and is not in check.
    Stalemate,
    /// The side to move has no legal moves and is in check.
    Checkmate,
    /// Fifty half-moves have passed since the last pawn move or capture.
    FiftyMoveDraw,
}

impl GameStatus {
    /// Returns `true` if the game is over (no further moves should be
    /// searched or played) under this status.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Generates the legal moves available to the side to move in a position.
struct Generator<'board> {
    /// The position being generated for.
    board: &'board Board,
    /// The side to move.
    side: Side,
    /// `side`'s pieces.
    own: Bitboard,
    /// The opponent's pieces.
    enemies: Bitboard,
    /// Every occupied square.
    occupied: Bitboard,
    /// Every unoccupied square.
    empty: Bitboard,
    /// Enemy bishops and queens.
    diag_sliders_enemy: Bitboard,
    /// Enemy rooks and queens.
    orth_sliders_enemy: Bitboard,
    /// `side`'s king's square.
    king_square: Square,
    /// `pins[from.to_index()]` is the set of squares the piece on `from` may
    /// move to, if it is pinned; [`Bitboard::ALL`] if it is not.
    pins: [Bitboard; Square::TOTAL],
    /// The squares a non-king piece may move to in order to resolve check;
    /// [`Bitboard::ALL`] when not in check.
    permitted_moves: Bitboard,
    /// The union of every square an enemy piece attacks.
    enemy_attacks: Bitboard,
    /// `true` if the en-passant target pawn is the sole piece checking the
    /// king, in which case capturing it en passant is always legal.
    en_passant_pawn_is_only_checker: bool,
    /// The moves generated so far.
    moves: MoveList,
}

/// The squares a pawn of `side` standing on `square` attacks.
fn pawn_attacks(side: Side, square: Square) -> Bitboard {
    if side == Side::WHITE {
        Bitboard::pawn_attacks::<true>(square)
    } else {
        Bitboard::pawn_attacks::<false>(square)
    }
}

impl<'board> Generator<'board> {
    /// Sets up a generator for the side to move in `board`.
    fn new(board: &'board Board) -> Self {
        let side = board.side_to_move();
        let own = board.side_bb(side);
        let enemies = board.side_bb(side.flip());
        let occupied = own | enemies;

        Self {
            board,
            side,
            own,
            enemies,
            occupied,
            empty: !occupied,
            diag_sliders_enemy: board.piece_bb(side.flip(), PieceType::BISHOP)
                | board.piece_bb(side.flip(), PieceType::QUEEN),
            orth_sliders_enemy: board.piece_bb(side.flip(), PieceType::ROOK)
                | board.piece_bb(side.flip(), PieceType::QUEEN),
            king_square: board.king_square(side),
            pins: [Bitboard::ALL; Square::TOTAL],
            permitted_moves: Bitboard::ALL,
            enemy_attacks: Bitboard::EMPTY,
            en_passant_pawn_is_only_checker: false,
            moves: MoveList::new(),
        }
    }

    /// The bitboard of `side`'s pieces of kind `piece_type`.
    fn own_bb(&self, piece_type: PieceType) -> Bitboard {
        self.board.piece_bb(self.side, piece_type)
    }

    /// The bitboard of the enemy's pieces of kind `piece_type`.
    fn enemy_bb(&self, piece_type: PieceType) -> Bitboard {
        self.board.piece_bb(self.side.flip(), piece_type)
    }

    /// Every enemy piece bitboard paired with the [`Capture`] kind capturing
    /// it produces. The enemy king is never a capture target.
    fn enemy_capture_targets(&self) -> [(Bitboard, Capture); 5] {
        [
            (self.enemy_bb(PieceType::PAWN), Capture::PAWN),
            (self.enemy_bb(PieceType::ROOK), Capture::ROOK),
            (self.enemy_bb(PieceType::KNIGHT), Capture::KNIGHT),
            (self.enemy_bb(PieceType::BISHOP), Capture::BISHOP),
            (self.enemy_bb(PieceType::QUEEN), Capture::QUEEN),
        ]
    }

    /// For each of the 8 ray directions, casts two rays from the king to
    /// find pieces pinned against it.
    fn detect_pins(&mut self) {
        let own_without_king = self.own & !Bitboard::from(self.king_square);

        for &direction in ORTHOGONAL_DIRECTIONS.iter() {
            self.detect_pin_in_direction(direction, own_without_king, self.orth_sliders_enemy);
        }
        for &direction in DIAGONAL_DIRECTIONS.iter() {
            self.detect_pin_in_direction(direction, own_without_king, self.diag_sliders_enemy);
        }
    }

    /// Checks for a piece pinned against the king along `direction`.
    fn detect_pin_in_direction(
        &mut self,
        direction: Direction,
        own_without_king: Bitboard,
        sliding_enemies: Bitboard,
    ) {
        let first_ray = Bitboard::ray(self.king_square, direction, own_without_king, self.enemies);
        let candidate = first_ray & self.own;
        if candidate.is_empty() {
            return;
        }
        let pinned_square = candidate.into_iter().next().expect("candidate is non-empty");

        let second_ray = Bitboard::ray(pinned_square, direction, self.enemies, self.own);
        if (second_ray & sliding_enemies).is_empty() {
            return;
        }

        self.pins[pinned_square.to_index()] = first_ray | second_ray;
    }

    /// Builds the enemy attack map, detects non-sliding checks along the
    /// way, and records whether the king is in check.
    fn compute_enemy_attacks(&mut self) {
        let en_passant_pawn = self.en_passant_target_pawn();

        for square in self.enemy_bb(PieceType::PAWN) & !en_passant_pawn {
            let attacks = pawn_attacks(self.side.flip(), square);
            self.note_non_sliding_attacker(attacks, square);
        }

        for square in self.enemy_bb(PieceType::ROOK) {
            self.enemy_attacks |= self.enemy_slider_attacks(square, false);
        }
        for square in self.enemy_bb(PieceType::BISHOP) {
            self.enemy_attacks |= self.enemy_slider_attacks(square, true);
        }
        for square in self.enemy_bb(PieceType::QUEEN) {
            self.enemy_attacks |= self.enemy_slider_attacks(square, false) | self.enemy_slider_attacks(square, true);
        }

        for square in self.enemy_bb(PieceType::KNIGHT) {
            let attacks = Bitboard::knight_attacks(square);
            self.note_non_sliding_attacker(attacks, square);
        }

        let enemy_king_square = self.board.king_square(self.side.flip());
        self.enemy_attacks |= Bitboard::king_attacks(enemy_king_square);

        if let Some(ep_square) = en_passant_pawn.into_iter().next() {
            let attacks = pawn_attacks(self.side.flip(), ep_square);
            let already_in_check = self.enemy_attacks.overlaps(Bitboard::from(self.king_square));
            self.en_passant_pawn_is_only_checker =
                !already_in_check && attacks.overlaps(Bitboard::from(self.king_square));
            self.note_non_sliding_attacker(attacks, ep_square);
        }
    }

    /// The bitboard of the single enemy pawn capturable en passant this
    /// move, or the empty bitboard if en passant is unavailable.
    fn en_passant_target_pawn(&self) -> Bitboard {
        match self.board.en_passant_file() {
            Some(file) => {
                let rank = if self.side == Side::WHITE { Rank::RANK5 } else { Rank::RANK4 };
                Bitboard::from(Square::from_pos(rank, file))
            }
            None => Bitboard::EMPTY,
        }
    }

    /// Ray-casts `square`'s attacks as a slider, treating our own king as
    /// transparent so it does not shield squares behind it.
    fn enemy_slider_attacks(&self, square: Square, diagonal: bool) -> Bitboard {
        let blockers = self.occupied & !Bitboard::from(self.king_square) & !Bitboard::from(square);
        if diagonal {
            Bitboard::diagonal_rays(square, blockers, blockers)
        } else {
            Bitboard::orthogonal_rays(square, blockers, blockers)
        }
    }

    /// If `attacks` (from the non-sliding attacker on `attacker_square`)
    /// covers our king, restricts `permitted_moves` to a capture of that
    /// attacker and accumulates the attack into the enemy attack map.
    fn note_non_sliding_attacker(&mut self, attacks: Bitboard, attacker_square: Square) {
        if attacks.overlaps(Bitboard::from(self.king_square)) {
            self.permitted_moves &= Bitboard::from(attacker_square);
        }
        self.enemy_attacks |= attacks;
    }

    /// For each sliding direction from the king, checks whether an enemy
    /// slider of the matching kind is giving check, and if so restricts
    /// `permitted_moves` to the ray between the king and that attacker
    /// (inclusive).
    fn detect_sliding_checks(&mut self) {
        for &direction in ORTHOGONAL_DIRECTIONS.iter() {
            self.detect_sliding_check_in_direction(direction, self.orth_sliders_enemy);
        }
        for &direction in DIAGONAL_DIRECTIONS.iter() {
            self.detect_sliding_check_in_direction(direction, self.diag_sliders_enemy);
        }
    }

    /// Checks for a sliding attacker giving check along `direction`.
    fn detect_sliding_check_in_direction(&mut self, direction: Direction, sliding_enemies: Bitboard) {
        let block = self.occupied & !Bitboard::from(self.king_square) & !sliding_enemies;
        let ray = Bitboard::ray(self.king_square, direction, sliding_enemies, block);
        if !(ray & sliding_enemies).is_empty() {
            self.permitted_moves &= ray;
        }
    }

    /// Returns `true` if `capturing_pawn` capturing en passant would
    /// illegally expose our king to a rank/diagonal attack. Each candidate
    /// capturing pawn must be tested on its own: removing both of the rank's
    /// candidate pawns from occupancy at once (when two pawns flank the
    /// captured pawn) would treat the other, non-moving pawn as gone too,
    /// falsely reporting a discovered check it would actually still block.
    fn en_passant_puts_king_in_check(&self, capturing_pawn: Square) -> bool {
        if self.board.en_passant_file().is_none() {
            return false;
        }

        let captured_square = self.board.en_passant_square() - crate::board::pawn_forward(self.side);
        let captured_bb = Bitboard::from(captured_square);
        let capturing_bb = Bitboard::from(capturing_pawn);

        let without_both_pawns = self.occupied & !captured_bb & !capturing_bb;
        let king = self.king_square;
        let file_diff = i32::from(captured_square.0 & 7) - i32::from(king.0 & 7);
        let rank_diff = i32::from(captured_square.0 >> 3) - i32::from(king.0 >> 3);
        let is_white = self.side == Side::WHITE;

        let ray = if file_diff == 0 && rank_diff > 0 && !is_white {
            Some((Direction::N, self.orth_sliders_enemy))
        } else if file_diff == 0 && rank_diff < 0 && is_white {
            Some((Direction::S, self.orth_sliders_enemy))
        } else if rank_diff == 0 && file_diff < 0 {
            Some((Direction::E, self.orth_sliders_enemy))
        } else if rank_diff == 0 && file_diff > 0 {
            Some((Direction::W, self.orth_sliders_enemy))
        } else if rank_diff == file_diff && rank_diff > 0 {
            Some((Direction::NW, self.diag_sliders_enemy))
        } else if rank_diff == -file_diff && rank_diff > 0 {
            Some((Direction::NE, self.diag_sliders_enemy))
        } else if rank_diff == file_diff && rank_diff < 0 {
            Some((Direction::SE, self.diag_sliders_enemy))
        } else if rank_diff == -file_diff && rank_diff < 0 {
            Some((Direction::SW, self.diag_sliders_enemy))
        } else {
            None
        };

        match ray {
            Some((direction, sliding_enemies)) => {
                let block = without_both_pawns & !Bitboard::from(king) & !sliding_enemies;
                Bitboard::ray(king, direction, sliding_enemies, block).overlaps(sliding_enemies)
            }
            None => false,
        }
    }

    /// Restricts `cells` to squares the piece on `from` is actually allowed
    /// to move to (pin line and check response), then appends one move per
    /// remaining destination.
    fn add_moves(
        &mut self,
        cells: Bitboard,
        from: Square,
        piece_kind: PieceType,
        promotion: Promotion,
        capture: Capture,
        is_en_passant: bool,
        castle_side: CastleSide,
    ) {
        let mut cells = cells & self.pins[from.to_index()] & self.permitted_moves;
        while !cells.is_empty() {
            let to = cells.pop_next_square();
            self.moves.push(Move::new(
                piece_kind,
                from,
                to,
                promotion,
                capture,
                is_en_passant,
                self.board.castling_rights().to_u8(),
                castle_side,
            ));
        }
    }

    /// Splits `cells` into a quiet destination set and one per enemy piece
    /// kind, appending moves for each.
    fn add_moves_and_captures(&mut self, cells: Bitboard, from: Square, piece_kind: PieceType) {
        self.add_moves(cells & self.empty, from, piece_kind, Promotion::NONE, Capture::NONE, false, CastleSide::NONE);
        for (enemy_bb, capture) in self.enemy_capture_targets() {
            self.add_moves(cells & enemy_bb, from, piece_kind, Promotion::NONE, capture, false, CastleSide::NONE);
        }
    }

    /// Appends pawn moves from `cells`, splitting into four promotion moves
    /// if `from` is on the rank a pawn promotes from.
    fn add_pawn_moves(&mut self, cells: Bitboard, from: Square, capture: Capture, is_en_passant: bool) {
        let promotion_rank = if self.side == Side::WHITE { Rank::RANK7 } else { Rank::RANK2 };
        if Rank::from(from) == promotion_rank {
            for promotion in [Promotion::QUEEN, Promotion::ROOK, Promotion::BISHOP, Promotion::KNIGHT] {
                self.add_moves(cells, from, PieceType::PAWN, promotion, capture, is_en_passant, CastleSide::NONE);
            }
        } else {
            self.add_moves(cells, from, PieceType::PAWN, Promotion::NONE, capture, is_en_passant, CastleSide::NONE);
        }
    }

    /// Generates every pawn move: pushes, captures, promotions, and (when
    /// it would not expose our king to check) the en-passant capture.
    fn generate_pawn_moves(&mut self) {
        let is_white = self.side == Side::WHITE;
        let double_push_rank = if is_white { Rank::RANK4 } else { Rank::RANK5 };

        for from in self.own_bb(PieceType::PAWN) {
            let board_bb = Bitboard::from(from);
            let single = if is_white { board_bb.pawn_push::<true>() } else { board_bb.pawn_push::<false>() };
            let single_empty = single & self.empty;
            let double = if is_white {
                single_empty.pawn_push::<true>()
            } else {
                single_empty.pawn_push::<false>()
            } & self.empty
                & Bitboard::rank_bb(double_push_rank);

            self.add_pawn_moves((single & self.empty) | double, from, Capture::NONE, false);

            let attacks = pawn_attacks(self.side, from);
            for (enemy_bb, capture) in self.enemy_capture_targets() {
                self.add_pawn_moves(attacks & enemy_bb, from, capture, false);
            }

            if self.board.en_passant_file().is_some() {
                let to = self.board.en_passant_square();
                if attacks.overlaps(Bitboard::from(to)) && !self.en_passant_puts_king_in_check(from) {
                    let pin_ok = !(self.pins[from.to_index()] & Bitboard::from(to)).is_empty();
                    let permitted = self.permitted_moves.overlaps(Bitboard::from(to))
                        || self.en_passant_pawn_is_only_checker;
                    if pin_ok && permitted {
                        self.moves.push(Move::new(
                            PieceType::PAWN,
                            from,
                            to,
                            Promotion::NONE,
                            Capture::PAWN,
                            true,
                            self.board.castling_rights().to_u8(),
                            CastleSide::NONE,
                        ));
                    }
                }
            }
        }
    }

    /// Generates rook, bishop, and queen moves.
    fn generate_sliding_moves(&mut self) {
        for from in self.own_bb(PieceType::ROOK) {
            let cells = Bitboard::orthogonal_rays(from, self.enemies, self.own);
            self.add_moves_and_captures(cells, from, PieceType::ROOK);
        }
        for from in self.own_bb(PieceType::BISHOP) {
            let cells = Bitboard::diagonal_rays(from, self.enemies, self.own);
            self.add_moves_and_captures(cells, from, PieceType::BISHOP);
        }
        for from in self.own_bb(PieceType::QUEEN) {
            let cells = Bitboard::orthogonal_rays(from, self.enemies, self.own)
                | Bitboard::diagonal_rays(from, self.enemies, self.own);
            self.add_moves_and_captures(cells, from, PieceType::QUEEN);
        }
    }

    /// Generates knight moves.
    fn generate_knight_moves(&mut self) {
        for from in self.own_bb(PieceType::KNIGHT) {
            let cells = Bitboard::knight_attacks(from);
            self.add_moves_and_captures(cells, from, PieceType::KNIGHT);
        }
    }

    /// Generates king moves (ignoring pins and `permitted_moves`, which
    /// don't apply to the king itself) and castling.
    fn generate_king_moves(&mut self) {
        let cells = Bitboard::king_attacks(self.king_square) & !self.enemy_attacks;

        let mut quiet = cells & self.empty;
        while !quiet.is_empty() {
            let to = quiet.pop_next_square();
            self.push_king_move(to, Capture::NONE);
        }
        for (enemy_bb, capture) in self.enemy_capture_targets() {
            let mut captures = cells & enemy_bb;
            while !captures.is_empty() {
                let to = captures.pop_next_square();
                self.push_king_move(to, capture);
            }
        }

        self.generate_castling();
    }

    /// Appends a single king move, bypassing pin/check restrictions.
    fn push_king_move(&mut self, to: Square, capture: Capture) {
        self.moves.push(Move::new(
            PieceType::KING,
            self.king_square,
            to,
            Promotion::NONE,
            capture,
            false,
            self.board.castling_rights().to_u8(),
            CastleSide::NONE,
        ));
    }

    /// Appends castling moves, if legal.
    fn generate_castling(&mut self) {
        if self.enemy_attacks.overlaps(Bitboard::from(self.king_square)) {
            return;
        }

        let rights = self.board.castling_rights();

        if rights.can_castle_kingside(self.side) {
            let blocked = (self.occupied | self.enemy_attacks) & Bitboard::castling_space(self.side, true);
            if blocked.is_empty() {
                let to = if self.side == Side::WHITE { Square::G1 } else { Square::G8 };
                self.moves.push(Move::new(
                    PieceType::KING,
                    self.king_square,
                    to,
                    Promotion::NONE,
                    Capture::NONE,
                    false,
                    rights.to_u8(),
                    CastleSide::KINGSIDE,
                ));
            }
        }

        if rights.can_castle_queenside(self.side) {
            let occupied_blocked = self.occupied & Bitboard::castling_space(self.side, false);
            let attacked_blocked = self.enemy_attacks & Bitboard::king_castle_path(self.side, false);
            if occupied_blocked.is_empty() && attacked_blocked.is_empty() {
                let to = if self.side == Side::WHITE { Square::C1 } else { Square::C8 };
                self.moves.push(Move::new(
                    PieceType::KING,
                    self.king_square,
                    to,
                    Promotion::NONE,
                    Capture::NONE,
                    false,
                    rights.to_u8(),
                    CastleSide::QUEENSIDE,
                ));
            }
        }
    }
}

/// Generates the full legal move list for the side to move in `board`,
/// together with the resulting game status.
pub fn generate(board: &Board) -> (MoveList, GameStatus) {
    let mut generator = Generator::new(board);

    generator.detect_pins();
    generator.compute_enemy_attacks();
    generator.detect_sliding_checks();

    generator.generate_pawn_moves();
    generator.generate_sliding_moves();
    generator.generate_knight_moves();
    generator.generate_king_moves();

    let in_check = generator.enemy_attacks.overlaps(Bitboard::from(generator.king_square));
    let status = if generator.moves.is_empty() {
        if in_check { GameStatus::Checkmate } else { GameStatus::Stalemate }
    } else if board.quiet_move_counter() == 50 {
        GameStatus::FiftyMoveDraw
    } else {
        GameStatus::InProgress
    };

    (generator.moves, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legal_moves(fen: &str) -> (MoveList, GameStatus) {
        generate(&fen.parse().expect("valid FEN"))
    }

    #[test]
    fn startpos_has_twenty_moves() {
        let (moves, status) = legal_moves(crate::board::STARTPOS);
        assert_eq!(moves.len(), 20);
        assert_eq!(status, GameStatus::InProgress);
    }

    #[test]
    fn promotion_only_position_emits_four_moves() {
        let (moves, status) = legal_moves("8/4P3/8/8/4k3/8/8/4K3 w - - 0 1");
        // Four pawn promotions (e7-e8) plus five king moves (d1, d2, e2, f1, f2).
        assert_eq!(moves.len(), 4 + 5);
        assert_eq!(status, GameStatus::InProgress);
        let promotions: Vec<_> =
            moves.as_slice().iter().filter(|mv| mv.is_from_to(Square::E7, Square::E8)).copied().collect();
        assert_eq!(promotions.len(), 4);
    }

    #[test]
    fn pinned_rook_may_only_move_along_the_pin_line() {
        // The White rook on e4 is pinned to its king by the Black rook on
        // e8; it may only move along the e-file.
        let (moves, _) = legal_moves("k3r3/8/8/8/4R3/8/8/4K3 w - - 0 1");
        let rook_moves: Vec<_> = moves
            .as_slice()
            .iter()
            .filter(|mv| mv.piece_kind() == PieceType::ROOK)
            .copied()
            .collect();
        assert!(!rook_moves.is_empty());
        assert!(rook_moves.iter().all(|mv| File::from(mv.to()) == File::E));
    }

    #[test]
    fn checkmate_is_detected() {
        let (moves, status) = legal_moves("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert!(moves.is_empty());
        assert_eq!(status, GameStatus::Checkmate);
    }

    #[test]
    fn stalemate_is_detected() {
        let (moves, status) = legal_moves("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(moves.is_empty());
        assert_eq!(status, GameStatus::Stalemate);
    }

    #[test]
    fn fifty_move_draw_is_flagged_but_moves_remain() {
        let (moves, status) = legal_moves("8/8/4k3/8/8/4K3/8/8 w - - 50 26");
        assert!(!moves.is_empty());
        assert_eq!(status, GameStatus::FiftyMoveDraw);
    }

    #[test]
    fn en_passant_capture_is_offered_when_available() {
        let (moves, _) = legal_moves("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        assert!(moves.as_slice().iter().any(|mv| mv.is_en_passant() && mv.is_from_to(Square::E5, Square::D6)));
    }

    #[test]
    fn en_passant_discovered_check_is_forbidden() {
        // Capturing d5xe6 en passant would clear rank 5 entirely, exposing
        // the White king on a5 to the Black rook on h5.
        let (moves, _) = legal_moves("4k3/8/8/K2Pp2r/8/8/8/8 w - e6 0 1");
        assert!(!moves.as_slice().iter().any(|mv| mv.is_en_passant()));
    }

    #[test]
    fn en_passant_is_offered_for_each_flanking_pawn_independently() {
        // Either d5xe6 or f5xe6 en passant individually still leaves the
        // other pawn on the rank blocking the rook's check on the king, so
        // both captures are legal even though removing both pawns at once
        // (as if both captured simultaneously) would expose the king.
        let (moves, _) = legal_moves("4k3/8/8/K2PpP1r/8/8/8/8 w - e6 0 1");
        let en_passant_captures: Vec<_> =
            moves.as_slice().iter().filter(|mv| mv.is_en_passant()).collect();
        assert_eq!(en_passant_captures.len(), 2);
        assert!(en_passant_captures.iter().any(|mv| mv.is_from_to(Square::D5, Square::E6)));
        assert!(en_passant_captures.iter().any(|mv| mv.is_from_to(Square::F5, Square::E6)));
    }

    #[test]
    fn castling_through_check_is_forbidden() {
        let (moves, _) = legal_moves("4k3/8/8/8/8/8/5r2/4K2R w K - 0 1");
        assert!(!moves.as_slice().iter().any(|mv| mv.castle_side() == CastleSide::KINGSIDE));
    }

    #[test]
    fn castling_is_offered_when_clear() {
        let (moves, _) = legal_moves("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        let castles: Vec<_> = moves.as_slice().iter().filter(|mv| mv.castle_side() != CastleSide::NONE).collect();
        assert_eq!(castles.len(), 2);
    }
}

