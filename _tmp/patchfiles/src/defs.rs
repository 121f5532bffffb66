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

//! Definitions and enumerations shared across the crate.
//!
//! Square numbering follows the source project's own mirrored-file mapping:
//! `square = rank * 8 + file_offset`, where `file_offset = 7 - file` (file
//! 'a' has offset 7, file 'h' has offset 0). Rank 0 is White's back rank.
//! This is why [`Direction::E`] is `-1` rather than the `+1` a conventional
//! a-file-is-zero mapping would use.

use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, Sub},
    str::FromStr,
};

use crate::error::ParseError;

/// A cardinal direction, expressed as a square delta.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, Copy, PartialEq)]
pub struct Direction(pub i8);

/// A file: file 'a' = 0 to file 'h' = 7, in conventional (not internal)
/// order.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct File(pub u8);

/// A rank: rank 1 = 0 to rank 8 = 7.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Rank(pub u8);

/// A side to move, or no side.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Side(pub u8);

/// A type of piece, irrespective of colour.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct PieceType(pub u8);

/// A square, 0..64, with the mirrored-file mapping described in the module
/// docs. `Square::NONE` represents the absence of a square (e.g. no
/// en-passant target).
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd)]
pub struct Square(pub u8);

/// A piece: a [`Side`] and a [`PieceType`] combined into one index, `0..12`.
/// `Piece::NONE` represents an empty square.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Piece(pub u8);

/// Characters for each piece type, White uppercase is handled by the caller;
/// this table holds the lowercase (Black) form, as `char::from(PieceType)`
/// always returns the Black letter — see [`Piece`] conversions in `board.rs`
/// for the full White/Black split.
static PIECE_TYPE_CHARS: [char; PieceType::TOTAL] = ['p', 'r', 'n', 'b', 'q', 'k'];

#[allow(dead_code, clippy::missing_docs_in_private_items)]
impl Direction {
    pub const N: Self = Self(8);
    pub const NE: Self = Self(7);
    pub const E: Self = Self(-1);
    pub const SE: Self = Self(-9);
    pub const S: Self = Self(-8);
    pub const SW: Self = Self(-7);
    pub const W: Self = Self(1);
    pub const NW: Self = Self(9);
}

#[allow(dead_code, clippy::missing_docs_in_private_items)]
impl File {
    pub const A: Self = Self(0);
    pub const B: Self = Self(1);
    pub const C: Self = Self(2);
    pub const D: Self = Self(3);
    pub const E: Self = Self(4);
    pub const F: Self = Self(5);
    pub const G: Self = Self(6);
    pub const H: Self = Self(7);
    pub const TOTAL: usize = 8;

    /// The internal offset used to compute a square: `7 - self`.
    const fn offset(self) -> u8 {
        7 - self.0
    }
}

#[allow(dead_code, clippy::missing_docs_in_private_items)]
impl Rank {
    pub const RANK1: Self = Self(0);
    pub const RANK2: Self = Self(1);
    pub const RANK3: Self = Self(2);
    pub const RANK4: Self = Self(3);
    pub const RANK5: Self = Self(4);
    pub const RANK6: Self = Self(5);
    pub const RANK7: Self = Self(6);
    pub const RANK8: Self = Self(7);
    pub const TOTAL: usize = 8;
}

#[allow(dead_code, clippy::missing_docs_in_private_items)]
impl Side {
    pub const BLACK: Self = Self(0);
    pub const WHITE: Self = Self(1);
    pub const TOTAL: usize = 2;
    pub const NONE: Self = Self(2);
}

#[allow(dead_code, clippy::missing_docs_in_private_items)]
impl PieceType {
    pub const PAWN: Self = Self(0);
    pub const ROOK: Self = Self(1);
    pub const KNIGHT: Self = Self(2);
    pub const BISHOP: Self = Self(3);
    pub const QUEEN: Self = Self(4);
    pub const KING: Self = Self(5);
    pub const TOTAL: usize = 6;
    pub const NONE: Self = Self(6);
}

#[allow(dead_code, clippy::missing_docs_in_private_items)]
impl Square {
    pub const TOTAL: usize = 64;
    pub const NONE: Self = Self(64);

    pub const A1: Self = Self::from_pos(Rank::RANK1, File::A);
    pub const C1: Self = Self::from_pos(Rank::RANK1, File::C);
    pub const D1: Self = Self::from_pos(Rank::RANK1, File::D);
    pub const E1: Self = Self::from_pos(Rank::RANK1, File::E);
    pub const F1: Self = Self::from_pos(Rank::RANK1, File::F);
    pub const G1: Self = Self::from_pos(Rank::RANK1, File::G);
    pub const H1: Self = Self::from_pos(Rank::RANK1, File::H);
    pub const A8: Self = Self::from_pos(Rank::RANK8, File::A);
    pub const C8: Self = Self::from_pos(Rank::RANK8, File::C);
    pub const D8: Self = Self::from_pos(Rank::RANK8, File::D);
    pub const E8: Self = Self::from_pos(Rank::RANK8, File::E);
    pub const F8: Self = Self::from_pos(Rank::RANK8, File::F);
    pub const G8: Self = Self::from_pos(Rank::RANK8, File::G);
    pub const H8: Self = Self::from_pos(Rank::RANK8, File::H);
}

impl From<File> for char {
    /// Converts a file into its letter: 'a' to 'h'.
    fn from(file: File) -> Self {
        (b'a' + file.0) as Self
    }
}

impl From<Rank> for char {
    /// Converts a rank into its digit: '1' to '8'.
    fn from(rank: Rank) -> Self {
        (b'1' + rank.0) as Self
    }
}

impl From<Side> for char {
    /// Converts a side into `'w'` or `'b'`. Undefined for [`Side::NONE`].
    fn from(side: Side) -> Self {
        if side == Side::WHITE {
            'w'
        } else {
            'b'
        }
    }
}

impl From<PieceType> for char {
    /// Converts a piece type into its (lowercase) letter.
    fn from(piece_type: PieceType) -> Self {
        PIECE_TYPE_CHARS[piece_type.to_index()]
    }
}

impl TryFrom<char> for PieceType {
    type Error = ParseError;

    /// Converts a FEN piece letter (either case) into a [`PieceType`].
    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Ok(match letter.to_ascii_lowercase() {
            'p' => Self::PAWN,
            'r' => Self::ROOK,
            'n' => Self::KNIGHT,
            'b' => Self::BISHOP,
            'q' => Self::QUEEN,
            'k' => Self::KING,
            _ => return Err(ParseError::InvalidToken),
        })
    }
}

impl TryFrom<char> for File {
    type Error = ParseError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        match letter {
            'a'..='h' => Ok(Self(letter as u8 - b'a')),
            _ => Err(ParseError::ErroneousToken),
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = ParseError;

    fn try_from(digit: char) -> Result<Self, Self::Error> {
        match digit {
            '1'..='8' => Ok(Self(digit as u8 - b'1')),
            _ => Err(ParseError::ErroneousToken),
        }
    }
}

impl From<Square> for File {
    /// Recovers the (conventional) file of a square.
    fn from(square: Square) -> Self {
        Self(7 - (square.0 & 7))
    }
}

impl From<Square> for Rank {
    fn from(square: Square) -> Self {
        Self(square.0 >> 3)
    }
}

impl Add<Direction> for Square {
    type Output = Self;

    fn add(self, rhs: Direction) -> Self::Output {
        Self(self.0.wrapping_add_signed(rhs.0))
    }
}

impl Sub<Direction> for Square {
    type Output = Self;

    fn sub(self, rhs: Direction) -> Self::Output {
        Self(self.0.wrapping_add_signed(-rhs.0))
    }
}

impl Display for Square {
    /// Converts a square into algebraic notation (e.g. "e4"), or "-" for
    /// [`Square::NONE`].
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if *self == Self::NONE {
            f.write_str("-")
        } else {
            write!(f, "{}{}", char::from(File::from(*self)), char::from(Rank::from(*self)))
        }
    }
}

impl FromStr for Square {
    type Err = ParseError;

    /// Parses algebraic notation (e.g. "e4") into a [`Square`]. Parses "-"
    /// into [`Square::NONE`].
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if string == "-" {
            return Ok(Self::NONE);
        }

        let mut chars = string.chars();
        let file = File::try_from(chars.next().ok_or(ParseError::ExpectedToken)?)?;
        let rank = Rank::try_from(chars.next().ok_or(ParseError::ExpectedToken)?)?;
        if chars.next().is_some() {
            return Err(ParseError::ErroneousToken);
        }

        Ok(Self::from_pos(rank, file))
    }
}

impl Side {
    /// Flips White to Black or vice versa. Undefined for [`Side::NONE`].
    pub const fn flip(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Converts the side to a usize for table indexing.
    pub const fn to_index(self) -> usize {
        self.0 as usize
    }
}

impl PieceType {
    /// Converts the piece type to a usize for table indexing.
    pub const fn to_index(self) -> usize {
        self.0 as usize
    }
}

impl Square {
    /// Converts a rank and (conventional) file into a [`Square`], using the
    /// mirrored-file mapping: `square = rank * 8 + (7 - file)`.
    pub const fn from_pos(rank: Rank, file: File) -> Self {
        Self(rank.0 * 8 + file.offset())
    }

    /// Converts the square to a usize for table indexing.
    pub const fn to_index(self) -> usize {
        self.0 as usize
    }
}

#[allow(dead_code)]
impl Piece {
    pub const NONE: Self = Self(12);

    /// Combines a side and piece type into a [`Piece`].
    pub const fn new(side: Side, piece_type: PieceType) -> Self {
        Self(side.0 * PieceType::TOTAL as u8 + piece_type.0)
    }

    /// The piece's side. Undefined for [`Self::NONE`].
    pub const fn side(self) -> Side {
        Side(self.0 / PieceType::TOTAL as u8)
    }

    /// The piece's type. Undefined for [`Self::NONE`].
    pub const fn piece_type(self) -> PieceType {
        PieceType(self.0 % PieceType::TOTAL as u8)
    }

    /// Converts the piece to a usize for table indexing.
    pub const fn to_index(self) -> usize {
        self.0 as usize
    }
}

impl From<Piece> for char {
    /// Converts a piece into its FEN letter: uppercase for White, lowercase
    /// for Black.
    fn from(piece: Piece) -> Self {
        let letter = char::from(piece.piece_type());
        if piece.side() == Side::WHITE {
            letter.to_ascii_uppercase()
        } else {
            letter
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = ParseError;

    /// Converts a FEN piece letter into a [`Piece`]: uppercase is White,
    /// lowercase is Black.
    fn try_from(letter: char) -> Result<Self, Self::Error> {
        let side = if letter.is_ascii_uppercase() { Side::WHITE } else { Side::BLACK };
        Ok(Self::new(side, PieceType::try_from(letter)?))
    }
}


