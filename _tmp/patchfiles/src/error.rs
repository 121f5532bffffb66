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

//! Errors produced while parsing external input (FEN, algebraic moves, CLI
//! commands).

use std::fmt::{self, Display, Formatter};

/// An error parsing a piece of external input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A token was present but malformed (e.g. a rank digit out of `1..=8`).
    ErroneousToken,
    /// A token that should have been present was missing.
    ExpectedToken,
    /// A token was present but not valid in this context (e.g. a move that
    /// is not pseudo-legal).
    InvalidToken,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ErroneousToken => "erroneous token",
            Self::ExpectedToken => "expected token, found none",
            Self::InvalidToken => "invalid token",
        })
    }
}

impl std::error::Error for ParseError {}


