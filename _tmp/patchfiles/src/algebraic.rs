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

//! Parses user-facing coordinate move input: `<from><to>` or
//! `<from><to><promotion>`, e.g. `e2e4` or `e7e8q`.

use crate::{
    defs::{File, Rank, Square},
    error::ParseError,
};

/// A parsed move in coordinate notation, not yet checked for legality.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct AlgebraicMove {
    /// The square moved from.
    pub from: Square,
    /// The square moved to.
    pub to: Square,
    /// The promotion letter (`q`, `r`, `b`, or `n`, always lowercase), if
    /// one was given.
    pub promotion: Option<char>,
}

/// Parses `input` as a four- or five-character coordinate move.
///
/// # Errors
///
/// Returns [`ParseError::ExpectedToken`] if `input` is too short,
/// [`ParseError::ErroneousToken`] if a square's rank/file is out of range or
/// there is trailing garbage after the promotion letter, and
/// [`ParseError::InvalidToken`] if the fifth character is not a valid
/// promotion letter.
pub fn parse(input: &str) -> Result<AlgebraicMove, ParseError> {
    let mut chars = input.chars();

    let from_file = File::try_from(chars.next().ok_or(ParseError::ExpectedToken)?)?;
    let from_rank = Rank::try_from(chars.next().ok_or(ParseError::ExpectedToken)?)?;
    let to_file = File::try_from(chars.next().ok_or(ParseError::ExpectedToken)?)?;
    let to_rank = Rank::try_from(chars.next().ok_or(ParseError::ExpectedToken)?)?;

    let promotion = match chars.next() {
        None => None,
        Some(letter) => {
            if chars.next().is_some() {
                return Err(ParseError::ErroneousToken);
            }
            match letter.to_ascii_lowercase() {
                letter @ ('q' | 'r' | 'b' | 'n') => Some(letter),
                _ => return Err(ParseError::InvalidToken),
            }
        }
    };

    Ok(AlgebraicMove {
        from: Square::from_pos(from_rank, from_file),
        to: Square::from_pos(to_rank, to_file),
        promotion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_plain_move() {
        let mv = parse("e2e4").expect("well-formed input");
        assert_eq!(mv.from, Square::from_pos(Rank::RANK2, File::E));
        assert_eq!(mv.to, Square::from_pos(Rank::RANK4, File::E));
        assert_eq!(mv.promotion, None);
    }

    #[test]
    fn parses_a_promotion() {
        let mv = parse("e7e8q").expect("well-formed input");
        assert_eq!(mv.promotion, Some('q'));
    }

    #[test]
    fn uppercase_promotion_letter_is_accepted() {
        let mv = parse("e7e8Q").expect("well-formed input");
        assert_eq!(mv.promotion, Some('q'));
    }

    #[test]
    fn rejects_too_short_input() {
        assert_eq!(parse("e2e"), Err(ParseError::ExpectedToken));
    }

    #[test]
    fn rejects_out_of_range_file() {
        assert_eq!(parse("i2e4"), Err(ParseError::ErroneousToken));
    }

    #[test]
    fn rejects_invalid_promotion_letter() {
        assert_eq!(parse("e7e8k"), Err(ParseError::InvalidToken));
    }

    #[test]
    fn rejects_trailing_garbage() {
        assert_eq!(parse("e7e8qq"), Err(ParseError::ErroneousToken));
    }
}


