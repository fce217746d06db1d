//! Human-readable notation for squares and wall slots.
//!
//! A square is written as a column letter followed by a row, e.g. `"e5"`.
//! Columns start at `a`, rows at `1`, and the row `x` stands for 10 so that
//! every token stays one character per coordinate. A wall slot is written as
//! the square it is attached to plus a suffix: `v` selects the slot below the
//! square, `>` the slot to its right.
//!
//! ```
//! # use wallwars::Position;
//! let wall: Position = "c3v".parse().unwrap();
//! assert_eq!(wall, Position::new(5, 4));
//! assert_eq!(wall.to_notation().unwrap(), "c3v");
//! ```

use std::str::FromStr;

use crate::{CellKind, InvalidNotation, NotationErrorReason, Position, UnnotatablePosition};

/// Number of columns the alphabet covers.
const MAX_COLUMNS: usize = 26;
/// Rows `1`-`9` and `x`.
const MAX_ROWS: usize = 10;

/// Decodes a single token, e.g. `"e5"`, `"e5v"` or `"jx>"`, into its doubled-grid position.
///
/// The column letter is case-insensitive. Pillars can't be written, so the
/// result is always a ground or wall cell. Whether it lies on a particular
/// board is up to the caller.
pub fn decode_action(token: &str) -> Result<Position, InvalidNotation> {
    let err = |reason| InvalidNotation {
        token: String::from(token),
        reason,
    };

    let mut chars = token.chars();
    let (Some(col_char), Some(row_char)) = (chars.next(), chars.next()) else {
        return Err(err(NotationErrorReason::WrongLength {
            len: token.chars().count(),
        }));
    };
    let suffix = chars.next();
    if chars.next().is_some() {
        return Err(err(NotationErrorReason::WrongLength {
            len: token.chars().count(),
        }));
    }

    if !col_char.is_ascii_alphabetic() {
        return Err(err(NotationErrorReason::InvalidColumn(col_char)));
    }
    let mut col = 2 * (col_char.to_ascii_lowercase() as usize - 'a' as usize);

    let row_num = match row_char {
        '1'..='9' => row_char as usize - '0' as usize,
        'x' | 'X' => 10,
        _ => return Err(err(NotationErrorReason::InvalidRow(row_char))),
    };
    let mut row = 2 * (row_num - 1);

    match suffix {
        None => {}
        Some('v' | 'V') => row += 1,
        Some('>') => col += 1,
        Some(c) => return Err(err(NotationErrorReason::InvalidSuffix(c))),
    }

    Ok(Position { row, col })
}

impl FromStr for Position {
    type Err = InvalidNotation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_action(s)
    }
}

impl Position {
    /// The shortest token that decodes back to this position, in lowercase.
    pub fn to_notation(&self) -> Result<String, UnnotatablePosition> {
        let suffix = match self.cell_kind() {
            CellKind::Ground => None,
            CellKind::Wall if self.row % 2 == 1 => Some('v'),
            CellKind::Wall => Some('>'),
            CellKind::Pillar => return Err(UnnotatablePosition::Pillar(*self)),
        };

        // Integer division drops the suffix offset.
        let (square_row, square_col) = (self.row / 2, self.col / 2);
        if square_row >= MAX_ROWS || square_col >= MAX_COLUMNS {
            return Err(UnnotatablePosition::OutOfRange(*self));
        }

        let mut token = String::with_capacity(3);
        token.push((b'a' + square_col as u8) as char);
        token.push(match square_row {
            9 => 'x',
            _ => (b'1' + square_row as u8) as char,
        });
        if let Some(suffix) = suffix {
            token.push(suffix);
        }
        Ok(token)
    }
}

/// Shorthand for decoding a position from a notation literal.
///
/// ```
/// # use wallwars::{pos, Position};
/// assert_eq!(pos!("e5"), Position::new(8, 8));
/// ```
#[macro_export]
macro_rules! pos {
    ($token:literal) => {
        <$crate::Position as std::str::FromStr>::from_str($token)
            .expect("Invalid notation given to pos! macro")
    };
}
#[allow(unused_imports)]
pub(crate) use pos;

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::NotatablePosition;
    use crate::cell_kind;

    quickcheck! {
        fn encode_then_decode_is_identity(input: NotatablePosition) -> bool {
            let token = input.0.to_notation().unwrap();
            decode_action(&token) == Ok(input.0)
        }

        fn decoded_tokens_are_never_pillars(input: NotatablePosition) -> bool {
            let token = input.0.to_notation().unwrap();
            cell_kind(decode_action(&token).unwrap()) != CellKind::Pillar
        }
    }

    #[test]
    fn decode_ground() {
        assert_eq!(decode_action("e5"), Ok(Position::new(8, 8)));
        assert_eq!(decode_action("a1"), Ok(Position::new(0, 0)));
        assert_eq!(decode_action("jx"), Ok(Position::new(18, 18)));
        assert_eq!(decode_action("JX"), Ok(Position::new(18, 18)));
        assert_eq!(decode_action("E5"), Ok(Position::new(8, 8)));
    }

    #[test]
    fn decode_walls() {
        assert_eq!(decode_action("c3v"), Ok(Position::new(5, 4)));
        assert_eq!(decode_action("c3V"), Ok(Position::new(5, 4)));
        assert_eq!(decode_action("c3>"), Ok(Position::new(4, 5)));
        assert_eq!(cell_kind(pos!("c3v")), CellKind::Wall);
        assert_eq!(cell_kind(pos!("c3>")), CellKind::Wall);
    }

    #[test]
    fn decode_rejects_bad_suffix() {
        let err = decode_action("c3h").unwrap_err();
        assert_eq!(err.reason, NotationErrorReason::InvalidSuffix('h'));
        assert_eq!(err.token, "c3h");
        assert_eq!(
            decode_action("c3<").unwrap_err().reason,
            NotationErrorReason::InvalidSuffix('<')
        );
    }

    #[test]
    fn decode_rejects_malformed_tokens() {
        assert_eq!(
            decode_action("").unwrap_err().reason,
            NotationErrorReason::WrongLength { len: 0 }
        );
        assert_eq!(
            decode_action("e").unwrap_err().reason,
            NotationErrorReason::WrongLength { len: 1 }
        );
        assert_eq!(
            decode_action("e10").unwrap_err().reason,
            NotationErrorReason::InvalidSuffix('0')
        );
        assert_eq!(
            decode_action("e5v>").unwrap_err().reason,
            NotationErrorReason::WrongLength { len: 4 }
        );
        assert_eq!(
            decode_action("55").unwrap_err().reason,
            NotationErrorReason::InvalidColumn('5')
        );
        assert_eq!(
            decode_action("e0").unwrap_err().reason,
            NotationErrorReason::InvalidRow('0')
        );
        assert_eq!(
            decode_action("ee").unwrap_err().reason,
            NotationErrorReason::InvalidRow('e')
        );
    }

    #[test]
    fn encode_is_lowercase_and_minimal() {
        assert_eq!(Position::new(8, 8).to_notation().unwrap(), "e5");
        assert_eq!(Position::new(18, 0).to_notation().unwrap(), "ax");
        assert_eq!(Position::new(5, 4).to_notation().unwrap(), "c3v");
        assert_eq!(Position::new(4, 5).to_notation().unwrap(), "c3>");
        assert_eq!(pos!("JXv").to_notation().unwrap(), "jxv");
    }

    #[test]
    fn encode_rejects_pillars_and_far_positions() {
        assert_eq!(
            Position::new(5, 5).to_notation(),
            Err(UnnotatablePosition::Pillar(Position::new(5, 5)))
        );
        assert_eq!(
            Position::new(20, 0).to_notation(),
            Err(UnnotatablePosition::OutOfRange(Position::new(20, 0)))
        );
        assert_eq!(
            Position::new(0, 52).to_notation(),
            Err(UnnotatablePosition::OutOfRange(Position::new(0, 52)))
        );
    }
}
