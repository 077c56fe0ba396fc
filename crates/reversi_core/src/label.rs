//! Human labels for board squares: column letter then row digit, so `"D4"`
//! is column D (4), row 4.

use std::fmt;
use std::str::FromStr;

use crate::error::{ReversiError, Result};
use crate::guard;
use crate::position::Position;

const COLUMN_LABELS: &str = "ABCDEFGH";

pub fn to_label(position: Position) -> String {
    let column = COLUMN_LABELS.as_bytes()[position.column() as usize - 1] as char;
    format!("{}{}", column, position.row())
}

pub fn from_label(text: &str) -> Result<Position> {
    let text = guard::against_length(2, text, "label")?;
    let mut chars = text.chars();
    let letter = guard::against_none(chars.next(), "label column")?.to_ascii_uppercase();
    let digit = guard::against_none(chars.next(), "label row")?;

    let column = COLUMN_LABELS
        .find(letter)
        .ok_or_else(|| ReversiError::InvalidFormat(format!("{letter:?} is not a column in A-H")))?;
    let row = digit
        .to_digit(10)
        .ok_or_else(|| ReversiError::InvalidFormat(format!("{digit:?} is not a row digit")))?;

    Position::new(row as u8, column as u8 + 1)
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_label(*self))
    }
}

impl FromStr for Position {
    type Err = ReversiError;

    fn from_str(s: &str) -> Result<Self> {
        from_label(s)
    }
}
