use serde::{Deserialize, Serialize};

use crate::error::{ReversiError, Result};
use crate::guard;
use crate::range::Range;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// A square on the board, 1-indexed. `row` counts top to bottom, `column`
/// left to right (`A` is column 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    pub fn new(row: u8, column: u8) -> Result<Self> {
        let row = guard::against_out_of_range(Self::range(), row, "row")?;
        let column = guard::against_out_of_range(Self::range(), column, "column")?;
        Ok(Self { row, column })
    }

    pub const fn range() -> Range<u8> {
        Range::new(1, BOARD_SIZE)
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn column(&self) -> u8 {
        self.column
    }

    /// Steps by a signed delta, or `None` when that would leave the board.
    pub fn offset(&self, d_row: i8, d_column: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let column = self.column as i8 + d_column;
        if row < 1 || column < 1 {
            return None;
        }
        Self::new(row as u8, column as u8).ok()
    }

    /// Every square in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=BOARD_SIZE)
            .flat_map(|row| (1..=BOARD_SIZE).map(move |column| Position { row, column }))
    }

    /// Zero-based `(row, column)` grid index.
    pub(crate) fn index(&self) -> (usize, usize) {
        (self.row as usize - 1, self.column as usize - 1)
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = ReversiError;

    fn try_from((row, column): (u8, u8)) -> Result<Self> {
        Self::new(row, column)
    }
}

impl From<Position> for (u8, u8) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.column)
    }
}
