//! Plain-data view of a board for collaborators that store or send it.

use serde::{Deserialize, Serialize};

use crate::board::{Board, SIZE};
use crate::cell::Cell;
use crate::error::Result;
use crate::guard;
use crate::piece::{Color, Piece};
use crate::position::Position;
use crate::range::Range;

/// Row-major cell colors; `None` is an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub cells: Vec<Vec<Option<Color>>>,
}

impl Board {
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            cells: self
                .grid()
                .iter()
                .map(|row| row.iter().map(Cell::color).collect())
                .collect(),
        }
    }

    /// Rebuilds a board from a snapshot. Pieces get fresh identities.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Board> {
        check_len(snapshot.cells.len(), "rows")?;
        for row in &snapshot.cells {
            check_len(row.len(), "cells in row")?;
        }

        let mut board = Board::new();
        for pos in Position::all() {
            let (r, c) = pos.index();
            let row = guard::against_none(snapshot.cells.get(r), "snapshot row")?;
            let color = guard::against_none(row.get(c), "snapshot cell")?;
            if let Some(color) = *color {
                board.place_coin(pos, Piece::new(color))?;
            }
        }
        Ok(board)
    }
}

fn check_len(len: usize, name: &'static str) -> Result<()> {
    let len = u32::try_from(len).unwrap_or(u32::MAX);
    guard::against_out_of_range(Range::new(0, SIZE as u32), len, name)?;
    Ok(())
}
