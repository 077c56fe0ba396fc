//! Fixed-width text rendering of a board.

use std::collections::HashSet;
use std::fmt;

use crate::board::{Board, SIZE};
use crate::piece::Color;
use crate::position::Position;

pub const VALID_MOVE_GLYPH: char = '*';

const HEADER: &str = "    A   B   C   D   E   F   G   H";

impl Board {
    pub fn display(&self) -> String {
        self.to_string()
    }

    /// Like [`Board::display`], with `*` on every square `color` may play.
    pub fn display_with_valid_moves(&self, color: Color) -> String {
        let view = GridView {
            board: self,
            highlighted: self.get_valid_moves(color).into_iter().collect(),
            turn: Some(color),
        };
        view.to_string()
    }
}

struct GridView<'a> {
    board: &'a Board,
    highlighted: HashSet<Position>,
    turn: Option<Color>,
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = format!("  +{}", "---+".repeat(SIZE));

        writeln!(f, "{HEADER}")?;
        writeln!(f, "{border}")?;
        for (r, row) in self.board.grid().iter().enumerate() {
            write!(f, "{} |", r + 1)?;
            for (c, cell) in row.iter().enumerate() {
                let glyph = match Position::new(r as u8 + 1, c as u8 + 1) {
                    Ok(pos) if self.highlighted.contains(&pos) => VALID_MOVE_GLYPH,
                    _ => cell.glyph(),
                };
                write!(f, " {glyph} |")?;
            }
            writeln!(f)?;
            writeln!(f, "{border}")?;
        }

        let score = self.board.get_score();
        writeln!(f)?;
        writeln!(
            f,
            "  Score: [{}] {} = {}  |  [{}] {} = {}",
            Color::Dark.glyph(),
            Color::Dark,
            score.dark,
            Color::Light.glyph(),
            Color::Light,
            score.light
        )?;

        if let Some(color) = self.turn {
            writeln!(
                f,
                "  {}'s turn - {} valid moves available ({} marks)",
                color,
                self.highlighted.len(),
                VALID_MOVE_GLYPH
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = GridView {
            board: self,
            highlighted: HashSet::new(),
            turn: None,
        };
        view.fmt(f)
    }
}
