use crate::error::{ReversiError, Result};
use crate::piece::{Color, Piece};
use crate::position::Position;

pub const EMPTY_GLYPH: char = '.';

/// A single board slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    piece: Option<Piece>,
}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn holding(piece: Piece) -> Self {
        Self { piece: Some(piece) }
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    pub fn is_occupied(&self) -> bool {
        self.piece.is_some()
    }

    pub fn color(&self) -> Option<Color> {
        self.piece.as_ref().map(Piece::color)
    }

    /// Stores `piece`, failing if the slot is taken. `at` names the slot
    /// in the error.
    pub fn place(&mut self, piece: Piece, at: Position) -> Result<()> {
        if self.is_occupied() {
            return Err(ReversiError::AlreadyOccupied(at));
        }
        self.piece = Some(piece);
        Ok(())
    }

    pub fn flip(&mut self) {
        if let Some(piece) = self.piece.as_mut() {
            piece.flip();
        }
    }

    pub fn clear(&mut self) -> Option<Piece> {
        self.piece.take()
    }

    pub fn glyph(&self) -> char {
        self.color().map_or(EMPTY_GLYPH, Color::glyph)
    }
}
