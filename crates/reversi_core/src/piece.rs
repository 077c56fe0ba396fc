use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ReversiError, Result};
use crate::position::Position;
use crate::record::RecordMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Dark,
    Light,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Dark => Color::Light,
            Color::Light => Color::Dark,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Color::Dark => 'D',
            Color::Light => 'L',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Dark => f.write_str("DARK"),
            Color::Light => f.write_str("LIGHT"),
        }
    }
}

/// A two-sided disc. Its position is fixed the first time it is placed;
/// its color changes every time it is flipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    record: RecordMetadata,
    color: Color,
    position: Option<Position>,
}

impl Piece {
    pub fn new(color: Color) -> Self {
        Self {
            record: RecordMetadata::new(),
            color,
            position: None,
        }
    }

    pub(crate) fn placed_at(color: Color, position: Position) -> Self {
        Self {
            record: RecordMetadata::new(),
            color,
            position: Some(position),
        }
    }

    pub fn id(&self) -> Uuid {
        self.record.id()
    }

    pub fn record(&self) -> &RecordMetadata {
        &self.record
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    pub fn place(&mut self, position: Position) -> Result<()> {
        if let Some(current) = self.position {
            return Err(ReversiError::AlreadyPlaced(current));
        }
        self.position = Some(position);
        self.record.touch();
        Ok(())
    }

    pub fn flip(&mut self) {
        self.color = self.color.opponent();
        self.record.touch();
    }
}
