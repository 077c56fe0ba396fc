// Reversi rules engine: board, pieces and the capture algorithm
pub mod board;
pub mod cell;
pub mod error;
pub mod guard;
pub mod label;
pub mod piece;
pub mod position;
pub mod range;
pub mod record;
pub mod render;
pub mod snapshot;

// Re-export main types for convenience
pub use board::{Board, Score};
pub use cell::Cell;
pub use error::{ReversiError, Result};
pub use label::{from_label, to_label};
pub use piece::{Color, Piece};
pub use position::{Position, BOARD_SIZE};
pub use range::Range;
pub use record::RecordMetadata;
pub use snapshot::BoardSnapshot;
