use thiserror::Error;

use crate::position::Position;

pub type Result<T> = std::result::Result<T, ReversiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReversiError {
    #[error("{name} {value} is out of range {range}")]
    OutOfRange {
        name: &'static str,
        value: i64,
        range: String,
    },
    #[error("cell {0} is already occupied")]
    AlreadyOccupied(Position),
    #[error("piece is already placed at {0}")]
    AlreadyPlaced(Position),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    #[error("{0} is required but was missing")]
    NullArgument(&'static str),
}
