use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{ReversiError, Result};
use crate::piece::{Color, Piece};
use crate::position::{Position, BOARD_SIZE};

pub const SIZE: usize = BOARD_SIZE as usize;

// N, NE, E, SE, S, SW, W, NW as (row, column) steps.
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

fn opening_color(pos: Position) -> Option<Color> {
    match (pos.row(), pos.column()) {
        (4, 4) | (5, 5) => Some(Color::Dark),
        (4, 5) | (5, 4) => Some(Color::Light),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub dark: usize,
    pub light: usize,
}

impl Score {
    pub fn of(&self, color: Color) -> usize {
        match color {
            Color::Dark => self.dark,
            Color::Light => self.light,
        }
    }

    pub fn total(&self) -> usize {
        self.dark + self.light
    }
}

#[derive(Debug, Clone, Default)]
pub struct Board {
    grid: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// An 8x8 grid of empty cells. Call [`Board::initialize`] for the
    /// starting position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the grid and places the four center pieces.
    pub fn initialize(&mut self) {
        self.grid = Default::default();
        for pos in Position::all() {
            if let Some(color) = opening_color(pos) {
                *self.cell_mut(pos) = Cell::holding(Piece::placed_at(color, pos));
            }
        }
        info!("board initialized with the standard opening");
    }

    pub fn grid(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.grid
    }

    pub fn cell(&self, position: Position) -> &Cell {
        let (r, c) = position.index();
        &self.grid[r][c]
    }

    fn cell_mut(&mut self, position: Position) -> &mut Cell {
        let (r, c) = position.index();
        &mut self.grid[r][c]
    }

    pub fn is_within_bounds(&self, row: i32, column: i32) -> bool {
        let size = BOARD_SIZE as i32;
        (1..=size).contains(&row) && (1..=size).contains(&column)
    }

    /// Puts `piece` on the board without any capture logic. Nothing is
    /// mutated unless both the cell and the piece accept the placement.
    pub fn place_coin(&mut self, position: Position, mut piece: Piece) -> Result<()> {
        if self.cell(position).is_occupied() {
            return Err(ReversiError::AlreadyOccupied(position));
        }
        piece.place(position)?;
        let color = piece.color();
        self.cell_mut(position).place(piece, position)?;
        debug!("placed {} at {}", color, position);
        Ok(())
    }

    pub fn remove_coin(&mut self, position: Position) -> Option<Piece> {
        let removed = self.cell_mut(position).clear();
        if removed.is_some() {
            debug!("removed piece from {}", position);
        }
        removed
    }

    /// Opponent squares captured if `color` played at `position`, scanned
    /// N, NE, E, SE, S, SW, W, NW.
    pub fn get_coins_to_flip(&self, position: Position, color: Color) -> Vec<Position> {
        DIRECTIONS
            .iter()
            .flat_map(|&(d_row, d_column)| self.check_direction(position, color, d_row, d_column))
            .collect()
    }

    fn check_direction(&self, from: Position, color: Color, d_row: i8, d_column: i8) -> Vec<Position> {
        let mut run = Vec::new();
        let mut current = from.offset(d_row, d_column);

        while let Some(pos) = current {
            match self.cell(pos).color() {
                None => return Vec::new(),
                Some(c) if c == color => return run,
                Some(_) => run.push(pos),
            }
            current = pos.offset(d_row, d_column);
        }

        // Ran off the board without closing the run.
        Vec::new()
    }

    pub fn is_valid_move(&self, position: Position, color: Color) -> bool {
        if self.cell(position).is_occupied() {
            return false;
        }
        !self.get_coins_to_flip(position, color).is_empty()
    }

    pub fn get_valid_moves(&self, color: Color) -> Vec<Position> {
        Position::all()
            .filter(|&pos| self.is_valid_move(pos, color))
            .collect()
    }

    pub fn has_valid_moves(&self, color: Color) -> bool {
        Position::all().any(|pos| self.is_valid_move(pos, color))
    }

    /// Places `piece` and flips everything it captures. Returns the number
    /// of flipped pieces.
    ///
    /// Captures are computed before placement. Legality is not checked:
    /// a placement that captures nothing succeeds with 0.
    pub fn execute_move(&mut self, position: Position, piece: Piece) -> Result<usize> {
        let color = piece.color();
        let captured = self.get_coins_to_flip(position, color);

        self.place_coin(position, piece)?;
        for &pos in &captured {
            self.cell_mut(pos).flip();
        }

        debug!("{} played {} and flipped {}", color, position, captured.len());
        Ok(captured.len())
    }

    pub fn count_coins(&self, color: Color) -> usize {
        self.cells().filter(|cell| cell.color() == Some(color)).count()
    }

    pub fn count_empty_cells(&self) -> usize {
        self.cells().filter(|cell| cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.count_empty_cells() == 0
    }

    pub fn get_score(&self) -> Score {
        Score {
            dark: self.count_coins(Color::Dark),
            light: self.count_coins(Color::Light),
        }
    }

    /// The color with more pieces, or `None` on a tie.
    pub fn get_winner(&self) -> Option<Color> {
        let score = self.get_score();
        match score.dark.cmp(&score.light) {
            std::cmp::Ordering::Greater => Some(Color::Dark),
            std::cmp::Ordering::Less => Some(Color::Light),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// True when neither color can move.
    pub fn is_game_over(&self) -> bool {
        !self.has_valid_moves(Color::Dark) && !self.has_valid_moves(Color::Light)
    }

    fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, column: u8) -> Position {
        Position::new(row, column).unwrap()
    }

    fn opening() -> Board {
        let mut board = Board::new();
        board.initialize();
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.count_empty_cells(), 64);
        assert_eq!(board.get_score(), Score::default());
        assert!(board.get_valid_moves(Color::Dark).is_empty());
    }

    #[test]
    fn test_initialize_places_four_center_pieces() {
        let board = opening();
        assert_eq!(board.get_score(), Score { dark: 2, light: 2 });
        assert_eq!(board.count_empty_cells(), 60);
        assert_eq!(board.cell(pos(4, 4)).color(), Some(Color::Dark));
        assert_eq!(board.cell(pos(4, 5)).color(), Some(Color::Light));
        assert_eq!(board.cell(pos(5, 4)).color(), Some(Color::Light));
        assert_eq!(board.cell(pos(5, 5)).color(), Some(Color::Dark));
        assert_eq!(board.cell(pos(4, 4)).piece().unwrap().position(), Some(pos(4, 4)));
    }

    #[test]
    fn test_initialize_resets_previous_state() {
        let mut board = opening();
        board.execute_move(pos(3, 5), Piece::new(Color::Dark)).unwrap();
        board.initialize();
        assert_eq!(board.get_score(), Score { dark: 2, light: 2 });
    }

    #[test]
    fn test_is_within_bounds() {
        let board = Board::new();
        assert!(board.is_within_bounds(1, 1));
        assert!(board.is_within_bounds(8, 8));
        assert!(!board.is_within_bounds(0, 4));
        assert!(!board.is_within_bounds(4, 9));
    }

    #[test]
    fn test_place_coin_rejects_occupied_cell_without_mutation() {
        let mut board = opening();
        let err = board.place_coin(pos(4, 4), Piece::new(Color::Light)).unwrap_err();
        assert_eq!(err, ReversiError::AlreadyOccupied(pos(4, 4)));
        assert_eq!(board.cell(pos(4, 4)).color(), Some(Color::Dark));
    }

    #[test]
    fn test_place_coin_rejects_placed_piece() {
        let mut board = Board::new();
        let mut piece = Piece::new(Color::Dark);
        piece.place(pos(1, 1)).unwrap();
        let err = board.place_coin(pos(2, 2), piece).unwrap_err();
        assert_eq!(err, ReversiError::AlreadyPlaced(pos(1, 1)));
        assert!(board.cell(pos(2, 2)).is_empty());
    }

    #[test]
    fn test_remove_coin() {
        let mut board = opening();
        let removed = board.remove_coin(pos(4, 4)).unwrap();
        assert_eq!(removed.color(), Color::Dark);
        assert!(board.cell(pos(4, 4)).is_empty());
        assert!(board.remove_coin(pos(4, 4)).is_none());
    }

    #[test]
    fn test_opening_valid_moves_for_dark() {
        let board = opening();
        assert_eq!(
            board.get_valid_moves(Color::Dark),
            vec![pos(3, 5), pos(4, 6), pos(5, 3), pos(6, 4)]
        );
    }

    #[test]
    fn test_opening_valid_moves_for_light() {
        let board = opening();
        assert_eq!(
            board.get_valid_moves(Color::Light),
            vec![pos(3, 4), pos(4, 3), pos(5, 6), pos(6, 5)]
        );
    }

    #[test]
    fn test_execute_move_flips_captured_piece() {
        let mut board = opening();
        let flipped = board.execute_move(pos(3, 5), Piece::new(Color::Dark)).unwrap();
        assert_eq!(flipped, 1);
        assert_eq!(board.cell(pos(4, 5)).color(), Some(Color::Dark));
        assert_eq!(board.get_score(), Score { dark: 4, light: 1 });
    }

    #[test]
    fn test_execute_move_on_occupied_cell_flips_nothing() {
        let mut board = opening();
        let before = board.get_score();
        assert!(board.execute_move(pos(4, 5), Piece::new(Color::Dark)).is_err());
        assert_eq!(board.get_score(), before);
    }

    #[test]
    fn test_captures_in_several_directions() {
        // Single Light pieces around (3,3), each backed by Dark, in every
        // direction except NE and SW.
        let mut board = Board::new();
        for (r, c) in [(1, 1), (1, 3), (3, 1), (5, 5), (5, 3), (3, 5)] {
            board.place_coin(pos(r, c), Piece::new(Color::Dark)).unwrap();
        }
        for (r, c) in [(2, 2), (2, 3), (3, 2), (4, 4), (4, 3), (3, 4)] {
            board.place_coin(pos(r, c), Piece::new(Color::Light)).unwrap();
        }

        let flips = board.get_coins_to_flip(pos(3, 3), Color::Dark);
        assert_eq!(
            flips,
            vec![pos(2, 3), pos(3, 4), pos(4, 4), pos(4, 3), pos(3, 2), pos(2, 2)]
        );

        assert_eq!(board.execute_move(pos(3, 3), Piece::new(Color::Dark)).unwrap(), 6);
        assert_eq!(board.count_coins(Color::Light), 0);
    }

    #[test]
    fn test_long_run_is_captured_whole() {
        let mut board = Board::new();
        board.place_coin(pos(1, 8), Piece::new(Color::Dark)).unwrap();
        for c in 2..=7 {
            board.place_coin(pos(1, c), Piece::new(Color::Light)).unwrap();
        }
        let flips = board.get_coins_to_flip(pos(1, 1), Color::Dark);
        assert_eq!(flips.len(), 6);
    }

    #[test]
    fn test_run_ending_at_edge_captures_nothing() {
        let mut board = Board::new();
        for c in 2..=8 {
            board.place_coin(pos(1, c), Piece::new(Color::Light)).unwrap();
        }
        assert!(board.get_coins_to_flip(pos(1, 1), Color::Dark).is_empty());
        assert!(!board.is_valid_move(pos(1, 1), Color::Dark));
    }

    #[test]
    fn test_run_broken_by_gap_captures_nothing() {
        let mut board = Board::new();
        board.place_coin(pos(4, 2), Piece::new(Color::Light)).unwrap();
        board.place_coin(pos(4, 4), Piece::new(Color::Dark)).unwrap();
        assert!(board.get_coins_to_flip(pos(4, 1), Color::Dark).is_empty());
    }

    #[test]
    fn test_isolated_square_has_no_captures() {
        let board = opening();
        assert!(board.get_coins_to_flip(pos(1, 1), Color::Dark).is_empty());
        assert!(board.get_coins_to_flip(pos(8, 8), Color::Light).is_empty());
    }

    #[test]
    fn test_adjacent_own_color_is_not_a_move() {
        let board = opening();
        // Next to Dark (4,4) only; nothing between.
        assert!(!board.is_valid_move(pos(3, 3), Color::Dark));
    }

    #[test]
    fn test_winner_and_tie() {
        let mut board = Board::new();
        board.place_coin(pos(1, 1), Piece::new(Color::Light)).unwrap();
        assert_eq!(board.get_winner(), Some(Color::Light));
        board.place_coin(pos(1, 2), Piece::new(Color::Dark)).unwrap();
        assert_eq!(board.get_winner(), None);
        board.place_coin(pos(1, 3), Piece::new(Color::Dark)).unwrap();
        assert_eq!(board.get_winner(), Some(Color::Dark));
    }

    #[test]
    fn test_score_accessors() {
        let score = Score { dark: 34, light: 30 };
        assert_eq!(score.of(Color::Dark), 34);
        assert_eq!(score.of(Color::Light), 30);
        assert_eq!(score.total(), 64);
    }
}
