use log::info;
use reversi_core::{Board, Color, Piece, Position, ReversiError};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Color),
    Tie,
}

/// What happened to the turn after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    Next(Color),
    /// `skipped` had no legal move, so `next` plays again.
    Pass { skipped: Color, next: Color },
    GameOver(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub color: Color,
    pub position: Position,
    pub flipped: usize,
    pub event: TurnEvent,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Engine(#[from] ReversiError),
    #[error("{0} is not a legal move for {1}")]
    IllegalMove(Position, Color),
    #[error("the game is over")]
    GameOver,
}

/// A board plus whose turn it is. Owns the pass rule: a color with no
/// legal move is skipped, and the game ends when neither color can move.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    over: bool,
}

impl Game {
    pub fn new(first: Color) -> Self {
        let mut board = Board::new();
        board.initialize();
        Self::from_board(board, first)
    }

    /// Resumes play on an existing board. If `turn` cannot move but the
    /// opponent can, the opponent starts.
    pub fn from_board(board: Board, turn: Color) -> Self {
        let over = board.is_game_over();
        let turn = if !over && !board.has_valid_moves(turn) {
            turn.opponent()
        } else {
            turn
        };
        Self { board, turn, over }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if !self.over {
            return None;
        }
        Some(self.board.get_winner().map_or(Outcome::Tie, Outcome::Winner))
    }

    pub fn play(&mut self, position: Position) -> Result<MoveReport, GameError> {
        if self.over {
            return Err(GameError::GameOver);
        }
        let color = self.turn;
        if !self.board.is_valid_move(position, color) {
            return Err(GameError::IllegalMove(position, color));
        }

        let flipped = self.board.execute_move(position, Piece::new(color))?;
        let event = self.advance();
        Ok(MoveReport {
            color,
            position,
            flipped,
            event,
        })
    }

    fn advance(&mut self) -> TurnEvent {
        let next = self.turn.opponent();
        if self.board.has_valid_moves(next) {
            self.turn = next;
            return TurnEvent::Next(next);
        }
        if self.board.has_valid_moves(self.turn) {
            info!("{} has no legal move and passes", next);
            return TurnEvent::Pass {
                skipped: next,
                next: self.turn,
            };
        }

        self.over = true;
        let outcome = self.board.get_winner().map_or(Outcome::Tie, Outcome::Winner);
        info!("game over: {:?} ({:?})", outcome, self.board.get_score());
        TurnEvent::GameOver(outcome)
    }
}
