//! Prompt loop: renders the board, reads labels, reports results.

use std::io::{self, BufRead, Write};

use log::{debug, warn};
use reversi_core::{guard, Position, ReversiError};
use thiserror::Error;

use crate::game::{Game, Outcome, TurnEvent};
use crate::settings::Settings;

const FALLBACK_EXAMPLE: &str = "D3";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Finished(Outcome),
    Quit,
    InputClosed,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    Move(Position),
}

fn parse_command(line: &str) -> Result<Command, ReversiError> {
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Ok(Command::Quit),
        _ => line.parse().map(Command::Move),
    }
}

fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn run_session<R, W>(
    game: &mut Game,
    settings: &Settings,
    mut input: R,
    mut output: W,
) -> Result<SessionEnd, SessionError>
where
    R: BufRead,
    W: Write,
{
    loop {
        if let Some(outcome) = game.outcome() {
            write!(output, "{}", game.board().display())?;
            writeln!(output, "{}", describe(outcome))?;
            return Ok(SessionEnd::Finished(outcome));
        }

        let turn = game.turn();
        let board = game.board();
        if settings.hints {
            write!(output, "{}", board.display_with_valid_moves(turn))?;
        } else {
            write!(output, "{}", board.display())?;
        }
        let example = board
            .get_valid_moves(turn)
            .first()
            .map_or_else(|| FALLBACK_EXAMPLE.to_string(), Position::to_string);
        write!(output, "{turn} move (e.g. {example}), or 'q' to quit: ")?;
        output.flush()?;

        let line = match guard::against_none(read_line(&mut input)?, "input") {
            Ok(line) => line,
            Err(err) => {
                debug!("ending session: {err}");
                writeln!(output)?;
                return Ok(SessionEnd::InputClosed);
            }
        };

        let position = match parse_command(&line) {
            Ok(Command::Quit) => return Ok(SessionEnd::Quit),
            Ok(Command::Move(position)) => position,
            Err(err) => {
                writeln!(output, "error: {err}")?;
                continue;
            }
        };

        match game.play(position) {
            Ok(report) => {
                writeln!(
                    output,
                    "{} played {}, flipping {}",
                    report.color, report.position, report.flipped
                )?;
                if let TurnEvent::Pass { skipped, .. } = report.event {
                    writeln!(output, "{skipped} has no valid moves and passes")?;
                }
            }
            Err(err) => {
                warn!("rejected move {}: {}", position, err);
                writeln!(output, "error: {err}")?;
            }
        }
    }
}

fn describe(outcome: Outcome) -> String {
    match outcome {
        Outcome::Winner(color) => format!("Game over: {color} wins"),
        Outcome::Tie => "Game over: tie".to_string(),
    }
}
