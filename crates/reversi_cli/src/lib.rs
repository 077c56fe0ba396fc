// Terminal front-end: game session, prompt loop, arguments and logging
pub mod game;
pub mod logger;
pub mod settings;
pub mod terminal;

pub use game::{Game, GameError, MoveReport, Outcome, TurnEvent};
pub use settings::{Args, Settings};
pub use terminal::{run_session, SessionEnd, SessionError};

use log::info;

/// Plays one game on stdin/stdout.
pub fn run(settings: &Settings) -> Result<SessionEnd, SessionError> {
    info!("starting game, {} moves first", settings.first);
    let mut game = Game::new(settings.first);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(&mut game, settings, stdin.lock(), stdout.lock())
}
