use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use reversi_core::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FirstPlayer {
    Dark,
    Light,
}

impl From<FirstPlayer> for Color {
    fn from(first: FirstPlayer) -> Self {
        match first {
            FirstPlayer::Dark => Color::Dark,
            FirstPlayer::Light => Color::Light,
        }
    }
}

/// Two-player Reversi in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Color that moves first.
    #[arg(long, value_enum, default_value_t = FirstPlayer::Dark)]
    pub first: FirstPlayer,

    /// Do not mark valid moves on the board.
    #[arg(long)]
    pub no_hints: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub first: Color,
    pub hints: bool,
    pub log_level: LevelFilter,
}

impl Settings {
    pub fn from_args() -> Self {
        Args::parse().into()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first: Color::Dark,
            hints: true,
            log_level: LevelFilter::Warn,
        }
    }
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        let log_level = match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        Self {
            first: args.first.into(),
            hints: !args.no_hints,
            log_level,
        }
    }
}
