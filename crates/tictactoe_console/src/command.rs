//! Parsing of console input lines.

use derive_more::{Display, Error};
use tictactoe_engine::Coord;

/// A parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Place a mark. Coordinates are passed to the engine unchecked.
    Move {
        /// Row (0-based).
        row: usize,
        /// Column (0-based).
        col: usize,
    },
    /// Start a new game.
    NewGame,
    /// Re-print the board.
    Board,
    /// Print the leaderboard.
    Score,
    /// Print the JSON snapshot.
    State,
    /// Print usage.
    Help,
    /// Leave the console.
    Quit,
}

/// Input line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Nothing was typed.
    #[display("Empty input")]
    Empty,
    /// Unrecognised word or number.
    #[display("Unknown command '{}'", _0)]
    Unknown(#[error(not(source))] String),
}

impl ConsoleCommand {
    /// Usage text shown by `help`.
    pub const HELP: &'static str = "\
Commands:
  <row> <col>   place a mark (rows and columns are 0-2)
  1-9           place a mark by keypad number (row-major)
  new           start a new game
  board         show the board
  score         show the leaderboard
  state         print the engine state as JSON
  help          show this message
  quit          leave";

    /// Parses one input line.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => Err(CommandError::Empty),
            [row, col] => match (row.parse(), col.parse()) {
                (Ok(row), Ok(col)) => Ok(ConsoleCommand::Move { row, col }),
                _ => Err(CommandError::Unknown(line.trim().to_string())),
            },
            [word] => Self::parse_word(word),
            _ => Err(CommandError::Unknown(line.trim().to_string())),
        }
    }

    fn parse_word(word: &str) -> Result<Self, CommandError> {
        if let Ok(key) = word.parse::<usize>() {
            return Coord::from_keypad(key)
                .map(|c| ConsoleCommand::Move {
                    row: c.row(),
                    col: c.col(),
                })
                .ok_or_else(|| CommandError::Unknown(word.to_string()));
        }

        match word.to_lowercase().as_str() {
            "new" | "n" => Ok(ConsoleCommand::NewGame),
            "board" | "b" => Ok(ConsoleCommand::Board),
            "score" | "s" => Ok(ConsoleCommand::Score),
            "state" => Ok(ConsoleCommand::State),
            "help" | "h" | "?" => Ok(ConsoleCommand::Help),
            "quit" | "q" | "exit" => Ok(ConsoleCommand::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}
