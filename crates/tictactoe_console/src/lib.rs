//! Console front end for the tic-tac-toe engine.
//!
//! The engine owns all game state; this crate only reads commands, forwards
//! them to the engine, and renders from the engine's events and queries.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
mod console;
mod logging;
mod presenter;

pub use cli::{Cli, Command};
pub use command::{CommandError, ConsoleCommand};
pub use config::{ConfigError, ConsoleConfig};
pub use console::Console;
pub use logging::init_tracing;
pub use presenter::{Cue, Presenter, leaderboard_line, status_line};
