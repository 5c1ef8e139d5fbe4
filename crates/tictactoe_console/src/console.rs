//! Interactive command loop.

use crate::command::{CommandError, ConsoleCommand};
use crate::config::ConsoleConfig;
use crate::presenter::{Presenter, leaderboard_line};
use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_engine::{GameEngine, MoveResult};
use tracing::{info, instrument, warn};

/// Line-oriented game console.
///
/// Owns the engine and a presenter subscribed to it. All rendering is done
/// from engine queries and events.
#[derive(Debug)]
pub struct Console {
    engine: GameEngine,
    presenter: Presenter,
    config: ConsoleConfig,
}

impl Console {
    /// Creates a console around a fresh engine.
    #[instrument(skip(config))]
    pub fn new(config: ConsoleConfig) -> Self {
        let mut engine = GameEngine::new();
        let presenter = Presenter::new(engine.subscribe(), *config.show_leaderboard());
        Self {
            engine,
            presenter,
            config,
        }
    }

    /// The engine driven by this console.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Reads commands until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        info!("Console session started");
        self.render_board(out)?;
        writeln!(out, "  {}", self.presenter.status())?;
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            match ConsoleCommand::parse(&line) {
                Ok(ConsoleCommand::Quit) => break,
                Ok(command) => self.execute(command, out)?,
                Err(CommandError::Empty) => {}
                Err(e) => writeln!(out, "  {} (type 'help' for commands)", e)?,
            }
            write!(out, "> ")?;
            out.flush()?;
        }

        info!(
            games_played = self.engine.leaderboard().total_games(),
            "Console session ended"
        );
        writeln!(out)?;
        writeln!(out, "  {}", leaderboard_line(&self.engine.leaderboard()))?;
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: ConsoleCommand, out: &mut W) -> Result<()> {
        match command {
            ConsoleCommand::Move { row, col } => match self.engine.apply_move(row, col) {
                Ok(MoveResult::Accepted(_)) => {
                    self.render_board(out)?;
                    self.presenter.pump(&self.engine.leaderboard(), out)?;
                }
                Ok(MoveResult::Rejected(reason)) => writeln!(out, "  {}", reason)?,
                Err(e) => {
                    warn!(error = %e, "Rejected input");
                    writeln!(out, "  {}", e)?;
                }
            },
            ConsoleCommand::NewGame => {
                self.engine.start_new_game();
                self.render_board(out)?;
                self.presenter.pump(&self.engine.leaderboard(), out)?;
            }
            ConsoleCommand::Board => {
                self.render_board(out)?;
                writeln!(out, "  {}", self.presenter.status())?;
            }
            ConsoleCommand::Score => {
                writeln!(out, "  {}", leaderboard_line(&self.engine.leaderboard()))?;
            }
            ConsoleCommand::State => {
                writeln!(out, "{}", serde_json::to_string_pretty(&self.engine.snapshot())?)?;
            }
            ConsoleCommand::Help => writeln!(out, "{}", ConsoleCommand::HELP)?,
            ConsoleCommand::Quit => {}
        }
        Ok(())
    }

    fn render_board<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out)?;
        for line in self.engine.board().display(*self.config.empty_cell()).lines() {
            writeln!(out, "  {}", line)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
