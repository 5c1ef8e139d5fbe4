//! Tic-tac-toe console entry point.

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe_console::{Cli, Command, Console, ConsoleConfig, init_tracing};
use tictactoe_engine::GameEngine;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ConsoleConfig::load(&cli.config)?.with_cli_overrides(&cli);
    init_tracing(&config)?;
    info!(?config, "Starting tic-tac-toe console");

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            Console::new(config).run(stdin.lock(), &mut stdout)
        }
        Command::State => {
            println!("{}", serde_json::to_string_pretty(&GameEngine::new().snapshot())?);
            Ok(())
        }
    }
}
