//! Tests for console configuration loading.

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tictactoe_console::{Cli, Command, ConsoleConfig};
use tictactoe_engine::EmptyStyle;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let config = ConsoleConfig::load(dir.path().join("absent.toml")).expect("Defaults");

    assert_eq!(config, ConsoleConfig::default());
    assert_eq!(config.log_filter(), "info");
    assert_eq!(*config.empty_cell(), EmptyStyle::Numbers);
    assert!(*config.show_leaderboard());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "empty_cell = \"blank\"\nshow_leaderboard = false").expect("Write config");

    let config = ConsoleConfig::load(file.path()).expect("Valid config");

    assert_eq!(*config.empty_cell(), EmptyStyle::Blank);
    assert!(!*config.show_leaderboard());
    assert_eq!(config.log_filter(), "info");
    assert_eq!(config.log_file(), &None);
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "empty_cell = \"dots\"").expect("Write config");

    let err = ConsoleConfig::load(file.path()).expect_err("Invalid style");
    assert!(err.message.contains("Failed to parse"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_cli_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "log_filter = \"warn\"").expect("Write config");

    let cli = Cli::parse_from([
        "tictactoe",
        "--log-filter",
        "debug",
        "--log-file",
        "game.log",
        "state",
    ]);
    let config = ConsoleConfig::load(file.path())
        .expect("Valid config")
        .with_cli_overrides(&cli);

    assert_eq!(cli.command, Some(Command::State));
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(config.log_file(), &Some(PathBuf::from("game.log")));
}

#[test]
fn test_cli_defaults() {
    let cli = Cli::parse_from(["tictactoe"]);

    assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
    assert_eq!(cli.command, None);
    assert!(cli.log_filter.is_none());
}
