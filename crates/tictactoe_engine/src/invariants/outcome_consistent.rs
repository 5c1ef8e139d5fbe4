//! Outcome invariant: the recorded outcome agrees with a full-board scan.

use super::Invariant;
use crate::engine::GameEngine;
use crate::rules::{check_winner, is_full};
use crate::types::Outcome;

/// Invariant: `Won(m)` iff the board has an `m` line, `Tie` iff the board
/// is full with no line, `InProgress` otherwise.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameEngine> for OutcomeConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let expected = match check_winner(board) {
            Some(mark) => Outcome::Won(mark),
            None if is_full(board) => Outcome::Tie,
            None => Outcome::InProgress,
        };
        engine.outcome() == expected
    }

    fn description() -> &'static str {
        "Outcome matches a full-board scan"
    }
}
