//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Mark;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... and the player to move must
/// follow from it: the next mark while in progress, the last mover once
/// the game has ended.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        if history.first().is_some_and(|m| m.mark != Mark::X) {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        let expected = match history.last() {
            None => Mark::X,
            Some(last) if engine.outcome().is_terminal() => last.mark,
            Some(last) => last.mark.opponent(),
        };
        engine.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
