//! Free-cell invariant: the tracked counter matches the board.

use super::Invariant;
use crate::engine::GameEngine;

/// Invariant: `free_cells == 9 - occupied cells`.
pub struct FreeCellsInvariant;

impl Invariant<GameEngine> for FreeCellsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.free_cells() + engine.board().occupied_count() == 9
    }

    fn description() -> &'static str {
        "Tracked free-cell count matches empty cells on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark};

    #[test]
    fn test_new_engine_holds() {
        assert!(FreeCellsInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_holds_after_new_game() {
        let mut engine = GameEngine::new();
        engine.apply_move(0, 0).expect("on the board");
        engine.start_new_game();
        assert_eq!(engine.free_cells(), 9);
        assert!(FreeCellsInvariant::holds(&engine));
    }

    #[test]
    fn test_untracked_mark_violates() {
        let mut engine = GameEngine::new();
        engine.corrupt_cell_for_test(2, 2, Cell::Occupied(Mark::X));
        assert!(!FreeCellsInvariant::holds(&engine));
    }
}
