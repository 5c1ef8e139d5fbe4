//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::{Board, Cell};

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must place every mark
/// on an empty cell and reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut reconstructed = Board::new();

        for record in engine.history() {
            if !reconstructed.is_empty(record.coord) {
                return false;
            }
            reconstructed.set(record.coord, Cell::Occupied(record.mark));
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
