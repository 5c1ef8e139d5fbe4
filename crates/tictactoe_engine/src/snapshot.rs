//! Serializable view of the engine state.

use crate::action::MoveRecord;
use crate::leaderboard::Leaderboard;
use crate::types::{Board, Mark, Outcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Point-in-time copy of everything a presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct Snapshot {
    /// The board.
    board: Board,
    /// Player to move (the winner, once won).
    current_player: Mark,
    /// Game status.
    outcome: Outcome,
    /// Empty cells remaining.
    free_cells: usize,
    /// Moves played this game.
    history: Vec<MoveRecord>,
    /// Cross-game tally.
    leaderboard: Leaderboard,
}
