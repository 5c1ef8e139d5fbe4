//! Move records and move results.

use crate::events::GameEvent;
use crate::position::Coord;
use crate::types::{Mark, Outcome};
use serde::{Deserialize, Serialize};

/// A placed mark: who played where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct MoveRecord {
    /// The player who moved.
    pub mark: Mark,
    /// Where the mark was placed.
    pub coord: Coord,
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.coord.label())
    }
}

/// Why a move on a valid coordinate did not take effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// The game has already ended.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),
}

/// Result of attempting a move on a valid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The move was applied and produced this event.
    Accepted(GameEvent),
    /// Nothing changed.
    Rejected(Rejection),
}

impl MoveResult {
    /// True if the move was applied.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted(_))
    }

    /// The emitted event, if the move was applied.
    pub fn event(&self) -> Option<GameEvent> {
        match self {
            MoveResult::Accepted(event) => Some(*event),
            MoveResult::Rejected(_) => None,
        }
    }
}
