//! Engine error types.

use derive_more::{Display, Error};

/// Contract violations reported by the engine.
///
/// A move onto an occupied cell or after the game ended is not an error;
/// see [`crate::MoveResult::Rejected`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Row or column outside `0..3`.
    #[display("Coordinate ({row}, {col}) is off the board (must be 0-2)")]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A caller panicked while holding the shared engine lock.
    #[display("Engine lock poisoned")]
    LockPoisoned,
}
