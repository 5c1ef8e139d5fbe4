//! Validated board coordinates.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A `(row, col)` pair guaranteed to lie on the 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// All 9 coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord::at(0, 0),
        Coord::at(0, 1),
        Coord::at(0, 2),
        Coord::at(1, 0),
        Coord::at(1, 1),
        Coord::at(1, 2),
        Coord::at(2, 0),
        Coord::at(2, 1),
        Coord::at(2, 2),
    ];

    const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Validates a raw `(row, col)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCoordinate`] if either value is not in `0..3`.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, EngineError> {
        if row < 3 && col < 3 {
            Ok(Self::at(row as u8, col as u8))
        } else {
            Err(EngineError::InvalidCoordinate { row, col })
        }
    }

    /// Creates a coordinate from a row-major board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a coordinate from a keypad number (1-9, row-major).
    pub fn from_keypad(key: usize) -> Option<Self> {
        key.checked_sub(1).and_then(Self::from_index)
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row() * 3 + self.col()
    }

    /// On the `(0,0)`-`(2,2)` diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.col
    }

    /// On the `(0,2)`-`(2,0)` diagonal.
    pub fn on_anti_diagonal(self) -> bool {
        self.row + self.col == 2
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 9] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        LABELS[self.index()]
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
