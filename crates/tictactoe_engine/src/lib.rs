//! Tic-tac-toe game-state engine.
//!
//! The engine is the single source of truth for a two-player game on a
//! 3x3 board: it owns the board, the turn cursor, the terminal outcome and a
//! leaderboard that survives across games for the lifetime of the engine.
//!
//! # Architecture
//!
//! - **Types**: closed enums for marks, cells and outcomes
//! - **Rules**: incremental and full-board win detection, full-board check
//! - **Engine**: move application, new games, read-only queries
//! - **Events**: subscription stream observed by presentation layers
//! - **Shared**: mutex-guarded handle for concurrent callers
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameEvent, Mark, MoveResult, Outcome};
//!
//! let mut engine = GameEngine::new();
//! let mut events = engine.subscribe();
//!
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     engine.apply_move(row, col).expect("on the board");
//! }
//!
//! assert_eq!(engine.outcome(), Outcome::Won(Mark::X));
//! assert_eq!(*engine.leaderboard().x_wins(), 1);
//! assert_eq!(events.try_recv().ok(), Some(GameEvent::MoveAccepted(Mark::O)));
//! assert!(matches!(engine.apply_move(2, 0), Ok(MoveResult::Rejected(_))));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
mod events;
pub mod invariants;
mod leaderboard;
mod position;
pub mod rules;
mod shared;
mod snapshot;
mod types;

pub use action::{MoveRecord, MoveResult, Rejection};
pub use engine::GameEngine;
pub use error::EngineError;
pub use events::{EventReceiver, GameEvent};
pub use leaderboard::{Leaderboard, ScoreCategory};
pub use position::Coord;
pub use shared::SharedEngine;
pub use snapshot::Snapshot;
pub use types::{Board, Cell, EmptyStyle, Mark, Outcome};
