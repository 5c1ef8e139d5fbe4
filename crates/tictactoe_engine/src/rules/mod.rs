//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The engine uses the
//! incremental [`completes_line`] after every move; the full-board
//! [`check_winner`] scan backs the invariants and tests.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, completes_line};
