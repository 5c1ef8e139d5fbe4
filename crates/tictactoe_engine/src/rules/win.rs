//! Win detection logic for tic-tac-toe.

use crate::position::Coord;
use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// Checks whether the mark at `coord` sits on a completed line.
///
/// Only the row, column and (when `coord` lies on one) diagonals through
/// `coord` are inspected. Must be called after the mark is placed.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, coord: Coord) -> bool {
    let mark = board.get(coord);
    if mark == Cell::Empty {
        return false;
    }
    let cells = board.cells();
    let all = |line: [usize; 3]| line.iter().all(|&i| cells[i] == mark);

    let row = coord.row() * 3;
    let col = coord.col();
    all([row, row + 1, row + 2])
        || all([col, col + 3, col + 6])
        || (coord.on_main_diagonal() && all([0, 4, 8]))
        || (coord.on_anti_diagonal() && all([2, 4, 6]))
}

/// Scans every line on the board for three of a kind.
///
/// Returns `Some(mark)` for the first complete line found, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    const LINES: [[usize; 3]; 8] = [
        [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
        [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
        [0, 4, 8], [2, 4, 6],             // Diagonals
    ];

    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Occupied(mark) if cells[b] == cells[a] && cells[c] == cells[a] => Some(mark),
        _ => None,
    })
}
