//! The game engine: board, turn order, outcome and leaderboard.

use crate::action::{MoveRecord, MoveResult, Rejection};
use crate::error::EngineError;
use crate::events::{EventReceiver, GameEvent, Subscribers};
use crate::invariants;
use crate::leaderboard::{Leaderboard, ScoreCategory};
use crate::position::Coord;
use crate::rules;
use crate::snapshot::Snapshot;
use crate::types::{Board, Cell, Mark, Outcome};
use tracing::{debug, info, instrument, trace, warn};

/// Tic-tac-toe game engine.
///
/// Owns the current game (board, player to move, outcome, move history)
/// and a leaderboard that persists across [`start_new_game`] calls.
/// Every accepted move publishes exactly one [`GameEvent`] to subscribers.
///
/// A clone copies the game state but not the subscribers: moves played on
/// the clone are not reported to receivers of the original.
///
/// [`start_new_game`]: GameEngine::start_new_game
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current_player: Mark,
    outcome: Outcome,
    free_cells: u8,
    history: Vec<MoveRecord>,
    leaderboard: Leaderboard,
    subscribers: Subscribers,
}

impl GameEngine {
    /// Creates an engine with an empty board, X to move, and a zeroed leaderboard.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            outcome: Outcome::InProgress,
            free_cells: 9,
            history: Vec::new(),
            leaderboard: Leaderboard::default(),
            subscribers: Subscribers::default(),
        }
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Returns `Ok(MoveResult::Rejected(_))` when the cell is occupied or the
    /// game is over; nothing changes and no event is emitted.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCoordinate`] if `row` or `col` is not in
    /// `0..3`. State is left unchanged.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveResult, EngineError> {
        let coord = Coord::new(row, col).inspect_err(|e| {
            warn!(error = %e, "Move outside the board");
        })?;
        Ok(self.apply_at(coord))
    }

    /// Places the current player's mark at an already validated coordinate.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_at(&mut self, coord: Coord) -> MoveResult {
        if self.outcome.is_terminal() {
            trace!(outcome = %self.outcome, "Move rejected, game over");
            return MoveResult::Rejected(Rejection::GameOver(self.outcome));
        }
        if !self.board.is_empty(coord) {
            trace!(%coord, "Move rejected, cell occupied");
            return MoveResult::Rejected(Rejection::CellOccupied(coord));
        }

        let mark = self.current_player;
        self.board.set(coord, Cell::Occupied(mark));
        self.free_cells -= 1;
        let record = MoveRecord::new(mark, coord);
        self.history.push(record);

        let event = if rules::completes_line(&self.board, coord) {
            self.finish(Outcome::Won(mark), ScoreCategory::win_for(mark));
            GameEvent::GameWon(mark)
        } else if self.free_cells == 0 {
            self.finish(Outcome::Tie, ScoreCategory::Ties);
            GameEvent::GameTied
        } else {
            self.current_player = mark.opponent();
            debug!(%record, next = %self.current_player, "Move accepted");
            GameEvent::MoveAccepted(self.current_player)
        };

        invariants::debug_check(self);
        self.subscribers.publish(event);
        MoveResult::Accepted(event)
    }

    fn finish(&mut self, outcome: Outcome, category: ScoreCategory) {
        self.outcome = outcome;
        self.leaderboard.record(category);
        info!(
            %outcome,
            x_wins = self.leaderboard.x_wins(),
            o_wins = self.leaderboard.o_wins(),
            ties = self.leaderboard.ties(),
            "Game finished"
        );
    }

    /// Clears the board for a new game. The leaderboard is kept.
    #[instrument(skip(self))]
    pub fn start_new_game(&mut self) {
        self.board = Board::new();
        self.current_player = Mark::X;
        self.outcome = Outcome::InProgress;
        self.free_cells = 9;
        self.history.clear();
        info!(games_played = self.leaderboard.total_games(), "New game started");

        invariants::debug_check(self);
        self.subscribers.publish(GameEvent::GameReset);
    }

    /// Registers an event subscriber.
    ///
    /// The receiver gets every event published after this call, in order.
    /// Dropping it unsubscribes.
    pub fn subscribe(&mut self) -> EventReceiver {
        self.subscribers.subscribe()
    }

    /// Number of subscribers still registered.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Player whose mark the next accepted move places. After a win this is
    /// the winner.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Status of the current game.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Cross-game tally.
    pub fn leaderboard(&self) -> Leaderboard {
        self.leaderboard
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Contents of a single cell.
    pub fn cell(&self, coord: Coord) -> Cell {
        self.board.get(coord)
    }

    /// Empty cells remaining on the current board.
    pub fn free_cells(&self) -> usize {
        self.free_cells as usize
    }

    /// Moves played in the current game, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Serializable copy of the engine state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.board.clone(),
            self.current_player,
            self.outcome,
            self.free_cells(),
            self.history.clone(),
            self.leaderboard,
        )
    }

    #[cfg(test)]
    pub(crate) fn corrupt_cell_for_test(&mut self, row: usize, col: usize, cell: Cell) {
        if let Ok(coord) = Coord::new(row, col) {
            self.board.set(coord, cell);
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) -> Vec<MoveResult> {
        moves
            .iter()
            .map(|&(row, col)| engine.apply_move(row, col).expect("on the board"))
            .collect()
    }

    #[test]
    fn test_first_move_flips_player() {
        let mut engine = GameEngine::new();
        let result = engine.apply_move(1, 1).expect("on the board");

        assert_eq!(result, MoveResult::Accepted(GameEvent::MoveAccepted(Mark::O)));
        assert_eq!(engine.current_player(), Mark::O);
        assert_eq!(engine.free_cells(), 8);
        assert_eq!(engine.cell(Coord::new(1, 1).expect("on the board")), Cell::Occupied(Mark::X));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[(0, 0)]);
        let before = engine.snapshot();

        let result = engine.apply_move(0, 0).expect("on the board");

        assert!(matches!(result, MoveResult::Rejected(Rejection::CellOccupied(_))));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_invalid_coordinate_is_error() {
        let mut engine = GameEngine::new();
        let before = engine.snapshot();

        assert_eq!(
            engine.apply_move(3, 0),
            Err(EngineError::InvalidCoordinate { row: 3, col: 0 })
        );
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_win_records_leaderboard_once() {
        let mut engine = GameEngine::new();
        let results = play(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

        assert_eq!(results.last(), Some(&MoveResult::Accepted(GameEvent::GameWon(Mark::X))));
        assert_eq!(engine.outcome(), Outcome::Won(Mark::X));
        assert_eq!(*engine.leaderboard().x_wins(), 1);
        assert_eq!(engine.leaderboard().total_games(), 1);
    }

    #[test]
    fn test_terminal_game_rejects_moves() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        let before = engine.snapshot();

        let result = engine.apply_move(2, 0).expect("on the board");

        assert_eq!(
            result,
            MoveResult::Rejected(Rejection::GameOver(Outcome::Won(Mark::X)))
        );
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_new_game_keeps_leaderboard() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        engine.start_new_game();

        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.current_player(), Mark::X);
        assert_eq!(engine.outcome(), Outcome::InProgress);
        assert!(engine.history().is_empty());
        assert_eq!(*engine.leaderboard().x_wins(), 1);
    }

    #[test]
    fn test_history_records_moves() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[(2, 2), (0, 1)]);

        let history: Vec<_> = engine.history().iter().map(|m| (m.mark, m.coord.index())).collect();
        assert_eq!(history, vec![(Mark::X, 8), (Mark::O, 1)]);
    }
}
