//! Thread-safe handle around a single engine.

use crate::action::MoveResult;
use crate::engine::GameEngine;
use crate::error::EngineError;
use crate::events::EventReceiver;
use crate::leaderboard::Leaderboard;
use crate::snapshot::Snapshot;
use crate::types::{Mark, Outcome};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{error, instrument};

/// Cloneable, mutex-guarded engine.
///
/// The whole engine is one critical section: a move's legality check,
/// board mutation, leaderboard update and event emission all happen under
/// a single lock acquisition.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<GameEngine>>,
}

impl SharedEngine {
    /// Creates a handle around a fresh engine.
    #[instrument]
    pub fn new() -> Self {
        Self::from_engine(GameEngine::new())
    }

    /// Creates a handle around an existing engine.
    pub fn from_engine(engine: GameEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, GameEngine>, EngineError> {
        self.inner.lock().map_err(|_| {
            error!("Engine lock poisoned");
            EngineError::LockPoisoned
        })
    }

    /// See [`GameEngine::apply_move`].
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidCoordinate`] for off-board input,
    /// [`EngineError::LockPoisoned`] if another caller panicked mid-operation.
    #[instrument(skip(self))]
    pub fn apply_move(&self, row: usize, col: usize) -> Result<MoveResult, EngineError> {
        self.lock()?.apply_move(row, col)
    }

    /// See [`GameEngine::start_new_game`].
    #[instrument(skip(self))]
    pub fn start_new_game(&self) -> Result<(), EngineError> {
        self.lock()?.start_new_game();
        Ok(())
    }

    /// See [`GameEngine::subscribe`].
    pub fn subscribe(&self) -> Result<EventReceiver, EngineError> {
        Ok(self.lock()?.subscribe())
    }

    /// See [`GameEngine::current_player`].
    pub fn current_player(&self) -> Result<Mark, EngineError> {
        Ok(self.lock()?.current_player())
    }

    /// See [`GameEngine::outcome`].
    pub fn outcome(&self) -> Result<Outcome, EngineError> {
        Ok(self.lock()?.outcome())
    }

    /// See [`GameEngine::leaderboard`].
    pub fn leaderboard(&self) -> Result<Leaderboard, EngineError> {
        Ok(self.lock()?.leaderboard())
    }

    /// Consistent copy of the full state, taken under one lock.
    pub fn snapshot(&self) -> Result<Snapshot, EngineError> {
        Ok(self.lock()?.snapshot())
    }
}
