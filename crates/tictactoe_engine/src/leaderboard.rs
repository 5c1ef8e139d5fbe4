//! Cross-game score tally.

use crate::types::{Mark, Outcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Leaderboard bucket. Distinct from [`Outcome`]: `Ties` is a counter key,
/// `Outcome::Tie` is game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum ScoreCategory {
    /// Games won by X.
    XWins,
    /// Games won by O.
    OWins,
    /// Games ending in a tie.
    Ties,
}

impl ScoreCategory {
    /// Category credited when `mark` wins.
    pub fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::X => ScoreCategory::XWins,
            Mark::O => ScoreCategory::OWins,
        }
    }

    /// Category credited for a terminal outcome; `None` while in progress.
    pub fn for_outcome(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Won(mark) => Some(Self::win_for(mark)),
            Outcome::Tie => Some(ScoreCategory::Ties),
        }
    }
}

/// Win and tie counters. Only ever incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Leaderboard {
    /// Games won by X.
    x_wins: u64,
    /// Games won by O.
    o_wins: u64,
    /// Games ending in a tie.
    ties: u64,
}

impl Leaderboard {
    /// Counter for one category.
    pub fn get(&self, category: ScoreCategory) -> u64 {
        match category {
            ScoreCategory::XWins => self.x_wins,
            ScoreCategory::OWins => self.o_wins,
            ScoreCategory::Ties => self.ties,
        }
    }

    /// Completed games counted so far.
    pub fn total_games(&self) -> u64 {
        self.x_wins + self.o_wins + self.ties
    }

    /// Counts one completed game.
    pub(crate) fn record(&mut self, category: ScoreCategory) {
        let counter = match category {
            ScoreCategory::XWins => &mut self.x_wins,
            ScoreCategory::OWins => &mut self.o_wins,
            ScoreCategory::Ties => &mut self.ties,
        };
        *counter += 1;
    }
}
