//! Turns engine events into status text and cues.

use std::io::{self, Write};
use tictactoe_engine::{EventReceiver, GameEvent, Leaderboard, Mark};
use tracing::debug;

/// Feedback a richer front end would play as sound or animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Cue {
    /// A move was made and the game goes on.
    Move,
    /// A player completed a line.
    Win,
    /// The board filled up.
    Tie,
}

impl Cue {
    /// Cue for an event; a reset has none.
    pub fn for_event(event: GameEvent) -> Option<Self> {
        match event {
            GameEvent::MoveAccepted(_) => Some(Cue::Move),
            GameEvent::GameWon(_) => Some(Cue::Win),
            GameEvent::GameTied => Some(Cue::Tie),
            GameEvent::GameReset => None,
        }
    }
}

/// Status line for an event.
pub fn status_line(event: GameEvent) -> String {
    match event {
        GameEvent::MoveAccepted(next) => format!("{}'s Turn", next),
        GameEvent::GameWon(mark) => format!("{} Wins!", mark),
        GameEvent::GameTied => "Tie Game!".to_string(),
        GameEvent::GameReset => format!("{}'s Turn", Mark::X),
    }
}

/// Leaderboard summary line.
pub fn leaderboard_line(leaderboard: &Leaderboard) -> String {
    format!(
        "Leaderboard - X: {} | O: {} | Ties: {}",
        leaderboard.x_wins(),
        leaderboard.o_wins(),
        leaderboard.ties()
    )
}

/// Event subscriber that writes status updates.
#[derive(Debug)]
pub struct Presenter {
    events: EventReceiver,
    status: String,
    show_leaderboard: bool,
}

impl Presenter {
    /// Creates a presenter reading from an engine subscription.
    pub fn new(events: EventReceiver, show_leaderboard: bool) -> Self {
        Self {
            events,
            status: status_line(GameEvent::GameReset),
            show_leaderboard,
        }
    }

    /// Status line as of the last event seen.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Writes output for every pending event.
    ///
    /// Win and tie cues ring the terminal bell; the leaderboard is printed
    /// after a finished game when enabled.
    pub fn pump(&mut self, leaderboard: &Leaderboard, out: &mut impl Write) -> io::Result<()> {
        while let Ok(event) = self.events.try_recv() {
            self.status = status_line(event);
            let cue = Cue::for_event(event);
            debug!(%event, cue = ?cue, "Presenting event");

            match cue {
                Some(Cue::Win | Cue::Tie) => {
                    writeln!(out, "\x07  {}", self.status)?;
                    if self.show_leaderboard {
                        writeln!(out, "  {}", leaderboard_line(leaderboard))?;
                    }
                }
                Some(Cue::Move) | None => writeln!(out, "  {}", self.status)?,
            }
        }
        Ok(())
    }
}
