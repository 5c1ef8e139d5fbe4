//! Events emitted to presentation layers.

use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::trace;

/// State transitions observed by subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameEvent {
    /// Move applied, game continues; carries the player to move next.
    #[display("Move accepted, {} to move", _0)]
    MoveAccepted(Mark),
    /// Move completed a line.
    #[display("{} wins", _0)]
    GameWon(Mark),
    /// Move filled the board without a line.
    #[display("Tie game")]
    GameTied,
    /// A new game was started.
    #[display("New game")]
    GameReset,
}

/// Receiving end of an engine subscription.
pub type EventReceiver = mpsc::UnboundedReceiver<GameEvent>;

/// Fan-out list of subscriber channels.
#[derive(Debug, Default)]
pub(crate) struct Subscribers {
    senders: Vec<mpsc::UnboundedSender<GameEvent>>,
}

/// Subscriptions belong to one engine; a copy starts with none.
impl Clone for Subscribers {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl Subscribers {
    /// Registers a new subscriber.
    pub(crate) fn subscribe(&mut self) -> EventReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders.push(tx);
        rx
    }

    /// Sends `event` to every live subscriber, dropping closed ones.
    pub(crate) fn publish(&mut self, event: GameEvent) {
        let before = self.senders.len();
        self.senders.retain(|tx| tx.send(event).is_ok());
        let pruned = before - self.senders.len();
        if pruned > 0 {
            trace!(pruned, %event, "Dropped closed subscribers");
        }
    }

    /// Number of live subscribers as of the last publish.
    pub(crate) fn len(&self) -> usize {
        self.senders.len()
    }
}
