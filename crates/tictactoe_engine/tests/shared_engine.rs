//! Tests for the mutex-guarded engine handle.

use std::thread;
use tictactoe_engine::{GameEvent, Mark, MoveResult, Outcome, SharedEngine};

#[test]
fn test_shared_engine_plays_a_game() {
    let engine = SharedEngine::new();
    for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
        engine.apply_move(row, col).expect("Valid move");
    }

    assert_eq!(engine.outcome().expect("Lock"), Outcome::Won(Mark::X));
    assert_eq!(*engine.leaderboard().expect("Lock").x_wins(), 1);

    engine.start_new_game().expect("Lock");
    assert_eq!(engine.current_player().expect("Lock"), Mark::X);
    assert_eq!(*engine.leaderboard().expect("Lock").x_wins(), 1);
}

#[test]
fn test_racing_movers_claim_each_cell_once() {
    let engine = SharedEngine::new();
    let mut events = engine.subscribe().expect("Lock");

    // Every thread tries every cell; exactly one move per cell can win the race.
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            thread::spawn(move || {
                (0..9)
                    .filter(|i| {
                        engine
                            .apply_move(i / 3, i % 3)
                            .expect("Valid move")
                            .is_accepted()
                    })
                    .count()
            })
        })
        .collect();
    let accepted: usize = handles
        .into_iter()
        .map(|h| h.join().expect("Thread finished"))
        .sum();

    let snapshot = engine.snapshot().expect("Lock");
    assert_eq!(accepted, snapshot.history().len());
    assert_eq!(snapshot.leaderboard().total_games(), 1);
    assert!(snapshot.outcome().is_terminal());

    let received: Vec<_> = std::iter::from_fn(|| events.try_recv().ok()).collect();
    assert_eq!(received.len(), accepted);
    assert!(matches!(
        received.last(),
        Some(GameEvent::GameWon(_) | GameEvent::GameTied)
    ));
}

#[test]
fn test_invalid_coordinate_through_handle() {
    let engine = SharedEngine::new();
    assert!(engine.apply_move(0, 3).is_err());
    assert!(matches!(
        engine.apply_move(0, 0),
        Ok(MoveResult::Accepted(GameEvent::MoveAccepted(Mark::O)))
    ));
}
