//! Exhaustive walk of every reachable game.
//!
//! Checks the incremental win detection against a full-board scan and the
//! engine invariants after every move of every possible game.

use tictactoe_engine::invariants::{EngineInvariants, InvariantSet};
use tictactoe_engine::rules::{check_winner, is_full};
use tictactoe_engine::{Coord, GameEngine, Leaderboard, MoveResult, Outcome};

#[derive(Default)]
struct Totals {
    games: u64,
    x_wins: u64,
    o_wins: u64,
    ties: u64,
}

fn walk(engine: &GameEngine, totals: &mut Totals) {
    for coord in Coord::ALL {
        let mut next = engine.clone();
        let before: Leaderboard = next.leaderboard();
        let mover = next.current_player();

        match next.apply_at(coord) {
            MoveResult::Rejected(_) => {
                assert!(!engine.board().is_empty(coord));
                continue;
            }
            MoveResult::Accepted(_) => {}
        }

        assert!(EngineInvariants::check_all(&next).is_ok());

        let expected = match check_winner(next.board()) {
            Some(mark) => Outcome::Won(mark),
            None if is_full(next.board()) => Outcome::Tie,
            None => Outcome::InProgress,
        };
        assert_eq!(next.outcome(), expected);

        match next.outcome() {
            Outcome::InProgress => {
                assert_eq!(next.current_player(), mover.opponent());
                assert_eq!(next.leaderboard(), before);
                walk(&next, totals);
            }
            Outcome::Won(mark) => {
                assert_eq!(mark, mover);
                assert_eq!(next.leaderboard().total_games(), before.total_games() + 1);
                totals.games += 1;
                match mark {
                    tictactoe_engine::Mark::X => totals.x_wins += 1,
                    tictactoe_engine::Mark::O => totals.o_wins += 1,
                }
            }
            Outcome::Tie => {
                assert_eq!(*next.leaderboard().ties(), before.ties() + 1);
                totals.games += 1;
                totals.ties += 1;
            }
        }
    }
}

#[test]
fn test_every_reachable_game() {
    let mut totals = Totals::default();
    walk(&GameEngine::new(), &mut totals);

    // Known counts for the full tic-tac-toe game tree.
    assert_eq!(totals.games, 255_168);
    assert_eq!(totals.x_wins, 131_184);
    assert_eq!(totals.o_wins, 77_904);
    assert_eq!(totals.ties, 46_080);
}
