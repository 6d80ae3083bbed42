//! Monotonic board invariant: squares never change once set.

use super::super::{History, Position, Square};
use super::Invariant;

/// Invariant: each snapshot adds exactly one mark to the previous one.
///
/// Once a square transitions from Empty to Occupied it keeps that mark in
/// every later snapshot, and no snapshot fills more than one square.
pub struct MonotonicBoardInvariant;

impl Invariant<History> for MonotonicBoardInvariant {
    fn holds(history: &History) -> bool {
        history.records().windows(2).all(|pair| {
            let (prev, next) = (pair[0].board(), pair[1].board());
            let kept = Position::ALL
                .iter()
                .all(|pos| prev.get(*pos) == Square::Empty || prev.get(*pos) == next.get(*pos));
            kept && next.occupied() == prev.occupied() + 1
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark and never overwrites"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, GameController, MoveRecord, Player};

    #[test]
    fn test_controller_history_holds() {
        let mut controller = GameController::new();
        controller.select_cell(Position::Center);
        controller.select_cell(Position::TopLeft);
        assert!(MonotonicBoardInvariant::holds(controller.history()));
    }

    #[test]
    fn test_overwrite_violates() {
        let first = Board::new().with_mark(Position::Center, Player::X);
        let second = Board::new().with_mark(Position::Center, Player::O);
        let history = History::from_records(vec![
            MoveRecord::start(),
            MoveRecord::new(first, Position::Center),
            MoveRecord::new(second, Position::Center),
        ]);
        assert!(!MonotonicBoardInvariant::holds(&history));
    }

    #[test]
    fn test_skipped_snapshot_violates() {
        let board = Board::new()
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::TopLeft, Player::O);
        let history = History::from_records(vec![
            MoveRecord::start(),
            MoveRecord::new(board, Position::TopLeft),
        ]);
        assert!(!MonotonicBoardInvariant::holds(&history));
    }
}
