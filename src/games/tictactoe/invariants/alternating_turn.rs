//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{History, Player, Position, Square};
use super::Invariant;

/// Invariant: the mark added at step k belongs to the player of step k - 1.
///
/// X places on odd steps and O on even steps, so every snapshot holds
/// either as many X marks as O marks or exactly one more.
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        let placed_correctly = history.records().windows(2).enumerate().all(|(k, pair)| {
            let expected = Square::Occupied(Player::for_step(k));
            let (prev, next) = (pair[0].board(), pair[1].board());
            Position::ALL
                .iter()
                .filter(|pos| prev.get(**pos) != next.get(**pos))
                .all(|pos| next.get(*pos) == expected)
        });

        let balanced = history.records().iter().all(|record| {
            let board = record.board();
            let (x, o) = (board.count(Player::X), board.count(Player::O));
            x == o || x == o + 1
        });

        placed_correctly && balanced
    }

    fn description() -> &'static str {
        "Players alternate X, O, X, O, ..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, GameController, MoveRecord};

    #[test]
    fn test_empty_history_holds() {
        assert!(AlternatingTurnInvariant::holds(&History::new()));
    }

    #[test]
    fn test_controller_moves_hold() {
        let mut controller = GameController::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            controller.select_cell(pos);
        }
        assert!(AlternatingTurnInvariant::holds(controller.history()));
    }

    #[test]
    fn test_o_first_violates() {
        let board = Board::new().with_mark(Position::Center, Player::O);
        let history =
            History::from_records(vec![MoveRecord::start(), MoveRecord::new(board, Position::Center)]);
        assert!(!AlternatingTurnInvariant::holds(&history));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let first = Board::new().with_mark(Position::Center, Player::X);
        let second = first.with_mark(Position::TopLeft, Player::X);
        let history = History::from_records(vec![
            MoveRecord::start(),
            MoveRecord::new(first, Position::Center),
            MoveRecord::new(second, Position::TopLeft),
        ]);
        assert!(!AlternatingTurnInvariant::holds(&history));
    }
}
