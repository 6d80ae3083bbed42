//! History consistency invariant: records agree with their boards.

use super::super::{History, Square};
use super::Invariant;

/// Invariant: record k has k marks and names the square it filled.
///
/// The first record is the empty starting board with no position. Every
/// later record carries the position that was empty before and occupied
/// after.
pub struct HistoryConsistentInvariant;

impl Invariant<History> for HistoryConsistentInvariant {
    fn holds(history: &History) -> bool {
        let records = history.records();
        let Some(first) = records.first() else {
            return false;
        };
        if first.position().is_some() || first.board().occupied() != 0 {
            return false;
        }

        records.windows(2).enumerate().all(|(k, pair)| {
            let (prev, next) = (&pair[0], &pair[1]);
            match *next.position() {
                Some(pos) => {
                    next.board().occupied() == k + 1
                        && prev.board().get(pos) == Square::Empty
                        && next.board().get(pos) != Square::Empty
                }
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "History records match the squares they filled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, GameController, MoveRecord, Player, Position};

    #[test]
    fn test_empty_history_holds() {
        assert!(HistoryConsistentInvariant::holds(&History::new()));
    }

    #[test]
    fn test_no_records_violates() {
        assert!(!HistoryConsistentInvariant::holds(&History::from_records(Vec::new())));
    }

    #[test]
    fn test_full_game_holds() {
        let mut controller = GameController::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            controller.select_index(index).unwrap();
        }
        assert!(HistoryConsistentInvariant::holds(controller.history()));
        assert_eq!(controller.history().len(), 10);
    }

    #[test]
    fn test_wrong_position_violates() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        let history = History::from_records(vec![
            MoveRecord::start(),
            MoveRecord::new(board, Position::TopLeft),
        ]);
        assert!(!HistoryConsistentInvariant::holds(&history));
    }
}
