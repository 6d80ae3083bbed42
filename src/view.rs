//! Render-ready projection of controller state.
//!
//! [`DisplayModel::from_controller`] is a pure function; frontends call it
//! again after every controller operation and draw only what it returns.

use crate::games::tictactoe::{Evaluation, GameController, MoveRecord, Position, Square};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// One board cell as it should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct CellView {
    /// Cell position.
    position: Position,
    /// Cell contents.
    square: Square,
    /// Whether the cell is part of the winning line.
    highlighted: bool,
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    step: usize,
    /// Button text.
    label: String,
    /// Entry for the last snapshot in history (drawn bold).
    is_latest: bool,
    /// Entry for the snapshot being viewed.
    is_current: bool,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct DisplayModel {
    /// Board cells in row-major order.
    cells: [CellView; 9],
    /// Status line.
    status: String,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
    /// Whether `moves` is newest first.
    reversed: bool,
    /// History step being viewed.
    current_step: usize,
    /// Judgement of the viewed board.
    evaluation: Evaluation,
}

impl DisplayModel {
    /// Derives the display model from controller state.
    #[instrument(skip(controller), fields(step = controller.current_step()))]
    pub fn from_controller(controller: &GameController) -> Self {
        let board = controller.current_board();
        let evaluation = controller.evaluation();
        let line = evaluation.line();

        let cells = Position::ALL.map(|position| CellView {
            position,
            square: board.get(position),
            highlighted: line.is_some_and(|l| l.contains(position)),
        });

        let status = match evaluation {
            Evaluation::Won { winner, .. } => format!("Winner: {}", winner),
            Evaluation::Draw => "No winner, game is a draw".to_string(),
            Evaluation::InProgress => format!("Next player: {}", controller.active_player()),
        };

        let last_step = controller.history().last_step();
        let mut moves: Vec<MoveEntry> = controller
            .history()
            .records()
            .iter()
            .enumerate()
            .map(|(step, record)| MoveEntry {
                step,
                label: move_label(step, record),
                is_latest: step == last_step,
                is_current: step == controller.current_step(),
            })
            .collect();
        if controller.is_reversed() {
            moves.reverse();
        }

        Self {
            cells,
            status,
            moves,
            reversed: controller.is_reversed(),
            current_step: controller.current_step(),
            evaluation,
        }
    }

    /// The cell at `position`.
    pub fn cell(&self, position: Position) -> &CellView {
        &self.cells[position.to_index()]
    }

    /// Plain-text rendering: board, status and move list.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, cell) in self.cells.iter().enumerate() {
            let symbol = match cell.square.player() {
                Some(player) if cell.highlighted => format!("[{}]", player),
                Some(player) => format!(" {} ", player),
                None => format!(" {} ", cell.position.number()),
            };
            out.push_str(&symbol);
            if i % 3 < 2 {
                out.push('|');
            } else if i < 8 {
                out.push_str("\n---+---+---\n");
            }
        }
        out.push_str("\n\n");
        out.push_str(&self.status);
        out.push('\n');
        for entry in &self.moves {
            let marker = if entry.is_current { '>' } else { ' ' };
            let latest = if entry.is_latest { " *" } else { "" };
            out.push_str(&format!("{} {}. {}{}\n", marker, entry.step, entry.label, latest));
        }
        out
    }
}

/// Label for the move-list entry at `step`.
pub fn move_label(step: usize, record: &MoveRecord) -> String {
    match record.coordinates() {
        Some((col, row)) if step > 0 => format!("Go to move #{}: ({}, {})", step, col, row),
        _ => "Go to game start".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    #[test]
    fn test_new_game_model() {
        let model = DisplayModel::from_controller(&GameController::new());
        assert_eq!(model.status(), "Next player: X");
        assert_eq!(model.moves().len(), 1);
        assert_eq!(model.moves()[0].label(), "Go to game start");
        assert!(*model.moves()[0].is_latest());
        assert!(*model.moves()[0].is_current());
        assert!(model.cells().iter().all(|c| !c.highlighted()));
    }

    #[test]
    fn test_winning_line_highlighted() {
        let mut controller = GameController::new();
        for index in [0, 3, 1, 4, 2] {
            controller.select_index(index).unwrap();
        }
        let model = DisplayModel::from_controller(&controller);
        assert_eq!(model.status(), "Winner: X");
        let lit: Vec<usize> = model
            .cells()
            .iter()
            .filter(|c| *c.highlighted())
            .map(|c| c.position().to_index())
            .collect();
        assert_eq!(lit, vec![0, 1, 2]);
        assert_eq!(*model.cell(Position::TopLeft).square(), Square::Occupied(Player::X));
    }

    #[test]
    fn test_labels_use_col_row() {
        let mut controller = GameController::new();
        controller.select_index(0).unwrap();
        controller.select_index(5).unwrap();
        let model = DisplayModel::from_controller(&controller);
        let labels: Vec<&str> = model.moves().iter().map(|m| m.label().as_str()).collect();
        assert_eq!(
            labels,
            vec!["Go to game start", "Go to move #1: (1, 1)", "Go to move #2: (3, 2)"]
        );
    }

    #[test]
    fn test_reversed_order_only_reorders() {
        let mut controller = GameController::new();
        controller.select_index(4).unwrap();
        controller.select_index(0).unwrap();
        controller.jump_to(1).unwrap();
        let forward = DisplayModel::from_controller(&controller);
        controller.set_reversed_display(true);
        let reversed = DisplayModel::from_controller(&controller);

        let mut expected = forward.moves().clone();
        expected.reverse();
        assert_eq!(reversed.moves(), &expected);
        assert_eq!(reversed.cells(), forward.cells());
        assert_eq!(reversed.status(), forward.status());
        assert!(*reversed.reversed());
        assert_eq!(reversed.moves()[0].step(), &2);
        assert!(*reversed.moves()[0].is_latest());
        assert!(*reversed.moves()[1].is_current());
    }

    #[test]
    fn test_draw_status() {
        let mut controller = GameController::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            controller.select_index(index).unwrap();
        }
        let model = DisplayModel::from_controller(&controller);
        assert_eq!(model.status(), "No winner, game is a draw");
        assert_eq!(model.evaluation(), &Evaluation::Draw);
    }

    #[test]
    fn test_text_rendering() {
        let mut controller = GameController::new();
        controller.select_index(4).unwrap();
        let text = DisplayModel::from_controller(&controller).to_text();
        assert!(text.starts_with(" 1 | 2 | 3 \n---+---+---\n 4 | X | 6 "));
        assert!(text.contains("Next player: O"));
        assert!(text.contains("> 1. Go to move #1: (2, 2) *"));
    }
}
