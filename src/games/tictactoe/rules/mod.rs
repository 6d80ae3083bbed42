//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from board storage and from the controller so that any
//! snapshot in history can be judged on its own.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinningLine, check_winner};

use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of judging a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evaluation {
    /// A player completed a line.
    Won {
        /// The player owning the line.
        winner: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// The board is full and no line is complete.
    Draw,
    /// Moves remain and no line is complete.
    InProgress,
}

impl Evaluation {
    /// The winner, if the board is won.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Evaluation::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// The winning line, if the board is won.
    pub fn line(&self) -> Option<WinningLine> {
        match self {
            Evaluation::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// True for a won or drawn board.
    pub fn is_over(&self) -> bool {
        !matches!(self, Evaluation::InProgress)
    }

    /// True for a drawn board.
    pub fn is_draw(&self) -> bool {
        matches!(self, Evaluation::Draw)
    }
}

/// Judges a board: winner first, then draw, otherwise in progress.
#[instrument]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((winner, line)) = check_winner(board) {
        return Evaluation::Won { winner, line };
    }
    if is_full(board) {
        Evaluation::Draw
    } else {
        Evaluation::InProgress
    }
}
