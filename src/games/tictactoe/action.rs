//! User intents for the game controller.
//!
//! Intents are what a frontend produces in response to a key press or a
//! scripted step. They carry no side effects until the controller
//! dispatches them.

use super::{Player, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A single user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Intent {
    /// Place the active player's mark.
    #[display("select {}", _0)]
    SelectCell(Position),
    /// Travel to a history step.
    #[display("jump to step {}", _0)]
    JumpTo(usize),
    /// Set the move-list order.
    #[display("reversed = {}", _0)]
    SetReversed(bool),
    /// Flip the move-list order.
    #[display("toggle order")]
    ToggleReversed,
    /// Start over with an empty board.
    #[display("restart")]
    Restart,
}

/// Why a cell selection was ignored, or who moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SelectOutcome {
    /// The mark was placed.
    #[display("{} played", _0)]
    Placed(Player),
    /// The square already holds a mark.
    #[display("square is occupied")]
    Occupied,
    /// The board at the current step is already won or drawn.
    #[display("game is already over")]
    GameOver,
}

impl SelectOutcome {
    /// True when a mark was placed.
    pub fn is_placed(&self) -> bool {
        matches!(self, SelectOutcome::Placed(_))
    }
}

/// Error from a controller operation given an invalid argument or state.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ControllerError {
    /// History step past the end of history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time.
        len: usize,
    },
    /// Board index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(#[error(not(source))] usize),
    /// Restored history breaks the history invariants.
    #[display("History is inconsistent: {}", _0)]
    InvalidHistory(#[error(not(source))] String),
}

/// Error parsing an intent from text.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid intent {:?}: {} at {}:{}", input, message, file, line)]
pub struct IntentParseError {
    /// The rejected input.
    pub input: String,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl IntentParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(skip(input, message))]
    pub fn new(input: impl Into<String>, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            input: input.into(),
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl FromStr for Intent {
    type Err = IntentParseError;

    /// Accepts a board number (1-9) or label, `jump:N`, `reverse`,
    /// `forward`, `toggle` and `restart`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_lowercase();

        if let Some(step) = lower.strip_prefix("jump:") {
            return step
                .trim()
                .parse::<usize>()
                .map(Intent::JumpTo)
                .map_err(|e| IntentParseError::new(s, format!("bad step: {}", e)));
        }

        match lower.as_str() {
            "reverse" | "reversed" => Ok(Intent::SetReversed(true)),
            "forward" => Ok(Intent::SetReversed(false)),
            "toggle" => Ok(Intent::ToggleReversed),
            "restart" | "new" => Ok(Intent::Restart),
            _ => Position::from_label_or_number(trimmed)
                .map(Intent::SelectCell)
                .ok_or_else(|| IntentParseError::new(s, "not a cell, jump, order or restart")),
        }
    }
}
