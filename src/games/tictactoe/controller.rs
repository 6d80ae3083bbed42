//! Game-state controller with time travel.
//!
//! The controller owns the move history, a pointer into it, and the
//! move-list display order. Whose turn it is and whether the game is over
//! are never stored; both are recomputed from the board at the current
//! step, so jumping anywhere in history yields a consistent state.

use super::action::{ControllerError, Intent, SelectOutcome};
use super::history::{History, MoveRecord};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::{Evaluation, evaluate};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// History, current step, and display order for one game.
///
/// Deserialization rejects a history that breaks the history invariants and
/// a step past its end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ControllerSnapshot")]
pub struct GameController {
    history: History,
    current_step: usize,
    reversed_display: bool,
}

/// Unchecked serialized form of [`GameController`].
#[derive(Deserialize)]
struct ControllerSnapshot {
    history: History,
    current_step: usize,
    reversed_display: bool,
}

impl TryFrom<ControllerSnapshot> for GameController {
    type Error = ControllerError;

    fn try_from(snapshot: ControllerSnapshot) -> Result<Self, Self::Error> {
        if let Err(violations) = HistoryInvariants::check_all(&snapshot.history) {
            let reasons = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ControllerError::InvalidHistory(reasons));
        }
        if snapshot.current_step >= snapshot.history.len() {
            return Err(ControllerError::StepOutOfRange {
                step: snapshot.current_step,
                len: snapshot.history.len(),
            });
        }
        Ok(Self {
            history: snapshot.history,
            current_step: snapshot.current_step,
            reversed_display: snapshot.reversed_display,
        })
    }
}

impl GameController {
    /// A fresh game: empty board, X to move, forward move list.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_step: 0,
            reversed_display: false,
        }
    }

    /// A fresh game with the given move-list order.
    pub fn with_reversed_display(reversed: bool) -> Self {
        Self {
            reversed_display: reversed,
            ..Self::new()
        }
    }

    /// The full history, including entries after the current step.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the snapshot being viewed.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Whether the move list is shown newest first.
    pub fn is_reversed(&self) -> bool {
        self.reversed_display
    }

    /// The record at the current step.
    pub fn current_record(&self) -> &MoveRecord {
        // current_step is kept < history.len() by every mutator.
        &self.history.records()[self.current_step]
    }

    /// The board at the current step.
    pub fn current_board(&self) -> &Board {
        self.current_record().board()
    }

    /// Player to move at the current step.
    pub fn active_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Judgement of the board at the current step.
    pub fn evaluation(&self) -> Evaluation {
        evaluate(self.current_board())
    }

    /// Places the active player's mark at `position`.
    ///
    /// Ignored when the current board is decided or the square is taken.
    /// Otherwise every entry after the current step is discarded before the
    /// new snapshot is appended.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.active_player()))]
    pub fn select_cell(&mut self, position: Position) -> SelectOutcome {
        if self.evaluation().is_over() {
            debug!(%position, "Ignoring move on a decided board");
            return SelectOutcome::GameOver;
        }
        if !self.current_board().is_empty(position) {
            debug!(%position, "Ignoring move on an occupied square");
            return SelectOutcome::Occupied;
        }

        let player = self.active_player();
        let next = self.current_board().with_mark(position, player);

        self.history.truncate_after(self.current_step);
        self.current_step = self.history.push(MoveRecord::new(next, position));
        info!(%position, %player, step = self.current_step, "Mark placed");

        debug_assert!(
            HistoryInvariants::check_all(&self.history).is_ok(),
            "history invariants violated after move"
        );
        SelectOutcome::Placed(player)
    }

    /// [`select_cell`](Self::select_cell) for a raw board index (0-8).
    pub fn select_index(&mut self, index: usize) -> Result<SelectOutcome, ControllerError> {
        let position = Position::from_index(index).ok_or(ControllerError::CellOutOfRange(index))?;
        Ok(self.select_cell(position))
    }

    /// Views the snapshot at `step` without discarding anything.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), ControllerError> {
        if step >= self.history.len() {
            return Err(ControllerError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.current_step = step;
        debug!(step, "Jumped in history");
        Ok(())
    }

    /// Sets the move-list order. Game state is untouched.
    #[instrument(skip(self))]
    pub fn set_reversed_display(&mut self, reversed: bool) {
        self.reversed_display = reversed;
    }

    /// Flips the move-list order.
    pub fn toggle_reversed_display(&mut self) {
        self.set_reversed_display(!self.reversed_display);
    }

    /// Starts over, keeping the display order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        *self = Self::with_reversed_display(self.reversed_display);
    }

    /// Applies an intent and reports whether anything changed.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> Result<bool, ControllerError> {
        let before = (self.current_step, self.history.len(), self.reversed_display);
        match intent {
            Intent::SelectCell(position) => return Ok(self.select_cell(position).is_placed()),
            Intent::JumpTo(step) => self.jump_to(step)?,
            Intent::SetReversed(reversed) => self.set_reversed_display(reversed),
            Intent::ToggleReversed => self.toggle_reversed_display(),
            Intent::Restart => {
                let changed = self.history.len() > 1;
                self.restart();
                return Ok(changed);
            }
        }
        Ok(before != (self.current_step, self.history.len(), self.reversed_display))
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
