//! Application state and key handling.

use crate::games::tictactoe::{GameController, Intent, Position, SelectOutcome};
use crate::view::DisplayModel;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, instrument, warn};

use super::input::{digit_position, move_cursor};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The board; arrows move the cell cursor.
    Board,
    /// The move list; arrows move the selection.
    Moves,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: GameController,
    model: DisplayModel,
    cursor: Position,
    focus: Focus,
    selected: usize,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a fresh game.
    pub fn new(reversed: bool) -> Self {
        let controller = GameController::with_reversed_display(reversed);
        let model = DisplayModel::from_controller(&controller);
        Self {
            controller,
            model,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            notice: None,
            should_quit: false,
        }
    }

    /// The game controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Display model for the current state.
    pub fn model(&self) -> &DisplayModel {
        &self.model
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the move list, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Feedback from the last ignored action.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Char('r') => self.apply(Intent::ToggleReversed),
            KeyCode::Char('n') => self.apply(Intent::Restart),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key.code),
                Focus::Moves => self.move_selection(key.code),
            },
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.apply(Intent::SelectCell(self.cursor)),
                Focus::Moves => {
                    let step = self.model.moves().get(self.selected).map(|entry| *entry.step());
                    if let Some(step) = step {
                        self.apply(Intent::JumpTo(step));
                    }
                }
            },
            KeyCode::Char(c) => {
                if let Some(position) = digit_position(c) {
                    self.cursor = position;
                    self.apply(Intent::SelectCell(position));
                }
            }
            _ => {}
        }
    }

    /// Dispatches an intent and re-derives the display model.
    #[instrument(skip(self))]
    fn apply(&mut self, intent: Intent) {
        self.notice = None;

        if let Intent::SelectCell(position) = intent {
            match self.controller.select_cell(position) {
                SelectOutcome::Placed(player) => debug!(%player, %position, "Move accepted"),
                SelectOutcome::Occupied => {
                    let open = Position::valid_moves(self.controller.current_board())
                        .iter()
                        .map(|pos| pos.number().to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    self.notice = Some(format!(
                        "{} is already taken (open: {})",
                        position.label(),
                        open
                    ));
                }
                SelectOutcome::GameOver => {
                    self.notice =
                        Some("Game is over: jump back in history or press n".to_string());
                }
            }
        } else if let Err(e) = self.controller.dispatch(intent) {
            warn!(error = %e, "Intent rejected");
            self.notice = Some(e.to_string());
        }

        self.refresh();
    }

    /// Rebuilds the display model and keeps the list selection in range.
    fn refresh(&mut self) {
        self.model = DisplayModel::from_controller(&self.controller);
        self.selected = self.current_row().unwrap_or(0);
    }

    /// Row of the move list showing the current step.
    fn current_row(&self) -> Option<usize> {
        self.model.moves().iter().position(|entry| *entry.is_current())
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        };
        self.selected = self.current_row().unwrap_or(0);
        debug!(focus = ?self.focus, "Focus changed");
    }

    fn move_selection(&mut self, key: KeyCode) {
        let count = self.model.moves().len();
        self.selected = match key {
            KeyCode::Up | KeyCode::Left => self.selected.checked_sub(1).unwrap_or(count - 1),
            _ => (self.selected + 1) % count,
        };
    }
}
