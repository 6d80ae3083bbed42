//! Tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Games**: board types, the pure win/draw evaluator, and the
//!   [`GameController`] holding history, current step and display order
//! - **View**: [`DisplayModel`], a pure projection of controller state that
//!   frontends re-derive after every operation
//! - **TUI**: ratatui frontend driven by key events
//! - **Script**: non-interactive application of [`Intent`]s
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{DisplayModel, GameController, Player, Position};
//!
//! let mut game = GameController::new();
//! game.select_cell(Position::TopLeft);
//! assert_eq!(game.active_player(), Player::O);
//!
//! game.jump_to(0).unwrap();
//! let model = DisplayModel::from_controller(&game);
//! assert_eq!(model.status(), "Next player: X");
//! assert_eq!(model.moves().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod games;
pub mod script;
pub mod tui;
pub mod view;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, ControllerError, Evaluation, GameController, History, Intent,
    IntentParseError, MoveRecord, Player, Position, SelectOutcome, Square, WinningLine, evaluate,
};

// Crate-level exports - Rendering and scripting
pub use script::{ScriptError, parse_intents, run_script};
pub use view::{CellView, DisplayModel, MoveEntry, move_label};
