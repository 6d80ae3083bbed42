//! Tic-tac-toe with move history and time travel.

mod action;
mod controller;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{ControllerError, Intent, IntentParseError, SelectOutcome};
pub use controller::GameController;
pub use history::{History, MoveRecord};
pub use position::Position;
pub use rules::{Evaluation, WinningLine, evaluate};
pub use types::{Board, BoardParseError, Player, Square};
