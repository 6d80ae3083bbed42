//! Non-interactive play: apply a list of intents and report the result.

use crate::games::tictactoe::{ControllerError, GameController, Intent, IntentParseError};
use crate::view::DisplayModel;
use derive_more::{Display, Error, From};
use tracing::{debug, instrument, warn};

/// Error running a script.
#[derive(Debug, Display, Error, From)]
pub enum ScriptError {
    /// An intent could not be parsed.
    #[display("{}", _0)]
    Parse(IntentParseError),
    /// An intent named an invalid step or cell.
    #[display("Intent #{} ({}) failed: {}", index, intent, source)]
    #[from(skip)]
    Apply {
        /// 1-based position of the intent in the script.
        index: usize,
        /// The intent that failed.
        intent: Intent,
        /// What went wrong.
        source: ControllerError,
    },
}

/// Parses every intent before applying any of them.
#[instrument(skip(inputs), fields(count = inputs.len()))]
pub fn parse_intents<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<Intent>, ScriptError> {
    inputs
        .iter()
        .map(|s| s.as_ref().parse::<Intent>().map_err(ScriptError::from))
        .collect()
}

/// Applies `intents` to `controller` in order, stopping at the first error.
///
/// Moves that the rules ignore (occupied square, decided board) are not
/// errors; they are logged and skipped.
#[instrument(skip(controller, intents), fields(count = intents.len()))]
pub fn run_script(
    controller: &mut GameController,
    intents: &[Intent],
) -> Result<DisplayModel, ScriptError> {
    for (i, intent) in intents.iter().enumerate() {
        match controller.dispatch(*intent) {
            Ok(true) => debug!(%intent, "Applied"),
            Ok(false) => warn!(%intent, "Intent had no effect"),
            Err(source) => {
                return Err(ScriptError::Apply {
                    index: i + 1,
                    intent: *intent,
                    source,
                });
            }
        }
    }
    Ok(DisplayModel::from_controller(controller))
}
