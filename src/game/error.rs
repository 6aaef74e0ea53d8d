//! Recoverable input-validation errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything that can go wrong with one line of user input.
///
/// All variants are recoverable: the controller reports the message and
/// stays in the same state, so the shell re-issues the same prompt. There is
/// no abort path inside the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum TurnError {
    /// Board size input was not "4" or "6".
    #[error("invalid board size")]
    InvalidBoardSize,

    /// Coordinate input was not one letter followed by one digit.
    #[error("the input format is incorrect")]
    InvalidCoordinateFormat,

    /// Coordinate parsed but lies outside the grid.
    #[error("the card coordinate is not valid")]
    CoordinateOutOfRange,

    /// The chosen card's pair was already found and cleared.
    #[error("the card has already been matched")]
    CardAlreadyMatched,

    /// The second flip named the card just opened as the first flip.
    #[error("the card was just opened")]
    CardAlreadyOpenThisTurn,

    /// Restart input was not "Y" or "N" (case-insensitive).
    #[error("invalid input")]
    InvalidRestartChoice,
}
