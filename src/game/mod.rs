//! Game controller: the finite state machine over turns.

pub mod controller;
pub mod error;
pub mod output;

pub use controller::{GameController, GameState};
pub use error::TurnError;
pub use output::{Identity, Span, StepOutput};
