//! Core types: players, scores, RNG.
//!
//! These are the building blocks shared by the board and the controller.

pub mod player;
pub mod rng;

pub use player::{Player, PlayerColor, PlayerId, Players};
pub use rng::GameRng;
