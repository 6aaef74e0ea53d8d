//! # concentration
//!
//! A two-player memory-matching (concentration) card game for the terminal.
//!
//! Players take turns revealing pairs of hidden icons on a square grid.
//! Finding a matching pair scores a point and keeps the turn; a mismatch
//! passes it. The game ends when every pair has been matched, and the higher
//! score wins.
//!
//! ## Design Principles
//!
//! 1. **Core does no I/O**: `GameController::step` is a pure request/response
//!    call over one input line. All blocking (reading from the terminal)
//!    happens in the surrounding shell, one call at a time.
//!
//! 2. **Presentation stays outside**: the core tags its output with a
//!    display [`game::Identity`] instead of escape sequences; the shell maps
//!    identities to colors.
//!
//! 3. **Deterministic given its inputs**: the only randomness is card
//!    arrangement, confined to a seedable [`core::GameRng`].
//!
//! ## Modules
//!
//! - `core`: players, scores, RNG
//! - `board`: icon layout, cell state, coordinates, rendering
//! - `game`: the turn state machine, errors, tagged output
//! - `shell`: the interactive terminal loop

pub mod board;
pub mod core;
pub mod game;
pub mod shell;

// Re-export commonly used types
pub use crate::board::{Board, BoardSize, CellState, Coord, Icon};
pub use crate::core::{GameRng, Player, PlayerColor, PlayerId, Players};
pub use crate::game::{GameController, GameState, Identity, Span, StepOutput, TurnError};
pub use crate::shell::Shell;
