//! Board: card arrangement, coordinates, and cell state.
//!
//! The board owns the grid's icon layout and per-cell visibility, and
//! exposes the queries and mutators the controller drives: opening cards,
//! resolving a turn, and checking match/win conditions.

pub mod coord;
pub mod grid;

pub use coord::{BoardSize, Coord};
pub use grid::{Board, CellState, Icon, DEFAULT_ICON_BANK};
