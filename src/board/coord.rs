//! Board sizes and card coordinates.

use serde::{Deserialize, Serialize};

/// Supported board sizes.
///
/// The grid is always square with an even side, so every cell can belong to
/// a pair. Only 4x4 and 6x6 are offered: the icon bank caps out at 18 pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSize {
    /// 4x4 grid, 8 pairs.
    Four,
    /// 6x6 grid, 18 pairs.
    Six,
}

impl BoardSize {
    /// Parse a board size from raw user input.
    ///
    /// Accepts exactly the strings `"4"` and `"6"`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "4" => Some(BoardSize::Four),
            "6" => Some(BoardSize::Six),
            _ => None,
        }
    }

    /// Side length of the grid.
    #[must_use]
    pub const fn side(self) -> usize {
        match self {
            BoardSize::Four => 4,
            BoardSize::Six => 6,
        }
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cells(self) -> usize {
        self.side() * self.side()
    }

    /// Number of icon pairs on the board.
    #[must_use]
    pub const fn pairs(self) -> usize {
        self.cells() / 2
    }
}

/// Zero-based (row, col) cell coordinate.
///
/// Carries no board-size information; range checking is the board's job
/// (`Board::card_exists`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index (0 = row "A").
    pub row: usize,
    /// Column index (0 = column "1").
    pub col: usize,
}

impl Coord {
    /// Create a coordinate from raw indices.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parse a two-character coordinate like `"A1"` or `"c4"`.
    ///
    /// The first character is a row letter (case-insensitive), the second a
    /// 1-based column digit. Returns `None` if the input is not exactly one
    /// letter followed by one digit. Does not range-check against any board.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.chars();
        let row_char = chars.next()?;
        let col_char = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        if !row_char.is_ascii_alphabetic() || !col_char.is_ascii_digit() {
            return None;
        }

        let row = (row_char.to_ascii_uppercase() as usize) - ('A' as usize);
        // Column "0" converts to index -1; leave it to the range check,
        // which treats the wrapped value as out of bounds.
        let col = (col_char as usize - '0' as usize).wrapping_sub(1);

        Some(Self { row, col })
    }

    /// Row letter for display ("A", "B", ...).
    #[must_use]
    pub fn row_letter(self) -> char {
        (b'A' + self.row as u8) as char
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.col + 1)
    }
}
