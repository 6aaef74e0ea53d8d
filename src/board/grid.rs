//! The board: icon layout, per-cell visibility, and turn resolution.
//!
//! ## Model
//!
//! Two parallel grids, both row-major:
//!
//! - `layout` - the icon assigned to each cell, fixed once arranged and
//!   immutable until the next `arrange_cards` call (new game).
//! - `cells` - the visibility state of each cell: `Hidden`, `Revealed`
//!   (showing its layout icon this turn), or `Cleared` (pair found).
//!
//! The board is a leaf: it never calls back into the controller. Mutating
//! operations assume their preconditions were checked by the caller via the
//! query methods (`card_exists`, `card_unmatched`, `card_closed`).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::core::GameRng;

use super::coord::{BoardSize, Coord};

/// A card face symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Icon(pub char);

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Respect the caller's width/alignment flags so grid fields stay
        // padded; a bare write! would collapse the field and shift the row.
        f.pad(self.0.encode_utf8(&mut [0; 4]))
    }
}

/// Default icon bank: 18 symbols, enough for the 6x6 board's 18 pairs.
pub const DEFAULT_ICON_BANK: [char; 18] = [
    '?', '¿', 'Δ', 'Ψ', '#', '$', '€', '†', '^', '∞', '£', '<', '>', '§', 'µ', '=', '₩', '&',
];

/// Visibility state of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Face down; rendered as the placeholder marker.
    Hidden,
    /// Face up this turn; rendered as its layout icon.
    Revealed,
    /// Pair found; rendered blank and excluded from further play.
    Cleared,
}

/// Placeholder shown for hidden cells.
const HIDDEN_MARKER: char = 'x';

#[derive(Clone, Debug)]
struct Grid {
    size: BoardSize,
    layout: Vec<Icon>,
    cells: Vec<CellState>,
}

impl Grid {
    fn index(&self, coord: Coord) -> usize {
        coord.row * self.size.side() + coord.col
    }
}

/// The card grid and its per-turn reveal state.
///
/// Constructed once per process; `arrange_cards` regenerates the layout for
/// each new game while player scores live elsewhere.
#[derive(Clone, Debug)]
pub struct Board {
    icon_bank: Vec<Icon>,
    grid: Option<Grid>,
    opened: SmallVec<[Icon; 2]>,
    matched: bool,
}

impl Board {
    /// Create an unarranged board with the default icon bank.
    #[must_use]
    pub fn new() -> Self {
        Self::with_icon_bank(DEFAULT_ICON_BANK.iter().copied().map(Icon).collect())
    }

    /// Create an unarranged board with a custom icon bank.
    ///
    /// The bank must be large enough for the sizes passed to
    /// `arrange_cards` later; that is asserted at arrangement time.
    #[must_use]
    pub fn with_icon_bank(icon_bank: Vec<Icon>) -> Self {
        Self {
            icon_bank,
            grid: None,
            opened: SmallVec::new(),
            matched: false,
        }
    }

    /// Current board size, if arranged.
    #[must_use]
    pub fn size(&self) -> Option<BoardSize> {
        self.grid.as_ref().map(|g| g.size)
    }

    /// Whether `arrange_cards` has been called.
    #[must_use]
    pub fn is_arranged(&self) -> bool {
        self.grid.is_some()
    }

    /// Icons revealed so far this turn (0, 1, or 2 of them).
    #[must_use]
    pub fn opened_icons(&self) -> &[Icon] {
        &self.opened
    }

    /// Whether the last committed pair-reveal was a match.
    #[must_use]
    pub fn matched(&self) -> bool {
        self.matched
    }

    /// Randomize the icon placement for a new game.
    ///
    /// Picks the icons to use (a random subset of `pairs()` icons for the
    /// 4x4 board, the full bank for 6x6), then assigns each cell one icon so
    /// that every chosen icon occupies exactly two cells. Placement draws
    /// uniformly from a remaining-slot pool: each icon starts with two slots
    /// and leaves the pool once both are used, which guarantees termination
    /// and the exactly-twice invariant.
    ///
    /// Resets every cell to `Hidden` and clears the per-turn state.
    ///
    /// # Panics
    ///
    /// Panics if the icon bank cannot cover the requested size: fewer icons
    /// than pairs for any size, or a bank that is not exactly 18 icons for
    /// the 6x6 board (which uses the whole bank).
    pub fn arrange_cards(&mut self, size: BoardSize, rng: &mut GameRng) {
        let pairs = size.pairs();
        assert!(
            self.icon_bank.len() >= pairs,
            "icon bank has {} icons but a {}x{} board needs {}",
            self.icon_bank.len(),
            size.side(),
            size.side(),
            pairs
        );
        if size == BoardSize::Six {
            // The 6x6 path uses the full bank, so the cardinality must be
            // exact or the exactly-twice invariant breaks.
            assert_eq!(
                self.icon_bank.len(),
                pairs,
                "6x6 board requires an icon bank of exactly {} icons",
                pairs
            );
        }

        let icons: Vec<Icon> = match size {
            BoardSize::Four => rng.sample(&self.icon_bank, pairs),
            BoardSize::Six => self.icon_bank.clone(),
        };

        // Remaining placement slots per icon: start at two, drop the icon
        // from the pool once both slots are used.
        let mut pool: FxHashMap<Icon, u8> = icons.iter().map(|&icon| (icon, 2)).collect();
        let mut layout = Vec::with_capacity(size.cells());

        for _ in 0..size.cells() {
            let candidates: Vec<Icon> = pool.keys().copied().collect();
            let icon = *rng
                .choose(&candidates)
                .expect("pool holds exactly as many slots as cells");
            layout.push(icon);

            let slots = pool.get_mut(&icon).expect("chosen icon is in the pool");
            *slots -= 1;
            if *slots == 0 {
                pool.remove(&icon);
            }
        }

        tracing::debug!(size = size.side(), seed = rng.seed(), "arranged cards");

        self.grid = Some(Grid {
            size,
            cells: vec![CellState::Hidden; layout.len()],
            layout,
        });
        self.opened.clear();
        self.matched = false;
    }

    /// Reveal the card at `coord`, recording its icon for match checking.
    ///
    /// Precondition (caller-enforced): the board is arranged, `coord` is in
    /// range, and the cell is `Hidden`.
    pub fn open_card(&mut self, coord: Coord) {
        let grid = self
            .grid
            .as_mut()
            .expect("board must be arranged before opening cards");
        let idx = grid.index(coord);
        grid.cells[idx] = CellState::Revealed;
        self.opened.push(grid.layout[idx]);
    }

    /// Resolve the turn: clear revealed cells on a match, re-hide them
    /// otherwise, and forget the opened icons.
    ///
    /// Reads the `matched` flag set by `commit_match`.
    pub fn end_turn(&mut self) {
        let matched = self.matched;
        if let Some(grid) = self.grid.as_mut() {
            for cell in grid.cells.iter_mut() {
                if *cell == CellState::Revealed {
                    *cell = if matched {
                        CellState::Cleared
                    } else {
                        CellState::Hidden
                    };
                }
            }
        }
        self.opened.clear();
    }

    /// Whether the two icons opened this turn are equal.
    ///
    /// Meaningful only when exactly two cards have been opened; with fewer
    /// it reports `false`.
    #[must_use]
    pub fn check_match(&self) -> bool {
        self.opened.len() == 2 && self.opened[0] == self.opened[1]
    }

    /// Compute and record the match result for this turn.
    ///
    /// Stores the outcome where `end_turn` and the turn-handoff logic read
    /// it, and returns it for scoring.
    pub fn commit_match(&mut self) -> bool {
        self.matched = self.check_match();
        self.matched
    }

    /// Whether every cell has been cleared (all pairs found).
    #[must_use]
    pub fn check_win(&self) -> bool {
        self.grid
            .as_ref()
            .is_some_and(|g| g.cells.iter().all(|&c| c == CellState::Cleared))
    }

    /// Whether `coord` is within the current grid.
    ///
    /// `false` on an unarranged board.
    #[must_use]
    pub fn card_exists(&self, coord: Coord) -> bool {
        self.grid
            .as_ref()
            .is_some_and(|g| coord.row < g.size.side() && coord.col < g.size.side())
    }

    /// Whether the card at `coord` is still in play (not `Cleared`).
    ///
    /// Precondition (caller-enforced): `card_exists(coord)`.
    #[must_use]
    pub fn card_unmatched(&self, coord: Coord) -> bool {
        self.cell_state(coord)
            .is_some_and(|c| c != CellState::Cleared)
    }

    /// Whether the card at `coord` is face down (not opened this turn).
    ///
    /// Precondition (caller-enforced): `card_exists(coord)`.
    #[must_use]
    pub fn card_closed(&self, coord: Coord) -> bool {
        self.cell_state(coord)
            .is_some_and(|c| c == CellState::Hidden)
    }

    /// Visibility state of the cell at `coord`, if arranged and in range.
    #[must_use]
    pub fn cell_state(&self, coord: Coord) -> Option<CellState> {
        let grid = self.grid.as_ref()?;
        if !self.card_exists(coord) {
            return None;
        }
        Some(grid.cells[grid.index(coord)])
    }

    /// The layout icon at `coord`, if arranged and in range.
    ///
    /// Inspection query for tests and non-interactive drivers; gameplay
    /// reveals icons only through `open_card`.
    #[must_use]
    pub fn layout_icon(&self, coord: Coord) -> Option<Icon> {
        let grid = self.grid.as_ref()?;
        if !self.card_exists(coord) {
            return None;
        }
        Some(grid.layout[grid.index(coord)])
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Human-readable grid: column headers 1..size, row headers A.., and
    /// 8-wide right-aligned cell fields. Hidden cells show the placeholder
    /// marker, revealed cells their icon, cleared cells nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(grid) = self.grid.as_ref() else {
            return write!(
                f,
                "The board has not been set up yet. \
                 Call the arrange_cards method to set up the board."
            );
        };

        let side = grid.size.side();

        write!(f, "\n{:>8}", "")?;
        for col in 1..=side {
            write!(f, "{:>8}", col)?;
        }
        writeln!(f)?;
        writeln!(f)?;

        for row in 0..side {
            write!(f, "{:>8}", (b'A' + row as u8) as char)?;
            for col in 0..side {
                let idx = row * side + col;
                match grid.cells[idx] {
                    CellState::Hidden => write!(f, "{:>8}", HIDDEN_MARKER)?,
                    CellState::Revealed => write!(f, "{:>8}", grid.layout[idx])?,
                    CellState::Cleared => write!(f, "{:>8}", "")?,
                }
            }
            writeln!(f)?;
            writeln!(f)?;
        }

        Ok(())
    }
}
