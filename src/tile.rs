use serde::{Deserialize, Serialize};

/// State of a single cell.
///
/// `is_mine` and `adjacent_mines` are fixed once grid construction
/// completes; only the flag and uncovered bits change during play, and
/// `is_uncovered` is monotonic (never reset).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub(crate) is_mine: bool,
    pub(crate) is_flagged: bool,
    pub(crate) is_uncovered: bool,
    pub(crate) adjacent_mines: u8,
}

impl Tile {
    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    pub const fn is_flagged(self) -> bool {
        self.is_flagged
    }

    pub const fn is_uncovered(self) -> bool {
        self.is_uncovered
    }

    /// Mines among the up-to-8 surrounding cells, in `[0, 8]`.
    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }
}
