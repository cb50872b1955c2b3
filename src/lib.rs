//! Minesweeper grid engine.
//!
//! [`Grid`] owns a rectangular field of [`Tile`]s, scatters mines with
//! a seeded RNG, precomputes adjacency counts, and propagates
//! [`uncover`](Grid::uncover) through empty regions while notifying
//! subscribers of every uncovered tile or mine. Presentation, input
//! handling, and win/loss bookkeeping live entirely in the consumer;
//! the grid never references them.

#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use error::*;
pub use events::UncoverHandler;
pub use grid::*;
pub use tile::*;
pub use types::*;

mod error;
mod events;
mod grid;
mod placement;
mod tile;
mod types;

/// Board dimensions and mine total, as handed to [`Grid::generate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// `(columns, rows)`.
    pub size: Coord2,
    pub mines: CellCount,
}

impl GridConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Clamps each dimension to at least 1. The mine total is taken
    /// as-is; keeping it within [`placeable_cells`](Self::placeable_cells)
    /// is the caller's responsibility.
    pub fn new((size_x, size_y): Coord2, mines: CellCount) -> Self {
        Self::new_unchecked((size_x.max(1), size_y.max(1)), mines)
    }

    pub const fn total_cells(&self) -> CellCount {
        (self.size.0 as CellCount).saturating_mul(self.size.1 as CellCount)
    }

    /// Cells that can actually receive a mine once the starting
    /// column-and-row cross is excluded. Mine totals above this make
    /// placement retry forever.
    pub const fn placeable_cells(&self) -> CellCount {
        let cross = (self.size.0 + self.size.1 - 1) as CellCount;
        self.total_cells().saturating_sub(cross)
    }
}

/// The three fixed presets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const fn config(self) -> GridConfig {
        match self {
            Self::Beginner => GridConfig::new_unchecked((9, 9), 10),
            Self::Intermediate => GridConfig::new_unchecked((16, 16), 40),
            Self::Expert => GridConfig::new_unchecked((30, 16), 99),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_the_classic_settings() {
        assert_eq!(
            Difficulty::Beginner.config(),
            GridConfig::new_unchecked((9, 9), 10)
        );
        assert_eq!(Difficulty::Intermediate.config().mines, 40);
        assert_eq!(Difficulty::Expert.config().size, (30, 16));
    }

    #[test]
    fn new_clamps_degenerate_dimensions() {
        let config = GridConfig::new((0, -3), 1);
        assert_eq!(config.size, (1, 1));
        assert_eq!(config.total_cells(), 1);
    }

    #[test]
    fn placeable_cells_subtracts_the_cross() {
        assert_eq!(GridConfig::new((3, 3), 0).placeable_cells(), 4);
        assert_eq!(GridConfig::new((1, 1), 0).placeable_cells(), 0);
        assert_eq!(GridConfig::new((9, 9), 0).placeable_cells(), 81 - 17);
    }
}
