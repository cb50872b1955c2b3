use ndarray::Array2;
use rand::prelude::*;

use crate::{CellCount, Coord, Coord2, Tile, ToNdIndex};

/// Scatters `mines` mines over `tiles` by seeded rejection sampling.
///
/// A candidate cell is redrawn (without advancing the placed count)
/// when it already holds a mine, or when it shares a column or row
/// with `start`. The second rule keeps an entire cross of cells clear
/// of mines, not just the first-clicked cell; the asymmetry is
/// intentional and load-bearing for reproducibility of seeded games.
///
/// There is no attempt bound: callers must keep `mines` within
/// [`GridConfig::placeable_cells`](crate::GridConfig::placeable_cells)
/// or the loop cannot terminate.
pub(crate) fn scatter_mines(tiles: &mut Array2<Tile>, mines: CellCount, start: Coord2, seed: u64) {
    let dim = tiles.dim();
    let (columns, rows) = (dim.0 as Coord, dim.1 as Coord);

    let cross = (columns + rows - 1) as CellCount;
    let placeable = (columns as CellCount * rows as CellCount).saturating_sub(cross);
    if mines > placeable {
        log::warn!(
            "Requested {} mines but only {} cells lie outside the excluded cross",
            mines,
            placeable
        );
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut placed: CellCount = 0;
    while placed < mines {
        let coords = (rng.random_range(0..columns), rng.random_range(0..rows));
        if coords.0 == start.0 || coords.1 == start.1 {
            continue;
        }

        let tile = &mut tiles[coords.to_nd_index()];
        if tile.is_mine {
            continue;
        }

        tile.is_mine = true;
        placed += 1;
    }
}
