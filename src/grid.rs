use alloc::boxed::Box;
use alloc::vec;
use core::fmt;
use ndarray::Array2;

use crate::events::Subscribers;
use crate::placement::scatter_mines;
use crate::types::ORTHOGONAL;
use crate::{
    CellCount, Coord, Coord2, GridConfig, GridError, NeighborIter, Result, Tile, ToNdIndex,
};

/// Rectangular field of [`Tile`]s with seeded mine placement,
/// precomputed adjacency counts, and a flood-fill `uncover` operation
/// that reports progress through two subscribable notification
/// streams.
///
/// A grid is built once per round, fully initialized before the first
/// reveal, and discarded for a restart. It has no notion of win or
/// loss; the consumer derives those from the notifications and
/// [`iter_tiles`](Grid::iter_tiles).
///
/// All operations are synchronous and single-threaded. Callers must
/// serialize access; one reveal or flag operation completes fully
/// before the next begins.
pub struct Grid {
    tiles: Array2<Tile>,
    mine_count: CellCount,
    subscribers: Subscribers,
}

impl Grid {
    /// Builds a grid for `config` with mines scattered by `seed`.
    ///
    /// `start` is the first-clicked coordinate: no mine is placed on
    /// its column or row. Callers must keep `config.mines` within
    /// [`GridConfig::placeable_cells`]; placement retries without
    /// bound and cannot terminate otherwise.
    pub fn generate(config: GridConfig, start: Coord2, seed: u64) -> Self {
        let mut tiles: Array2<Tile> =
            Array2::default((config.size.0 as usize, config.size.1 as usize));
        scatter_mines(&mut tiles, config.mines, start, seed);
        compute_adjacency(&mut tiles);

        Self {
            tiles,
            mine_count: config.mines,
            subscribers: Subscribers::default(),
        }
    }

    /// Builds a grid with mines at exactly the given coordinates.
    ///
    /// Duplicate coordinates collapse to one mine. Fails if `size` is
    /// not positive in both dimensions or any coordinate falls outside
    /// it.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 < 1 || size.1 < 1 {
            return Err(GridError::InvalidCoords);
        }

        let mut tiles: Array2<Tile> = Array2::default((size.0 as usize, size.1 as usize));
        for &coords in mine_coords {
            if coords.0 < 0 || coords.0 >= size.0 || coords.1 < 0 || coords.1 >= size.1 {
                return Err(GridError::InvalidCoords);
            }
            tiles[coords.to_nd_index()].is_mine = true;
        }

        let mine_count = tiles.iter().filter(|tile| tile.is_mine).count() as CellCount;
        compute_adjacency(&mut tiles);

        Ok(Self {
            tiles,
            mine_count,
            subscribers: Subscribers::default(),
        })
    }

    /// Registers a handler for the "tile uncovered" stream, fired for
    /// every non-mine cell the moment it is uncovered.
    pub fn on_tile_uncovered(&mut self, handler: impl FnMut(Coord2) + 'static) {
        self.subscribers.tile_uncovered.push(Box::new(handler));
    }

    /// Registers a handler for the "mine uncovered" stream.
    pub fn on_mine_uncovered(&mut self, handler: impl FnMut(Coord2) + 'static) {
        self.subscribers.mine_uncovered.push(Box::new(handler));
    }

    /// Uncovers the tile at `coords` and cascades through empty
    /// regions.
    ///
    /// Out-of-bounds or already-uncovered coordinates are silent
    /// no-ops. A mine fires one "mine uncovered" notification and
    /// never cascades. A safe tile fires "tile uncovered"; when its
    /// adjacency count is zero, its four orthogonal neighbors are
    /// uncovered the same way (diagonals carry adjacency but not the
    /// cascade).
    ///
    /// The fill runs over an explicit work list rather than the call
    /// stack, so depth is independent of grid area. Every popped entry
    /// re-checks the bounds and uncovered guards, which bounds the
    /// fill by the total cell count. A flag does not stop the reveal;
    /// refusing to uncover flagged tiles is the caller's policy.
    pub fn uncover(&mut self, coords: Coord2) {
        let mut pending = vec![coords];

        while let Some(current) = pending.pop() {
            if !self.in_bounds(current) {
                continue;
            }

            let tile = &mut self.tiles[current.to_nd_index()];
            if tile.is_uncovered {
                continue;
            }
            tile.is_uncovered = true;

            if tile.is_mine {
                log::debug!("Uncovered mine at {:?}", current);
                self.subscribers.notify_mine_uncovered(current);
                continue;
            }

            let adjacent = tile.adjacent_mines;
            log::trace!("Uncovered tile at {:?}, adjacent mines: {}", current, adjacent);
            self.subscribers.notify_tile_uncovered(current);

            if adjacent == 0 {
                // Reversed so the left neighbor pops first.
                for &(dx, dy) in ORTHOGONAL.iter().rev() {
                    pending.push((current.0 + dx, current.1 + dy));
                }
            }
        }
    }

    /// Toggles the flag on a covered tile, returning whether anything
    /// changed. Out-of-bounds and uncovered tiles are left alone.
    ///
    /// The remaining-mine budget is caller-side bookkeeping; the grid
    /// accepts any number of flags.
    pub fn toggle_flag(&mut self, coords: Coord2) -> bool {
        if !self.in_bounds(coords) {
            return false;
        }

        let tile = &mut self.tiles[coords.to_nd_index()];
        if tile.is_uncovered {
            return false;
        }

        tile.is_flagged = !tile.is_flagged;
        true
    }

    pub fn tile(&self, coords: Coord2) -> Option<&Tile> {
        self.in_bounds(coords)
            .then(|| &self.tiles[coords.to_nd_index()])
    }

    /// Iterates over every tile with its coordinates, column-major.
    pub fn iter_tiles(&self) -> impl Iterator<Item = (Coord2, &Tile)> {
        self.tiles
            .indexed_iter()
            .map(|((x, y), tile)| ((x as Coord, y as Coord), tile))
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.tiles.dim();
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn columns(&self) -> Coord {
        self.size().0
    }

    pub fn rows(&self) -> Coord {
        self.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.tiles.len() as CellCount
    }

    fn in_bounds(&self, coords: Coord2) -> bool {
        let (columns, rows) = self.size();
        coords.0 >= 0 && coords.0 < columns && coords.1 >= 0 && coords.1 < rows
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("size", &self.size())
            .field("mine_count", &self.mine_count)
            .field("subscribers", &self.subscribers)
            .finish()
    }
}

/// Fills in every tile's Moore-neighborhood mine count. Runs once,
/// after placement; the counts are immutable afterwards.
fn compute_adjacency(tiles: &mut Array2<Tile>) {
    let dim = tiles.dim();
    let bounds = (dim.0 as Coord, dim.1 as Coord);

    for x in 0..bounds.0 {
        for y in 0..bounds.1 {
            let count = NeighborIter::new((x, y), bounds)
                .filter(|&pos| tiles[pos.to_nd_index()].is_mine)
                .count() as u8;
            tiles[(x, y).to_nd_index()].adjacent_mines = count;
        }
    }
}
