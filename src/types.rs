/// Single coordinate axis: `x` is the column, `y` is the row.
///
/// Signed so that out-of-range probes (e.g. `uncover((-1, 0))`) can be
/// expressed and absorbed by the bounds guard instead of panicking.
pub type Coord = i32;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    /// Callers must bounds-check first; negative components would wrap.
    fn to_nd_index(self) -> Self::Output {
        [self.0 as usize, self.1 as usize]
    }
}

/// Moore neighborhood: the up-to-8 surrounding cells, used for
/// adjacency counting.
const DISPLACEMENTS: [(Coord, Coord); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Orthogonal neighbors only. The uncover cascade expands through
/// these four, never diagonally, even though adjacency counts all 8.
pub(crate) const ORTHOGONAL: [(Coord, Coord); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (Coord, Coord), bounds: Coord2) -> Option<Coord2> {
    let next = (coords.0 + delta.0, coords.1 + delta.1);
    let in_x = next.0 >= 0 && next.0 < bounds.0;
    let in_y = next.1 >= 0 && next.1 < bounds.1;
    (in_x && in_y).then_some(next)
}

/// Iterator over the in-bounds Moore neighbors of a cell.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
