use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::Coord2;

/// Handler invoked with the coordinates of an uncovered cell.
pub type UncoverHandler = Box<dyn FnMut(Coord2)>;

/// Subscriber lists for the two notification streams the grid emits.
///
/// Delivery is synchronous: handlers run on the caller's stack, inside
/// the `uncover` call that produced the event, in the order tiles are
/// uncovered and in registration order within one tile. Nothing is
/// queued or deferred.
#[derive(Default)]
pub(crate) struct Subscribers {
    pub(crate) tile_uncovered: Vec<UncoverHandler>,
    pub(crate) mine_uncovered: Vec<UncoverHandler>,
}

impl Subscribers {
    pub(crate) fn notify_tile_uncovered(&mut self, coords: Coord2) {
        for handler in &mut self.tile_uncovered {
            handler(coords);
        }
    }

    pub(crate) fn notify_mine_uncovered(&mut self, coords: Coord2) {
        for handler in &mut self.mine_uncovered {
            handler(coords);
        }
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("tile_uncovered", &self.tile_uncovered.len())
            .field("mine_uncovered", &self.mine_uncovered.len())
            .finish()
    }
}
