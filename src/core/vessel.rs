//! Vessel footprint and hit tracking.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use super::common::{Coord, Orientation};

/// A vessel placed on a grid. The footprint is fixed at construction; only
/// the hit set changes afterwards and it never leaves the footprint.
#[derive(Clone, PartialEq, Eq)]
pub struct Vessel {
    cells: Vec<Coord>,
    hits: BTreeSet<Coord>,
}

impl Vessel {
    /// Build a vessel over `cells`, in order.
    pub fn new(cells: Vec<Coord>) -> Self {
        Self {
            cells,
            hits: BTreeSet::new(),
        }
    }

    /// Contiguous footprint of `length` cells starting at `start`.
    ///
    /// Cells may run off the board; placement checks bounds.
    pub fn footprint(start: Coord, length: usize, orientation: Orientation) -> Vec<Coord> {
        (0..length)
            .map(|i| match orientation {
                Orientation::Horizontal => Coord::new(start.x.saturating_add(i), start.y),
                Orientation::Vertical => Coord::new(start.x, start.y.saturating_add(i)),
            })
            .collect()
    }

    pub fn length(&self) -> usize {
        self.cells.len()
    }

    /// Occupied cells in placement order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn hits(&self) -> &BTreeSet<Coord> {
        &self.hits
    }

    /// Record a hit at `coord`. Coordinates outside the footprint are ignored.
    pub fn register_hit(&mut self, coord: Coord) {
        if self.contains(coord) {
            self.hits.insert(coord);
        }
    }

    pub fn is_sunk(&self) -> bool {
        self.hits.len() >= self.length()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ length: {}, cells: {:?}, hits: {} }}",
            self.length(),
            self.cells,
            self.hits.len(),
        )
    }
}
