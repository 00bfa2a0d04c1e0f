//! One player's board: fleet placement, occupancy and shot history.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;
use core::fmt;
use log::{debug, trace};
use rand::Rng;

use super::common::{Adjacency, CellState, Coord, EngineError, Orientation, ShotOutcome};
use super::config::{BOARD_SIZE, PLACEMENT_ATTEMPTS};
use super::vessel::Vessel;

/// A square board holding a fleet and every shot fired at it.
///
/// Vessels never overlap and never touch, diagonals included. The rule is
/// checked when a vessel is placed; placed geometry is not re-validated.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    vessels: Vec<Vessel>,
    occupied: BTreeSet<Coord>,
    shots: BTreeMap<Coord, ShotOutcome>,
}

impl Grid {
    /// Create an empty `size`×`size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            vessels: Vec::new(),
            occupied: BTreeSet::new(),
            shots: BTreeMap::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Placed vessels, oldest first.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Recorded shots. Never contains [`ShotOutcome::AlreadyShot`].
    pub fn shots(&self) -> &BTreeMap<Coord, ShotOutcome> {
        &self.shots
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.occupied.contains(&coord)
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.in_bounds(self.size)
    }

    /// Remove every vessel and shot.
    pub fn reset(&mut self) {
        self.vessels.clear();
        self.occupied.clear();
        self.shots.clear();
    }

    /// The vessel covering `coord`, if any.
    pub fn vessel_at(&self, coord: Coord) -> Option<&Vessel> {
        self.vessels.iter().find(|v| v.contains(coord))
    }

    /// Whether a vessel could occupy `cells`: all in bounds, free, and not
    /// touching any occupied cell.
    pub fn can_place(&self, cells: &[Coord]) -> bool {
        cells.iter().all(|&c| {
            self.in_bounds(c)
                && !self.is_occupied(c)
                && c.neighbors(self.size, Adjacency::Full)
                    .all(|n| !self.is_occupied(n))
        })
    }

    /// Place a vessel of `length` cells starting at `start`.
    ///
    /// Returns `false` without touching the grid when the placement breaks
    /// the bounds or no-touching rules.
    pub fn place_vessel(&mut self, start: Coord, length: usize, orientation: Orientation) -> bool {
        if length == 0 {
            return false;
        }
        let cells = Vessel::footprint(start, length, orientation);
        if !self.can_place(&cells) {
            return false;
        }
        trace!("placed vessel of length {} at {} ({:?})", length, start, orientation);
        self.occupied.extend(cells.iter().copied());
        self.vessels.push(Vessel::new(cells));
        true
    }

    /// Remove the most recently placed vessel along with any shots recorded
    /// against its cells.
    pub fn undo_last_placement(&mut self) -> Option<Vessel> {
        let vessel = self.vessels.pop()?;
        for c in vessel.cells() {
            self.occupied.remove(c);
            self.shots.remove(c);
        }
        Some(vessel)
    }

    /// Clear the grid and place every vessel in `lengths` at random.
    ///
    /// Each vessel gets [`PLACEMENT_ATTEMPTS`] tries; running out means the
    /// fleet cannot fit this board.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(
        &mut self,
        lengths: &[usize],
        rng: &mut R,
    ) -> Result<(), EngineError> {
        self.reset();
        for &length in lengths {
            if length == 0 || length > self.size {
                return Err(EngineError::InvalidVesselLength {
                    length,
                    size: self.size,
                });
            }
            let placed = (0..PLACEMENT_ATTEMPTS).any(|_| {
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let (max_x, max_y) = match orientation {
                    Orientation::Horizontal => (self.size - length, self.size - 1),
                    Orientation::Vertical => (self.size - 1, self.size - length),
                };
                let start = Coord::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
                self.place_vessel(start, length, orientation)
            });
            if !placed {
                return Err(EngineError::UnableToPlaceVessel { length });
            }
        }
        debug!("randomly placed a fleet of {} vessels", lengths.len());
        Ok(())
    }

    /// Resolve a shot at `coord`.
    ///
    /// A repeat shot returns [`ShotOutcome::AlreadyShot`] and changes nothing.
    /// On a hit or sink the struck vessel is returned as well.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the board.
    pub fn receive_shot(&mut self, coord: Coord) -> (ShotOutcome, Option<&Vessel>) {
        assert!(
            self.in_bounds(coord),
            "shot at ({}, {}) is outside the {}x{} board",
            coord.x,
            coord.y,
            self.size,
            self.size
        );
        if self.shots.contains_key(&coord) {
            return (ShotOutcome::AlreadyShot, None);
        }
        match self.vessels.iter_mut().find(|v| v.contains(coord)) {
            Some(vessel) => {
                vessel.register_hit(coord);
                let outcome = if vessel.is_sunk() {
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                };
                self.shots.insert(coord, outcome);
                (outcome, Some(&*vessel))
            }
            None => {
                self.shots.insert(coord, ShotOutcome::Miss);
                (ShotOutcome::Miss, None)
            }
        }
    }

    /// `true` once the fleet is non-empty and every vessel is sunk.
    pub fn all_sunk(&self) -> bool {
        !self.vessels.is_empty() && self.vessels.iter().all(Vessel::is_sunk)
    }

    /// Display state of `coord`. Unshot vessel cells show as
    /// [`CellState::ShipPresent`] only when `reveal_ships` is set.
    pub fn cell_state(&self, coord: Coord, reveal_ships: bool) -> CellState {
        match self.shots.get(&coord) {
            Some(ShotOutcome::Miss) => CellState::Miss,
            Some(_) => match self.vessel_at(coord) {
                Some(v) if v.is_sunk() => CellState::Sunk,
                _ => CellState::Hit,
            },
            None if reveal_ships && self.is_occupied(coord) => CellState::ShipPresent,
            None => CellState::Water,
        }
    }

    /// Every coordinate not yet fired at, row by row.
    pub fn available_shots(&self) -> Vec<Coord> {
        (0..self.size)
            .flat_map(|y| (0..self.size).map(move |x| Coord::new(x, y)))
            .filter(|c| !self.shots.contains_key(c))
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{\n  size: {},\n  vessels: {:?},\n  shots: {:?}\n}}",
            self.size, self.vessels, self.shots
        )
    }
}
