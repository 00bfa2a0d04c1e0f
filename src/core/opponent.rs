//! Shot selection for the computer opponent.
//!
//! The opponent sees nothing of the grid it fires at. It only remembers its
//! own shots, the outcomes reported back, and the cells it has ruled out
//! around sunk vessels.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use log::{trace, warn};
use rand::seq::IndexedRandom;
use rand::Rng;

use super::common::{Adjacency, Coord, Difficulty, ShotOutcome};

/// Computer opponent. Hunts while it has no unresolved hits, targets
/// around them otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opponent {
    difficulty: Difficulty,
    size: usize,
    fired: BTreeSet<Coord>,
    known_empty: BTreeSet<Coord>,
    active_hits: Vec<Coord>,
}

impl Opponent {
    pub fn new(difficulty: Difficulty, size: usize) -> Self {
        Self {
            difficulty,
            size,
            fired: BTreeSet::new(),
            known_empty: BTreeSet::new(),
            active_hits: Vec::new(),
        }
    }

    /// Forget everything learned during the previous game.
    pub fn reset(&mut self) {
        self.fired.clear();
        self.known_empty.clear();
        self.active_hits.clear();
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn board_size(&self) -> usize {
        self.size
    }

    /// Every coordinate fired at so far.
    pub fn fired(&self) -> &BTreeSet<Coord> {
        &self.fired
    }

    /// Cells ruled out because they border a sunk vessel.
    pub fn known_empty(&self) -> &BTreeSet<Coord> {
        &self.known_empty
    }

    /// Hits on a vessel not yet reported sunk.
    pub fn active_hits(&self) -> &[Coord] {
        &self.active_hits
    }

    /// `true` while following up on unresolved hits.
    pub fn is_targeting(&self) -> bool {
        !self.active_hits.is_empty()
    }

    /// Pick the next coordinate to fire at.
    ///
    /// # Panics
    ///
    /// Panics if every cell of the board has already been fired at. A game
    /// always resolves before that happens.
    pub fn choose_shot<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Coord {
        match self.difficulty {
            Difficulty::Easy => self.random_shot(rng),
            Difficulty::Medium => {
                if self.is_targeting() {
                    if let Some(shot) = self.target_shot(rng) {
                        trace!("target mode: firing at {}", shot);
                        return shot;
                    }
                    warn!("no follow-up cells around {:?}; back to hunting", self.active_hits);
                    self.active_hits.clear();
                }
                self.hunt_shot(rng)
            }
        }
    }

    /// Feed back the outcome of a shot at `coord`.
    ///
    /// On a sink, `sunk_cells` should carry the vessel's footprint; without
    /// it the footprint is inferred from the active hits plus `coord`, which
    /// can miss cells when the hit list is incomplete.
    pub fn record_outcome(
        &mut self,
        coord: Coord,
        outcome: ShotOutcome,
        sunk_cells: Option<&[Coord]>,
    ) {
        self.fired.insert(coord);
        if self.difficulty == Difficulty::Easy {
            return;
        }
        match outcome {
            ShotOutcome::Hit => self.active_hits.push(coord),
            ShotOutcome::Sunk => {
                let inferred;
                let cells = match sunk_cells {
                    Some(cells) => cells,
                    None => {
                        let mut cells = dedup(&self.active_hits);
                        if !cells.contains(&coord) {
                            cells.push(coord);
                        }
                        inferred = cells;
                        &inferred[..]
                    }
                };
                for &cell in cells {
                    for n in cell.neighbors(self.size, Adjacency::Full) {
                        if !self.fired.contains(&n) {
                            self.known_empty.insert(n);
                        }
                    }
                }
                trace!("vessel sunk at {}; {} cells known empty", coord, self.known_empty.len());
                self.active_hits.clear();
            }
            ShotOutcome::Miss | ShotOutcome::AlreadyShot => {}
        }
    }

    fn is_available(&self, coord: Coord) -> bool {
        !self.fired.contains(&coord) && !self.known_empty.contains(&coord)
    }

    fn cells(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Coord::new(x, y)))
    }

    fn random_shot<R: Rng + ?Sized>(&self, rng: &mut R) -> Coord {
        let candidates: Vec<Coord> = self.cells().filter(|c| !self.fired.contains(c)).collect();
        pick(&candidates, rng)
    }

    fn hunt_shot<R: Rng + ?Sized>(&self, rng: &mut R) -> Coord {
        let parity: Vec<Coord> = self
            .cells()
            .filter(|c| (c.x + c.y) % 2 == 0 && self.is_available(*c))
            .collect();
        if !parity.is_empty() {
            return pick(&parity, rng);
        }
        let open: Vec<Coord> = self.cells().filter(|c| self.is_available(*c)).collect();
        if !open.is_empty() {
            return pick(&open, rng);
        }
        warn!("every open cell is ruled out; ignoring known-empty cells");
        self.random_shot(rng)
    }

    fn target_shot<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coord> {
        let hits = dedup(&self.active_hits);
        let candidates: Vec<Coord> = match hits.as_slice() {
            [] => return None,
            [single] => self.open_neighbors(*single).collect(),
            [first, rest @ ..] if rest.iter().all(|h| h.x == first.x) => {
                let (lo, hi) = min_max(hits.iter().map(|h| h.y));
                self.line_ends(Coord::new(first.x, lo), Coord::new(first.x, hi), 0, 1)
            }
            [first, rest @ ..] if rest.iter().all(|h| h.y == first.y) => {
                let (lo, hi) = min_max(hits.iter().map(|h| h.x));
                self.line_ends(Coord::new(lo, first.y), Coord::new(hi, first.y), 1, 0)
            }
            _ => hits.iter().flat_map(|&h| self.open_neighbors(h)).collect(),
        };
        candidates.choose(rng).copied()
    }

    fn open_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        coord
            .neighbors(self.size, Adjacency::Orthogonal)
            .filter(move |&n| self.is_available(n))
    }

    /// The open cells just past both ends of the line `lo..=hi`.
    fn line_ends(&self, lo: Coord, hi: Coord, dx: isize, dy: isize) -> Vec<Coord> {
        [lo.offset(-dx, -dy, self.size), hi.offset(dx, dy, self.size)]
            .into_iter()
            .flatten()
            .filter(|&c| self.is_available(c))
            .collect()
    }
}

/// Order-preserving de-duplication.
fn dedup(coords: &[Coord]) -> Vec<Coord> {
    let mut seen = BTreeSet::new();
    coords.iter().copied().filter(|c| seen.insert(*c)).collect()
}

fn min_max(values: impl Iterator<Item = usize>) -> (usize, usize) {
    values.fold((usize::MAX, 0), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

fn pick<R: Rng + ?Sized>(candidates: &[Coord], rng: &mut R) -> Coord {
    match candidates.choose(rng) {
        Some(&c) => c,
        None => panic!("opponent has no cells left to fire at"),
    }
}
