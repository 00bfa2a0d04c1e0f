//! Match orchestration: phases, turns and the status line.

use alloc::collections::VecDeque;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::common::{Coord, Difficulty, EngineError, Orientation, ShotOutcome};
use super::config::GameConfig;
use super::grid::Grid;
use super::opponent::Opponent;

/// Top-level state of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Menu,
    Placement,
    Battle,
    Resolved,
}

/// One side of the match. Used both for whose turn it is and for the winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Opponent,
}

/// A human player against the computer opponent.
///
/// All randomness comes from the single generator `R` owned by the match,
/// so seeding it reproduces a whole playthrough. Operations called in the
/// wrong phase or turn leave the match untouched.
pub struct Match<R: Rng = SmallRng> {
    config: GameConfig,
    difficulty: Difficulty,
    rng: R,
    phase: Phase,
    turn: Side,
    winner: Option<Side>,
    player_grid: Grid,
    opponent_grid: Grid,
    opponent: Opponent,
    remaining_fleet: VecDeque<usize>,
    orientation: Orientation,
    status: String,
}

impl Match<SmallRng> {
    /// A match driven by a `SmallRng` seeded with `seed`.
    pub fn seeded(config: GameConfig, difficulty: Difficulty, seed: u64) -> Self {
        Self::new(config, difficulty, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Match<R> {
    /// Create a match sitting in the menu.
    pub fn new(config: GameConfig, difficulty: Difficulty, rng: R) -> Self {
        let size = config.size();
        Self {
            remaining_fleet: config.fleet().iter().copied().collect(),
            config,
            difficulty,
            rng,
            phase: Phase::Menu,
            turn: Side::Player,
            winner: None,
            player_grid: Grid::new(size),
            opponent_grid: Grid::new(size),
            opponent: Opponent::new(difficulty, size),
            orientation: Orientation::Horizontal,
            status: String::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// The human player's board.
    pub fn player_grid(&self) -> &Grid {
        &self.player_grid
    }

    /// The computer's board, fired at by the player.
    pub fn opponent_grid(&self) -> &Grid {
        &self.opponent_grid
    }

    pub fn opponent(&self) -> &Opponent {
        &self.opponent
    }

    /// Lengths still waiting to be placed, next first.
    pub fn remaining_fleet(&self) -> &VecDeque<usize> {
        &self.remaining_fleet
    }

    /// Length of the next vessel to place.
    pub fn current_vessel_length(&self) -> Option<usize> {
        self.remaining_fleet.front().copied()
    }

    pub fn placement_done(&self) -> bool {
        self.remaining_fleet.is_empty()
    }

    pub fn placed_vessel_count(&self) -> usize {
        self.player_grid.vessels().len()
    }

    pub fn placement_orientation(&self) -> Orientation {
        self.orientation
    }

    /// Human-readable summary of the last action.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Change the opponent's strength. Allowed in any phase.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.opponent.set_difficulty(difficulty);
        self.status = format!("Difficulty: {:?}", difficulty);
        debug!("difficulty set to {:?}", difficulty);
    }

    /// Reset both boards and the opponent, deploy the opponent's fleet and
    /// enter placement. Only available from the menu or a finished match.
    ///
    /// Fails only when the configured fleet cannot be placed; the match is
    /// left as it was in that case.
    pub fn start_new_game(&mut self) -> Result<(), EngineError> {
        if !matches!(self.phase, Phase::Menu | Phase::Resolved) {
            return Ok(());
        }
        let mut opponent_grid = Grid::new(self.config.size());
        opponent_grid.place_fleet_randomly(self.config.fleet(), &mut self.rng)?;

        self.opponent_grid = opponent_grid;
        self.player_grid.reset();
        self.opponent.reset();
        self.remaining_fleet = self.config.fleet().iter().copied().collect();
        self.orientation = Orientation::Horizontal;
        self.phase = Phase::Placement;
        self.turn = Side::Player;
        self.winner = None;
        self.status = self.placement_prompt();
        debug!("new game started ({:?})", self.difficulty);
        Ok(())
    }

    /// Flip the orientation used for the next placement.
    pub fn toggle_placement_orientation(&mut self) {
        if self.phase != Phase::Placement {
            return;
        }
        self.orientation = self.orientation.flipped();
        self.status = format!("Orientation: {:?}", self.orientation);
    }

    /// Place the next queued vessel with its head at `coord`.
    ///
    /// Returns `false` when the vessel does not fit there or nothing is left
    /// to place.
    pub fn place_player_vessel(&mut self, coord: Coord) -> bool {
        if self.phase != Phase::Placement {
            return false;
        }
        let Some(length) = self.current_vessel_length() else {
            return false;
        };
        if !self.player_grid.place_vessel(coord, length, self.orientation) {
            self.status = String::from("Cannot place there: vessels may not touch");
            return false;
        }
        self.remaining_fleet.pop_front();
        self.status = if self.placement_done() {
            String::from("Placement complete. Begin the battle when ready")
        } else {
            self.placement_prompt()
        };
        true
    }

    /// Take back the most recently placed vessel, returning its length.
    pub fn undo_last_placement(&mut self) -> Option<usize> {
        if self.phase != Phase::Placement {
            return None;
        }
        let vessel = self.player_grid.undo_last_placement()?;
        self.remaining_fleet.push_front(vessel.length());
        self.status = String::from("Removed the last vessel");
        Some(vessel.length())
    }

    /// Place the whole fleet for the player at random.
    pub fn auto_place_player(&mut self) -> Result<(), EngineError> {
        if self.phase != Phase::Placement {
            return Ok(());
        }
        let mut grid = Grid::new(self.config.size());
        grid.place_fleet_randomly(self.config.fleet(), &mut self.rng)?;
        self.player_grid = grid;
        self.remaining_fleet.clear();
        self.status = String::from("Vessels placed automatically");
        Ok(())
    }

    /// Move from placement to battle once every vessel is placed.
    pub fn begin_battle(&mut self) -> bool {
        if self.phase != Phase::Placement {
            return false;
        }
        if !self.placement_done() {
            self.status = String::from("Place every vessel first");
            return false;
        }
        self.phase = Phase::Battle;
        self.turn = Side::Player;
        self.status = String::from("Your turn: pick a cell on the opponent's board");
        debug!("battle started");
        true
    }

    /// Fire at the opponent's board.
    ///
    /// Returns [`ShotOutcome::AlreadyShot`] without doing anything unless it
    /// is the player's turn in battle. The turn passes to the opponent after
    /// any fresh shot that does not end the game.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the board.
    pub fn player_shoot(&mut self, coord: Coord) -> ShotOutcome {
        if self.phase != Phase::Battle || self.turn != Side::Player {
            return ShotOutcome::AlreadyShot;
        }
        let (outcome, _) = self.opponent_grid.receive_shot(coord);
        if outcome == ShotOutcome::AlreadyShot {
            self.status = String::from("You already fired there");
            return outcome;
        }
        self.status = format!("You: {} - {}", coord, outcome.describe());

        if self.opponent_grid.all_sunk() {
            self.resolve(Side::Player);
        } else {
            self.turn = Side::Opponent;
        }
        outcome
    }

    /// Let the opponent take its shot at the player's board.
    ///
    /// # Panics
    ///
    /// Panics unless the match is in battle and it is the opponent's turn.
    pub fn opponent_shoot(&mut self) -> (Coord, ShotOutcome) {
        assert!(
            self.phase == Phase::Battle && self.turn == Side::Opponent,
            "opponent_shoot called in {:?} on the {:?} turn",
            self.phase,
            self.turn
        );
        let coord = self.opponent.choose_shot(&mut self.rng);
        let (outcome, vessel) = self.player_grid.receive_shot(coord);
        let sunk_cells: Option<Vec<Coord>> = vessel
            .filter(|v| v.is_sunk())
            .map(|v| v.cells().to_vec());
        self.opponent
            .record_outcome(coord, outcome, sunk_cells.as_deref());
        self.status = format!("Opponent: {} - {}", coord, outcome.describe());

        if self.player_grid.all_sunk() {
            self.resolve(Side::Opponent);
        } else {
            self.turn = Side::Player;
        }
        (coord, outcome)
    }

    /// Leave a finished match for the menu.
    pub fn return_to_menu(&mut self) -> bool {
        if self.phase != Phase::Resolved {
            return false;
        }
        self.phase = Phase::Menu;
        self.status.clear();
        true
    }

    fn resolve(&mut self, winner: Side) {
        self.phase = Phase::Resolved;
        self.winner = Some(winner);
        self.status.push_str(match winner {
            Side::Player => "\nVictory!",
            Side::Opponent => "\nDefeat",
        });
        info!("match resolved, winner: {:?}", winner);
    }

    fn placement_prompt(&self) -> String {
        match self.current_vessel_length() {
            Some(length) => format!("Place a vessel of length {}", length),
            None => String::new(),
        }
    }
}
