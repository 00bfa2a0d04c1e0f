use alloc::vec::Vec;

use super::common::EngineError;

pub const BOARD_SIZE: usize = 10;
pub const MAX_BOARD_SIZE: usize = 26;
pub const CANONICAL_FLEET: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Random placement attempts per vessel before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 10_000;

/// Board size and fleet composition for a match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    size: usize,
    fleet: Vec<usize>,
}

impl GameConfig {
    /// Validate and build a configuration.
    ///
    /// Whether the fleet actually fits with the no-touching rule is only
    /// discovered by random placement, see [`EngineError::UnableToPlaceVessel`].
    pub fn new(size: usize, fleet: Vec<usize>) -> Result<Self, EngineError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(EngineError::InvalidBoardSize { size });
        }
        if fleet.is_empty() {
            return Err(EngineError::EmptyFleet);
        }
        if let Some(&length) = fleet.iter().find(|&&l| l == 0 || l > size) {
            return Err(EngineError::InvalidVesselLength { length, size });
        }
        Ok(Self { size, fleet })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Vessel lengths in placement order.
    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    /// Total number of cells the fleet occupies.
    pub fn fleet_cells(&self) -> usize {
        self.fleet.iter().sum()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            fleet: CANONICAL_FLEET.to_vec(),
        }
    }
}
