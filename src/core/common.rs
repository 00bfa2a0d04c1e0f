//! Common types for the engine: coordinates, shot outcomes, cell projections
//! and configuration errors.

use core::fmt;
use core::str::FromStr;

/// A cell on the board, `x` is the column and `y` the row, both 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

/// Which neighbours [`Coord::neighbors`] yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjacency {
    /// The four edge-sharing cells.
    Orthogonal,
    /// All eight surrounding cells.
    Full,
}

const FULL_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const ORTHOGONAL_OFFSETS: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Whether the coordinate lies on a `size`×`size` board.
    pub fn in_bounds(self, size: usize) -> bool {
        self.x < size && self.y < size
    }

    /// Offset by (`dx`, `dy`), or `None` if the result leaves a `size`×`size` board.
    pub fn offset(self, dx: isize, dy: isize, size: usize) -> Option<Coord> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let c = Coord::new(x, y);
        c.in_bounds(size).then_some(c)
    }

    /// In-bounds neighbours in row-major order.
    pub fn neighbors(self, size: usize, adjacency: Adjacency) -> impl Iterator<Item = Coord> {
        let offsets: &'static [(isize, isize)] = match adjacency {
            Adjacency::Orthogonal => &ORTHOGONAL_OFFSETS,
            Adjacency::Full => &FULL_OFFSETS,
        };
        offsets
            .iter()
            .filter_map(move |&(dx, dy)| self.offset(dx, dy, size))
    }

    /// Column letter followed by the 1-based row, e.g. `(0, 0)` is `A1`.
    pub fn label(self) -> LabelDisplay {
        LabelDisplay(self)
    }
}

/// Formats a [`Coord`] as its board label.
#[derive(Debug, Clone, Copy)]
pub struct LabelDisplay(Coord);

impl fmt::Display for LabelDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + (self.0.x % 26) as u8) as char;
        write!(f, "{}{}", col, self.0.y + 1)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label().fmt(f)
    }
}

/// Error returned when a label such as `"B7"` cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCoordError;

impl fmt::Display for ParseCoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a column letter followed by a row number, e.g. A1")
    }
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let col = chars.next().ok_or(ParseCoordError)?.to_ascii_uppercase();
        if !col.is_ascii_uppercase() {
            return Err(ParseCoordError);
        }
        let row: usize = chars.as_str().parse().map_err(|_| ParseCoordError)?;
        if row == 0 {
            return Err(ParseCoordError);
        }
        Ok(Coord::new((col as u8 - b'A') as usize, row - 1))
    }
}

/// Terminal classification of a single shot against a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    Miss,
    Hit,
    Sunk,
    /// The cell had been fired at before; nothing changed.
    AlreadyShot,
}

impl ShotOutcome {
    /// Short phrase used in status lines.
    pub fn describe(self) -> &'static str {
        match self {
            ShotOutcome::Miss => "miss",
            ShotOutcome::Hit => "hit",
            ShotOutcome::Sunk => "vessel sunk",
            ShotOutcome::AlreadyShot => "already fired there",
        }
    }
}

/// Display projection of a single cell. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Water,
    ShipPresent,
    Hit,
    Miss,
    Sunk,
}

/// Opponent strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// Uniformly random unfired cells.
    #[default]
    Easy,
    /// Parity hunting plus line-following after a hit.
    Medium,
}

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    pub fn is_horizontal(self) -> bool {
        self == Orientation::Horizontal
    }
}

/// Configuration errors. Everything the players can do wrong is reported
/// through return values instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Board size outside `1..=MAX_BOARD_SIZE`.
    InvalidBoardSize { size: usize },
    /// The fleet has no vessels.
    EmptyFleet,
    /// A vessel length of zero, or longer than the board.
    InvalidVesselLength { length: usize, size: usize },
    /// Random placement ran out of attempts for a vessel of this length.
    UnableToPlaceVessel { length: usize },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidBoardSize { size } => {
                write!(f, "Board size {} is not supported", size)
            }
            EngineError::EmptyFleet => write!(f, "Fleet must contain at least one vessel"),
            EngineError::InvalidVesselLength { length, size } => {
                write!(f, "Vessel length {} is invalid for a {}x{} board", length, size, size)
            }
            EngineError::UnableToPlaceVessel { length } => write!(
                f,
                "Unable to place a vessel of length {}; the fleet does not fit the board",
                length
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
