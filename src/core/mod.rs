//! Core game engine (no_std compatible)
//!
//! Pure state-transition logic with no I/O: vessels, grids, the computer
//! opponent and the match state machine. Only `alloc`, `rand` and `log`
//! are required, so it builds for embedded or WebAssembly targets.

pub mod common;
pub mod config;
pub mod game;
pub mod grid;
pub mod opponent;
pub mod vessel;

// Re-export commonly used types
pub use common::{
    Adjacency, CellState, Coord, Difficulty, EngineError, Orientation, ParseCoordError,
    ShotOutcome,
};
pub use config::*;
pub use game::{Match, Phase, Side};
pub use grid::Grid;
pub use opponent::Opponent;
pub use vessel::Vessel;
