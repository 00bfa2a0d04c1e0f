#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod autoplay;
pub mod core;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;

pub use crate::autoplay::{play_out, AutoplayReport};
pub use crate::core::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
