//! The game board: tiles, occupancy, and procedural generation.

pub mod generation;
pub mod types;

pub use generation::*;
pub use types::*;
