//! Item taxonomy: weapons, armor, potions, and spells.

pub mod types;

pub use types::*;
