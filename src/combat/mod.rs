//! Turn-based party-vs-monsters combat.

pub mod damage;
pub mod logic;
pub mod targeting;
pub mod types;

pub use damage::*;
pub use logic::*;
pub use targeting::*;
pub use types::*;
