//! Legends combat core: a turn-based party-vs-monsters battle engine on a
//! procedurally generated grid board.
//!
//! The crate is a pure engine. It owns the rules (board generation and
//! movement, hero classes and leveling, equipment slots, monster rosters,
//! the battle state machine) and talks to the outside world only through
//! the [`io::GameInput`] / [`io::GameOutput`] seams and an injected
//! [`rand::Rng`]. Menus, persistence, and rendering live with the caller.

pub mod board;
pub mod character;
pub mod combat;
pub mod constants;
pub mod content;
pub mod entity;
pub mod io;
pub mod items;
pub mod monsters;
