//! Identity and placement primitives shared by heroes, monsters, and the board.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_ENTITY_ID: AtomicU32 = AtomicU32::new(1);

/// Session-scoped identity for anything that can occupy a board tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    pub fn next() -> Self {
        Self(NEXT_ENTITY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Implemented by anything the board can place and move. The board keeps
/// occupancy by id; successful placements and moves write the new position
/// back through this trait.
pub trait BoardEntity {
    fn id(&self) -> EntityId;
    fn position(&self) -> Option<Position>;
    fn set_position(&mut self, pos: Position);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_ids_are_unique() {
        let a = EntityId::next();
        let b = EntityId::next();
        assert_ne!(a, b);
    }
}
