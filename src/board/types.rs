use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{MAX_BOARD_DIM, MIN_BOARD_DIM};
use crate::entity::{BoardEntity, EntityId, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Common,
    Market,
    Inaccessible,
}

impl TileKind {
    pub fn is_accessible(&self) -> bool {
        !matches!(self, TileKind::Inaccessible)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub occupant: Option<EntityId>,
}

impl Tile {
    pub fn new(kind: TileKind) -> Self {
        Self {
            kind,
            occupant: None,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimensions {width}x{height} outside {MIN_BOARD_DIM}..={MAX_BOARD_DIM}")]
    InvalidSize { width: usize, height: usize },
    #[error("coordinates ({x}, {y}) are out of bounds")]
    OutOfBounds { x: usize, y: usize },
    #[error("tile ({x}, {y}) is inaccessible")]
    Inaccessible { x: usize, y: usize },
    #[error("tile ({x}, {y}) is already occupied")]
    Occupied { x: usize, y: usize },
    #[error("no occupant to move at ({x}, {y})")]
    NoOccupant { x: usize, y: usize },
    #[error("occupant at ({x}, {y}) is a different entity")]
    WrongOccupant { x: usize, y: usize },
}

/// The grid world. Owns the tiles and who stands where; entities keep their
/// own position in sync through [`BoardEntity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Board {
    /// Used by the generator; tiles are in row-major order.
    pub(crate) fn from_tiles(width: usize, height: usize, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), width * height);
        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Bounds-checked tile lookup; `None` for out-of-range coordinates.
    pub fn tile_at(&self, x: usize, y: usize) -> Option<&Tile> {
        if self.in_bounds(x, y) {
            Some(&self.tiles[self.index(x, y)])
        } else {
            None
        }
    }

    /// Bounds-checked occupant lookup.
    pub fn entity_at(&self, x: usize, y: usize) -> Option<EntityId> {
        self.tile_at(x, y).and_then(|t| t.occupant)
    }

    /// Places an entity on an in-bounds, accessible, unoccupied tile,
    /// recording the occupancy and writing the position back to the entity.
    pub fn place_entity(
        &mut self,
        entity: &mut dyn BoardEntity,
        x: usize,
        y: usize,
    ) -> Result<(), BoardError> {
        if !self.in_bounds(x, y) {
            return Err(BoardError::OutOfBounds { x, y });
        }
        let idx = self.index(x, y);
        if !self.tiles[idx].kind.is_accessible() {
            return Err(BoardError::Inaccessible { x, y });
        }
        if self.tiles[idx].is_occupied() {
            return Err(BoardError::Occupied { x, y });
        }
        self.tiles[idx].occupant = Some(entity.id());
        entity.set_position(Position::new(x, y));
        Ok(())
    }

    /// Moves an entity one step (or any distance; adjacency is the caller's
    /// rule). Fails without mutating anything if either coordinate is out of
    /// bounds, the destination is inaccessible or occupied, or the source
    /// tile does not hold this entity.
    pub fn move_entity(
        &mut self,
        entity: &mut dyn BoardEntity,
        from: Position,
        to: Position,
    ) -> Result<(), BoardError> {
        if !self.in_bounds(from.x, from.y) {
            return Err(BoardError::OutOfBounds {
                x: from.x,
                y: from.y,
            });
        }
        if !self.in_bounds(to.x, to.y) {
            return Err(BoardError::OutOfBounds { x: to.x, y: to.y });
        }
        let to_idx = self.index(to.x, to.y);
        if !self.tiles[to_idx].kind.is_accessible() {
            return Err(BoardError::Inaccessible { x: to.x, y: to.y });
        }
        if self.tiles[to_idx].is_occupied() {
            return Err(BoardError::Occupied { x: to.x, y: to.y });
        }
        let from_idx = self.index(from.x, from.y);
        match self.tiles[from_idx].occupant {
            None => {
                return Err(BoardError::NoOccupant {
                    x: from.x,
                    y: from.y,
                })
            }
            Some(id) if id != entity.id() => {
                return Err(BoardError::WrongOccupant {
                    x: from.x,
                    y: from.y,
                })
            }
            Some(_) => {}
        }

        self.tiles[from_idx].occupant = None;
        self.tiles[to_idx].occupant = Some(entity.id());
        entity.set_position(to);
        Ok(())
    }

    /// Clears an occupancy without touching the entity (battle removal).
    pub fn clear_occupant(&mut self, x: usize, y: usize) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.tiles[idx].occupant = None;
        }
    }

    pub fn iter_tiles(&self) -> impl Iterator<Item = (usize, usize, &Tile)> {
        self.tiles.iter().enumerate().map(move |(i, tile)| {
            let x = i % self.width;
            let y = i / self.width;
            (x, y, tile)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Hero, HeroClass};

    fn open_board(width: usize, height: usize) -> Board {
        let tiles = vec![Tile::new(TileKind::Common); width * height];
        Board::from_tiles(width, height, tiles)
    }

    fn board_with_wall() -> Board {
        let mut tiles = vec![Tile::new(TileKind::Common); 16];
        tiles[5] = Tile::new(TileKind::Inaccessible); // (1, 1)
        Board::from_tiles(4, 4, tiles)
    }

    fn test_hero() -> Hero {
        Hero::new(
            "Scout".to_string(),
            HeroClass::Warrior,
            100,
            700,
            500,
            600,
            0,
            0,
        )
    }

    #[test]
    fn test_place_entity_sets_occupancy_and_position() {
        let mut board = open_board(4, 4);
        let mut hero = test_hero();
        board.place_entity(&mut hero, 2, 1).unwrap();
        assert_eq!(board.entity_at(2, 1), Some(hero.id));
        assert_eq!(hero.position, Some(Position::new(2, 1)));
    }

    #[test]
    fn test_place_entity_rejects_inaccessible_and_out_of_bounds() {
        let mut board = board_with_wall();
        let mut hero = test_hero();
        assert_eq!(
            board.place_entity(&mut hero, 1, 1),
            Err(BoardError::Inaccessible { x: 1, y: 1 })
        );
        assert_eq!(
            board.place_entity(&mut hero, 9, 0),
            Err(BoardError::OutOfBounds { x: 9, y: 0 })
        );
        assert_eq!(hero.position, None);
    }

    #[test]
    fn test_move_entity_transfers_occupancy() {
        let mut board = open_board(4, 4);
        let mut hero = test_hero();
        board.place_entity(&mut hero, 0, 0).unwrap();
        board
            .move_entity(&mut hero, Position::new(0, 0), Position::new(1, 0))
            .unwrap();
        assert_eq!(board.entity_at(0, 0), None);
        assert_eq!(board.entity_at(1, 0), Some(hero.id));
        assert_eq!(hero.position, Some(Position::new(1, 0)));
    }

    #[test]
    fn test_move_entity_rejects_inaccessible_without_mutation() {
        let mut board = board_with_wall();
        let mut hero = test_hero();
        board.place_entity(&mut hero, 0, 1).unwrap();
        let err = board
            .move_entity(&mut hero, Position::new(0, 1), Position::new(1, 1))
            .unwrap_err();
        assert_eq!(err, BoardError::Inaccessible { x: 1, y: 1 });
        assert_eq!(board.entity_at(0, 1), Some(hero.id));
        assert_eq!(hero.position, Some(Position::new(0, 1)));
    }

    #[test]
    fn test_place_entity_rejects_occupied_tile() {
        let mut board = open_board(4, 4);
        let mut hero = test_hero();
        let mut other = test_hero();
        board.place_entity(&mut hero, 2, 2).unwrap();
        assert_eq!(
            board.place_entity(&mut other, 2, 2),
            Err(BoardError::Occupied { x: 2, y: 2 })
        );
        assert_eq!(board.entity_at(2, 2), Some(hero.id));
    }

    #[test]
    fn test_clear_occupant_frees_the_tile() {
        let mut board = open_board(4, 4);
        let mut hero = test_hero();
        let mut other = test_hero();
        board.place_entity(&mut hero, 1, 1).unwrap();
        board.clear_occupant(1, 1);
        assert_eq!(board.entity_at(1, 1), None);
        board.place_entity(&mut other, 1, 1).unwrap();
        assert_eq!(board.entity_at(1, 1), Some(other.id));
    }

    #[test]
    fn test_move_entity_rejects_occupied_without_mutation() {
        let mut board = open_board(4, 4);
        let mut hero = test_hero();
        let mut other = test_hero();
        board.place_entity(&mut hero, 0, 0).unwrap();
        board.place_entity(&mut other, 1, 0).unwrap();
        let err = board
            .move_entity(&mut hero, Position::new(0, 0), Position::new(1, 0))
            .unwrap_err();
        assert_eq!(err, BoardError::Occupied { x: 1, y: 0 });
        assert_eq!(board.entity_at(0, 0), Some(hero.id));
    }

    #[test]
    fn test_move_entity_rejects_out_of_bounds() {
        let mut board = open_board(4, 4);
        let mut hero = test_hero();
        board.place_entity(&mut hero, 3, 3).unwrap();
        let err = board
            .move_entity(&mut hero, Position::new(3, 3), Position::new(4, 3))
            .unwrap_err();
        assert_eq!(err, BoardError::OutOfBounds { x: 4, y: 3 });
    }

    #[test]
    fn test_move_entity_requires_matching_occupant() {
        let mut board = open_board(4, 4);
        let mut hero = test_hero();
        let mut other = test_hero();
        board.place_entity(&mut other, 0, 0).unwrap();
        let err = board
            .move_entity(&mut hero, Position::new(0, 0), Position::new(1, 0))
            .unwrap_err();
        assert_eq!(err, BoardError::WrongOccupant { x: 0, y: 0 });

        let err = board
            .move_entity(&mut hero, Position::new(2, 2), Position::new(2, 3))
            .unwrap_err();
        assert_eq!(err, BoardError::NoOccupant { x: 2, y: 2 });
    }

    #[test]
    fn test_tile_lookups_are_bounds_checked() {
        let board = open_board(4, 4);
        assert!(board.tile_at(3, 3).is_some());
        assert!(board.tile_at(4, 0).is_none());
        assert!(board.tile_at(0, 4).is_none());
        assert_eq!(board.entity_at(10, 10), None);
    }
}
