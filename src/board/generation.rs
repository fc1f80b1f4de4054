//! Procedural board generation.
//!
//! Each tile is drawn independently, then the whole layout is checked for
//! connectivity between accessible tiles. Disconnected layouts are thrown
//! away and redrawn so every market is reachable from every common tile.

use std::collections::VecDeque;

use rand::Rng;

use crate::constants::{
    MAX_BOARD_DIM, MIN_BOARD_DIM, TILE_INACCESSIBLE_THRESHOLD, TILE_MARKET_THRESHOLD,
};

use super::types::{Board, BoardError, Tile, TileKind};

/// Generates a connected board of the given dimensions. Tile mix is roughly
/// 20% inaccessible, 30% market, 50% common.
pub fn generate_board(
    width: usize,
    height: usize,
    rng: &mut impl Rng,
) -> Result<Board, BoardError> {
    if !(MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&width)
        || !(MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&height)
    {
        return Err(BoardError::InvalidSize { width, height });
    }

    loop {
        let tiles: Vec<Tile> = (0..width * height)
            .map(|_| Tile::new(draw_tile_kind(rng)))
            .collect();
        if accessible_tiles_connected(width, height, &tiles) {
            return Ok(Board::from_tiles(width, height, tiles));
        }
    }
}

fn draw_tile_kind(rng: &mut impl Rng) -> TileKind {
    let roll = rng.gen_range(0..100);
    if roll < TILE_INACCESSIBLE_THRESHOLD {
        TileKind::Inaccessible
    } else if roll < TILE_MARKET_THRESHOLD {
        TileKind::Market
    } else {
        TileKind::Common
    }
}

/// BFS over 4-neighbors from the first accessible tile. A board with zero
/// accessible tiles counts as disconnected.
fn accessible_tiles_connected(width: usize, height: usize, tiles: &[Tile]) -> bool {
    let accessible_total = tiles.iter().filter(|t| t.kind.is_accessible()).count();
    if accessible_total == 0 {
        return false;
    }

    let start = match tiles.iter().position(|t| t.kind.is_accessible()) {
        Some(i) => i,
        None => return false,
    };

    let mut visited = vec![false; tiles.len()];
    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);
    let mut reached = 0;

    while let Some(idx) = queue.pop_front() {
        reached += 1;
        let x = idx % width;
        let y = idx / width;
        let mut neighbors = Vec::with_capacity(4);
        if x > 0 {
            neighbors.push(idx - 1);
        }
        if x + 1 < width {
            neighbors.push(idx + 1);
        }
        if y > 0 {
            neighbors.push(idx - width);
        }
        if y + 1 < height {
            neighbors.push(idx + width);
        }
        for n in neighbors {
            if !visited[n] && tiles[n].kind.is_accessible() {
                visited[n] = true;
                queue.push_back(n);
            }
        }
    }

    reached == accessible_total
}
