//! Integration tests for board generation and movement.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use legends::board::{generate_board, Board, BoardError, TileKind};
use legends::character::{Hero, HeroClass};
use legends::entity::Position;

fn test_hero(name: &str) -> Hero {
    Hero::new(
        name.to_string(),
        HeroClass::Warrior,
        100,
        700,
        500,
        600,
        0,
        0,
    )
}

/// Reachability check independent of the generator's own BFS.
fn all_accessible_reachable(board: &Board) -> bool {
    let width = board.width();
    let height = board.height();
    let accessible: Vec<(usize, usize)> = board
        .iter_tiles()
        .filter(|(_, _, t)| t.kind.is_accessible())
        .map(|(x, y, _)| (x, y))
        .collect();
    let start = match accessible.first() {
        Some(&s) => s,
        None => return false,
    };

    let mut visited = vec![vec![false; width]; height];
    let mut stack = vec![start];
    visited[start.1][start.0] = true;
    let mut reached = 0;
    while let Some((x, y)) = stack.pop() {
        reached += 1;
        let mut neighbors = vec![(x + 1, y), (x, y + 1)];
        if x > 0 {
            neighbors.push((x - 1, y));
        }
        if y > 0 {
            neighbors.push((x, y - 1));
        }
        for (nx, ny) in neighbors {
            if nx < width
                && ny < height
                && !visited[ny][nx]
                && board
                    .tile_at(nx, ny)
                    .is_some_and(|t| t.kind.is_accessible())
            {
                visited[ny][nx] = true;
                stack.push((nx, ny));
            }
        }
    }
    reached == accessible.len()
}

#[test]
fn test_generated_boards_are_connected_across_sizes() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for (w, h) in [(4, 4), (8, 8), (7, 13), (20, 20)] {
        let board = generate_board(w, h, &mut rng).unwrap();
        assert_eq!(board.width(), w);
        assert_eq!(board.height(), h);
        assert!(all_accessible_reachable(&board), "{w}x{h} disconnected");
    }
}

#[test]
fn test_same_seed_reproduces_the_board() {
    let mut a = ChaCha8Rng::seed_from_u64(77);
    let mut b = ChaCha8Rng::seed_from_u64(77);
    let first = generate_board(10, 10, &mut a).unwrap();
    let second = generate_board(10, 10, &mut b).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_dimension_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert!(matches!(
        generate_board(2, 10, &mut rng),
        Err(BoardError::InvalidSize { .. })
    ));
    assert!(matches!(
        generate_board(10, 25, &mut rng),
        Err(BoardError::InvalidSize { .. })
    ));
}

#[test]
fn test_large_board_has_all_tile_kinds() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let board = generate_board(20, 20, &mut rng).unwrap();
    for kind in [TileKind::Common, TileKind::Market, TileKind::Inaccessible] {
        assert!(
            board.iter_tiles().any(|(_, _, t)| t.kind == kind),
            "missing {kind:?}"
        );
    }
}

#[test]
fn test_hero_walks_a_generated_board() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut board = generate_board(8, 8, &mut rng).unwrap();

    let (sx, sy) = board
        .iter_tiles()
        .find(|(_, _, t)| t.kind.is_accessible())
        .map(|(x, y, _)| (x, y))
        .unwrap();
    let mut hero = test_hero("Walker");
    board.place_entity(&mut hero, sx, sy).unwrap();
    assert_eq!(board.entity_at(sx, sy), Some(hero.id));

    // Step to any accessible 4-neighbor; connectivity guarantees one exists.
    let mut neighbors = Vec::new();
    if sx > 0 {
        neighbors.push((sx - 1, sy));
    }
    if sy > 0 {
        neighbors.push((sx, sy - 1));
    }
    neighbors.push((sx + 1, sy));
    neighbors.push((sx, sy + 1));
    let (nx, ny) = neighbors
        .into_iter()
        .find(|&(x, y)| board.tile_at(x, y).is_some_and(|t| t.kind.is_accessible()))
        .unwrap();

    board
        .move_entity(&mut hero, Position::new(sx, sy), Position::new(nx, ny))
        .unwrap();
    assert_eq!(board.entity_at(sx, sy), None);
    assert_eq!(board.entity_at(nx, ny), Some(hero.id));
    assert_eq!(hero.position, Some(Position::new(nx, ny)));
}

#[test]
fn test_second_hero_cannot_share_a_tile() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut board = generate_board(8, 8, &mut rng).unwrap();
    let (sx, sy) = board
        .iter_tiles()
        .find(|(_, _, t)| t.kind.is_accessible())
        .map(|(x, y, _)| (x, y))
        .unwrap();

    let mut first = test_hero("First");
    let mut second = test_hero("Second");
    board.place_entity(&mut first, sx, sy).unwrap();

    // Place the second hero elsewhere, then try to walk onto the first.
    let (ox, oy) = board
        .iter_tiles()
        .find(|&(x, y, t)| t.kind.is_accessible() && (x, y) != (sx, sy))
        .map(|(x, y, _)| (x, y))
        .unwrap();
    board.place_entity(&mut second, ox, oy).unwrap();
    let err = board
        .move_entity(&mut second, Position::new(ox, oy), Position::new(sx, sy))
        .unwrap_err();
    assert_eq!(err, BoardError::Occupied { x: sx, y: sy });
}
