//! Shared world builders for the benchmark suites.

#![forbid(unsafe_code)]

use redo_harness::worlds::grid_maze::GridMaze;
use redo_harness::worlds::racetrack::Racetrack;
use redo_search::NodeArena;

/// An open square maze: start top-left, goal bottom-right, no interior
/// walls.
///
/// # Panics
///
/// Panics if `side < 2` (the map would have no room for both markers).
#[must_use]
pub fn open_maze(side: usize) -> GridMaze {
    assert!(side >= 2, "side {side} leaves no room for start and goal");
    let mut map = String::new();
    for row in 0..side {
        for col in 0..side {
            map.push(match (col, row) {
                (0, 0) => 'S',
                (c, r) if c == side - 1 && r == side - 1 => 'G',
                _ => '.',
            });
        }
        map.push('\n');
    }
    GridMaze::from_ascii(&map).expect("generated map is well formed")
}

/// A walled square track of the given side: start near the left wall, a
/// vertical finish line one cell in from the right wall.
///
/// # Panics
///
/// Panics if `side < 5` (too small for the start/finish layout).
#[must_use]
pub fn boxed_track(side: i32) -> Racetrack {
    assert!(side >= 5, "side {side} is too small for this layout");
    Racetrack::new(
        (1, 2),
        ((side - 1, 1), (side - 1, 3)),
        vec![
            ((0, 0), (side, 0)),
            ((side, 0), (side, side)),
            ((side, side), (0, side)),
            ((0, side), (0, 0)),
        ],
    )
}

/// An arena of `n` root-level nodes with distinct states and costs chosen
/// so uniform-cost ordering reverses creation order.
#[must_use]
pub fn descending_cost_arena(n: u64) -> (NodeArena<u64>, Vec<u64>) {
    let mut arena = NodeArena::new();
    #[allow(clippy::cast_precision_loss)]
    let ids: Vec<u64> = (0..n)
        .map(|i| arena.create(i, None, (n - i) as f64, None))
        .collect();
    (arena, ids)
}
