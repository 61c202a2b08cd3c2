//! Grid helpers: neighbours, bounds, pathfinding, placement, coverage.

use crate::constants::RANDOM_PLACEMENT_ATTEMPTS;
use crate::geometry::Position;
use crate::state::GameState;
use rand::Rng;
use std::collections::{HashMap, HashSet, VecDeque};

/// The 8 surrounding cells, row by row from the top-left. Not bounds-filtered.
pub fn neighbors8(p: Position) -> Vec<Position> {
    vec![
        p.offset(-1, -1), // top-left
        p.offset(0, -1),  // top
        p.offset(1, -1),  // top-right
        p.offset(-1, 0),  // left
        p.offset(1, 0),   // right
        p.offset(-1, 1),  // bottom-left
        p.offset(0, 1),   // bottom
        p.offset(1, 1),   // bottom-right
    ]
}

/// Cardinal neighbours in Top, Bottom, Left, Right order. Not bounds-filtered.
///
/// BFS expands in this order, so it determines which of several equal-length
/// paths [`shortest_path`] returns.
pub fn neighbors4(p: Position) -> Vec<Position> {
    vec![
        p.offset(0, -1), // top
        p.offset(0, 1),  // bottom
        p.offset(-1, 0), // left
        p.offset(1, 0),  // right
    ]
}

fn in_bounds(p: Position, width: i32, height: i32) -> bool {
    p.x >= 0 && p.x < width && p.y >= 0 && p.y < height
}

/// Keep only positions inside a `width` x `height` grid.
pub fn filter_valid<I>(positions: I, width: i32, height: i32) -> Vec<Position>
where
    I: IntoIterator<Item = Position>,
{
    positions
        .into_iter()
        .filter(|&p| in_bounds(p, width, height))
        .collect()
}

/// Breadth-first shortest path over the 4-connected grid.
///
/// Returns every cell from `start` to `goal` inclusive, or an empty vector if
/// `goal` cannot be reached without crossing an obstacle.
pub fn shortest_path(
    start: Position,
    goal: Position,
    width: i32,
    height: i32,
    obstacles: &[Position],
) -> Vec<Position> {
    let obstacles: HashSet<Position> = obstacles.iter().copied().collect();
    let mut parents: HashMap<Position, Position> = HashMap::new();
    let mut visited: HashSet<Position> = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            let mut path = vec![current];
            let mut cursor = current;
            while let Some(&parent) = parents.get(&cursor) {
                path.push(parent);
                cursor = parent;
            }
            path.reverse();
            return path;
        }

        for next in neighbors4(current) {
            if in_bounds(next, width, height)
                && !obstacles.contains(&next)
                && visited.insert(next)
            {
                parents.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    Vec::new()
}

/// Pick a random unoccupied cell.
///
/// Tries [`RANDOM_PLACEMENT_ATTEMPTS`] uniform draws, then falls back to a
/// row-major scan so sparse grids still terminate. `None` only when every
/// cell is occupied.
pub fn random_free_position<R: Rng>(
    rng: &mut R,
    width: i32,
    height: i32,
    occupied: &[Position],
) -> Option<Position> {
    random_free_position_with_attempts(rng, width, height, occupied, RANDOM_PLACEMENT_ATTEMPTS)
}

/// [`random_free_position`] with a custom number of random draws.
pub fn random_free_position_with_attempts<R: Rng>(
    rng: &mut R,
    width: i32,
    height: i32,
    occupied: &[Position],
    attempts: usize,
) -> Option<Position> {
    if width <= 0 || height <= 0 {
        return None;
    }

    let occupied: HashSet<Position> = occupied.iter().copied().collect();

    for _ in 0..attempts {
        let pos = Position::new(rng.gen_range(0..width), rng.gen_range(0..height));
        if !occupied.contains(&pos) {
            return Some(pos);
        }
    }

    (0..height)
        .flat_map(|y| (0..width).map(move |x| Position::new(x, y)))
        .find(|pos| !occupied.contains(pos))
}

/// Percentage of the grid covered by `body`.
pub fn occupancy_percentage(body: &[Position], width: i32, height: i32) -> f64 {
    let total_cells = f64::from(width) * f64::from(height);
    if total_cells <= 0.0 {
        return 0.0;
    }
    body.len() as f64 / total_cells * 100.0
}

/// The body plus the cardinal neighbours of its first three segments.
///
/// Approximates the cells the snake can reach within the next move.
pub fn snake_coverage(body: &[Position]) -> Vec<Position> {
    let mut seen = HashSet::new();
    let mut coverage = Vec::new();

    let near_head = body.iter().take(3).flat_map(|&segment| neighbors4(segment));
    for pos in body.iter().copied().chain(near_head) {
        if seen.insert(pos) {
            coverage.push(pos);
        }
    }

    coverage
}

/// ASCII rendering of the grid for logs and test failures.
///
/// `.` empty, `F` food, `*` special food, `H` head, `s` body.
pub fn debug_visualize(state: &GameState) -> String {
    let width = state.grid_width.max(0) as usize;
    let height = state.grid_height.max(0) as usize;
    let mut grid = vec![vec!['.'; width]; height];

    let mut put = |pos: Position, ch: char| {
        if state.is_in_bounds(pos) {
            grid[pos.y as usize][pos.x as usize] = ch;
        }
    };

    if let Some(food) = state.food {
        put(food, 'F');
    }
    if let Some(special) = state.special_food {
        put(special, '*');
    }
    // Tail first so the head wins any overlap.
    for (i, &segment) in state.snake_body.iter().enumerate().rev() {
        put(segment, if i == 0 { 'H' } else { 's' });
    }

    let mut out = String::with_capacity((width + 1) * height);
    for row in grid {
        out.extend(row);
        out.push('\n');
    }
    out
}
