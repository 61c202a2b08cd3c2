//! Convenience functions for drivers that don't want to touch the grid module.

use crate::engine::SnakeEngine;
use crate::geometry::Position;
use crate::state::GameState;
use std::collections::HashSet;

/// Engine with default rules and entropy-seeded randomness.
pub fn create_engine() -> SnakeEngine {
    SnakeEngine::new()
}

/// Empty default state (no snake, no food).
pub fn create_game_state() -> GameState {
    GameState::default()
}

pub fn is_valid_position(position: Position, width: i32, height: i32) -> bool {
    position.x >= 0 && position.x < width && position.y >= 0 && position.y < height
}

pub fn manhattan_distance(a: Position, b: Position) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// Every cell not covered by the snake, food, or special food, row by row.
pub fn free_positions(state: &GameState) -> Vec<Position> {
    let mut occupied: HashSet<Position> = state.snake_body.iter().copied().collect();
    occupied.extend(state.food);
    occupied.extend(state.special_food);

    (0..state.grid_height)
        .flat_map(|y| (0..state.grid_width).map(move |x| Position::new(x, y)))
        .filter(|pos| !occupied.contains(pos))
        .collect()
}
