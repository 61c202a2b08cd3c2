//! Simulation snapshot and its derived properties.

use crate::constants::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
use crate::difficulty::Difficulty;
use crate::geometry::{Direction, Position};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Lifecycle of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    NotStarted,
    Playing,
    Paused,
    GameOver,
    Victory,
}

impl GameStatus {
    /// GameOver and Victory accept no further ticks.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::GameOver | Self::Victory)
    }
}

/// Complete game state.
///
/// Only the engine mutates its own copy; readers receive an independent
/// [`GameState::snapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub grid_width: i32,
    pub grid_height: i32,

    /// Body segments. Head is at the front (index 0).
    pub snake_body: VecDeque<Position>,
    pub food: Option<Position>,
    pub special_food: Option<Position>,

    /// Direction applied on the previous tick.
    pub current_direction: Direction,
    /// Buffered direction applied on the next tick.
    pub next_direction: Direction,

    pub score: u32,
    pub food_eaten: u32,
    pub status: GameStatus,
    pub difficulty: Difficulty,

    /// Milliseconds since the game was started.
    pub elapsed_ms: u64,
    pub start_time: DateTime<Utc>,
    pub game_over_time: Option<DateTime<Utc>>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            snake_body: VecDeque::new(),
            food: None,
            special_food: None,
            current_direction: Direction::Right,
            next_direction: Direction::Right,
            score: 0,
            food_eaten: 0,
            status: GameStatus::NotStarted,
            difficulty: Difficulty::default(),
            elapsed_ms: 0,
            start_time: Utc::now(),
            game_over_time: None,
        }
    }
}

impl GameState {
    pub fn head(&self) -> Option<Position> {
        self.snake_body.front().copied()
    }

    pub fn tail(&self) -> Option<Position> {
        self.snake_body.back().copied()
    }

    pub fn len(&self) -> usize {
        self.snake_body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake_body.is_empty()
    }

    /// True if the head sits on any other segment.
    pub fn is_colliding_with_self(&self) -> bool {
        match self.head() {
            Some(head) => self.snake_body.iter().skip(1).any(|&segment| segment == head),
            None => false,
        }
    }

    /// True if there is no head or the head lies outside the grid.
    pub fn is_out_of_bounds(&self) -> bool {
        match self.head() {
            Some(head) => !self.is_in_bounds(head),
            None => true,
        }
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.grid_width && pos.y >= 0 && pos.y < self.grid_height
    }

    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake_body.contains(&pos)
    }

    /// Full deep copy for external readers.
    pub fn snapshot(&self) -> GameState {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_body(body: Vec<Position>) -> GameState {
        GameState {
            grid_width: 10,
            grid_height: 10,
            snake_body: body.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_state() {
        let state = GameState::default();
        assert_eq!(state.grid_width, 20);
        assert_eq!(state.grid_height, 15);
        assert_eq!(state.status, GameStatus::NotStarted);
        assert_eq!(state.difficulty, Difficulty::Medium);
        assert!(state.is_empty());
        assert!(state.head().is_none());
        assert!(state.is_out_of_bounds());
    }

    #[test]
    fn test_head_tail_length() {
        let state = state_with_body(vec![
            Position::new(5, 5),
            Position::new(4, 5),
            Position::new(3, 5),
        ]);
        assert_eq!(state.head(), Some(Position::new(5, 5)));
        assert_eq!(state.tail(), Some(Position::new(3, 5)));
        assert_eq!(state.len(), 3);
        assert!(!state.is_colliding_with_self());
        assert!(!state.is_out_of_bounds());
    }

    #[test]
    fn test_self_collision_detected() {
        let state = state_with_body(vec![
            Position::new(5, 5),
            Position::new(5, 6),
            Position::new(4, 6),
            Position::new(4, 5),
            Position::new(5, 5),
        ]);
        assert!(state.is_colliding_with_self());
    }

    #[test]
    fn test_out_of_bounds_head() {
        let state = state_with_body(vec![Position::new(10, 3), Position::new(9, 3)]);
        assert!(state.is_out_of_bounds());

        let state = state_with_body(vec![Position::new(0, -1)]);
        assert!(state.is_out_of_bounds());
    }

    #[test]
    fn test_bounds_checking() {
        let state = state_with_body(vec![Position::new(1, 1)]);
        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(9, 9)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(10, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 10)));
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(GameStatus::GameOver.is_terminal());
        assert!(GameStatus::Victory.is_terminal());
        assert!(!GameStatus::Playing.is_terminal());
        assert!(!GameStatus::Paused.is_terminal());
        assert!(!GameStatus::NotStarted.is_terminal());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut original = state_with_body(vec![Position::new(2, 2), Position::new(1, 2)]);
        original.score = 100;

        let mut copy = original.snapshot();
        assert_eq!(copy, original);

        copy.score = 200;
        copy.snake_body.push_back(Position::new(0, 2));
        copy.food = Some(Position::new(7, 7));

        assert_eq!(original.score, 100);
        assert_eq!(original.len(), 2);
        assert!(original.food.is_none());
    }
}
