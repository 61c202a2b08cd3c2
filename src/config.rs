use crate::constants::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, INITIAL_SNAKE_LENGTH, NORMAL_FOOD_POINTS,
    RANDOM_PLACEMENT_ATTEMPTS, SPECIAL_FOOD_POINTS, SPECIAL_FOOD_SPAWN_CHANCE_PERCENT,
    VICTORY_LENGTH,
};
use crate::difficulty::Difficulty;
use crate::validator::{validate_grid_dimensions, ValidationError};
use serde::{Deserialize, Serialize};

/// Tunables for a [`SnakeEngine`](crate::engine::SnakeEngine).
///
/// The defaults reproduce the standard rules; tests and drivers may override
/// individual fields with struct update syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Grid used when the engine is first created.
    pub default_grid_width: i32,
    pub default_grid_height: i32,
    pub default_difficulty: Difficulty,

    /// Segments in a freshly initialized snake.
    pub initial_length: usize,
    /// Reaching this length ends the game in victory.
    pub victory_length: usize,

    /// Base points before the difficulty multiplier.
    pub food_points: u32,
    pub special_food_points: u32,
    /// Chance (0-100) that eating special food spawns another.
    pub special_food_chance_percent: u32,

    /// Random draws before food placement falls back to a full scan.
    pub random_attempts: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_grid_width: DEFAULT_GRID_WIDTH,
            default_grid_height: DEFAULT_GRID_HEIGHT,
            default_difficulty: Difficulty::Medium,
            initial_length: INITIAL_SNAKE_LENGTH,
            victory_length: VICTORY_LENGTH,
            food_points: NORMAL_FOOD_POINTS,
            special_food_points: SPECIAL_FOOD_POINTS,
            special_food_chance_percent: SPECIAL_FOOD_SPAWN_CHANCE_PERCENT,
            random_attempts: RANDOM_PLACEMENT_ATTEMPTS,
        }
    }
}

impl EngineConfig {
    /// Default rules on a custom grid.
    pub fn with_grid(width: i32, height: i32) -> Self {
        Self {
            default_grid_width: width,
            default_grid_height: height,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_grid_dimensions(self.default_grid_width, self.default_grid_height)?;

        if self.initial_length == 0 {
            return Err(ValidationError::InvalidState(
                "initial snake length must be at least 1".to_string(),
            ));
        }
        // The body extends left from the center column.
        let room = (self.default_grid_width / 2 + 1) as usize;
        if self.initial_length > room {
            return Err(ValidationError::InvalidState(format!(
                "initial snake length {} does not fit a grid {} wide",
                self.initial_length, self.default_grid_width
            )));
        }
        if self.victory_length <= self.initial_length {
            return Err(ValidationError::InvalidState(format!(
                "victory length {} must exceed initial length {}",
                self.victory_length, self.initial_length
            )));
        }
        Ok(())
    }
}
