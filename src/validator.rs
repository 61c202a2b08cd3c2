//! Precondition checks on caller-supplied input.
//!
//! These reject malformed input with a [`ValidationError`]. Well-formed calls
//! made in the wrong lifecycle state are not errors; the engine ignores them.

use crate::constants::{MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::difficulty::Difficulty;
use crate::geometry::{Direction, Position};
use crate::state::GameState;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("grid {width}x{height} is below the 5x5 minimum")]
    GridTooSmall { width: i32, height: i32 },
    #[error("grid {width}x{height} exceeds the 100x100 maximum")]
    GridTooLarge { width: i32, height: i32 },
    #[error("position {position} is outside the {width}x{height} grid")]
    InvalidPosition {
        position: Position,
        width: i32,
        height: i32,
    },
    #[error("invalid direction index: {0}")]
    InvalidDirection(usize),
    #[error("invalid difficulty index: {0}")]
    InvalidDifficulty(usize),
    #[error("invalid game state: {0}")]
    InvalidState(String),
}

pub fn validate_grid_dimensions(width: i32, height: i32) -> Result<(), ValidationError> {
    if width < MIN_GRID_SIZE || height < MIN_GRID_SIZE {
        return Err(ValidationError::GridTooSmall { width, height });
    }
    if width > MAX_GRID_SIZE || height > MAX_GRID_SIZE {
        return Err(ValidationError::GridTooLarge { width, height });
    }
    Ok(())
}

pub fn validate_position(position: Position, width: i32, height: i32) -> Result<(), ValidationError> {
    if position.x < 0 || position.x >= width || position.y < 0 || position.y >= height {
        return Err(ValidationError::InvalidPosition {
            position,
            width,
            height,
        });
    }
    Ok(())
}

/// Resolve a raw direction index coming from an untyped source.
pub fn validate_direction_index(index: usize) -> Result<Direction, ValidationError> {
    Direction::from_index(index).ok_or(ValidationError::InvalidDirection(index))
}

/// Resolve a raw difficulty index coming from an untyped source.
pub fn validate_difficulty_index(index: usize) -> Result<Difficulty, ValidationError> {
    Difficulty::from_index(index).ok_or(ValidationError::InvalidDifficulty(index))
}

/// Structural checks: a snake, a playable grid, and food on the board while
/// the game can still be played. A finished game may have filled the board.
pub fn validate_game_state(state: &GameState) -> Result<(), ValidationError> {
    if state.snake_body.is_empty() {
        return Err(ValidationError::InvalidState(
            "snake must have at least one segment".to_string(),
        ));
    }
    if state.grid_width < MIN_GRID_SIZE || state.grid_height < MIN_GRID_SIZE {
        return Err(ValidationError::InvalidState("grid is too small".to_string()));
    }
    if state.food.is_none() && !state.status.is_terminal() {
        return Err(ValidationError::InvalidState("food must be present".to_string()));
    }
    Ok(())
}
