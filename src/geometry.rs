//! Grid coordinates and movement directions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell on the game grid. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Position one cell away in `direction`.
    pub fn moved(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Look up a direction by its declaration index. `None` if undefined.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn.
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the (dx, dy) delta for this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_equality_is_by_value() {
        let a = Position::new(3, 4);
        let b = Position::new(3, 4);
        assert_eq!(a, b);
        assert_ne!(a, Position::new(4, 3));
    }

    #[test]
    fn test_position_copy_is_independent() {
        let original = Position::new(5, 5);
        let mut copy = original;
        copy.x = 20;
        assert_eq!(original.x, 5);
        assert_eq!(copy.x, 20);
    }

    #[test]
    fn test_position_offset_and_move() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.offset(1, 0), Position::new(6, 5));
        assert_eq!(pos.offset(0, -1), Position::new(5, 4));
        assert_eq!(pos.moved(Direction::Up), Position::new(5, 4));
        assert_eq!(pos.moved(Direction::Left), Position::new(4, 5));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(-1, 7).to_string(), "(-1, 7)");
    }

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Down.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_opposite_roundtrip() {
        for d in Direction::ALL {
            assert!(d.is_opposite(d.opposite()));
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_direction_from_index() {
        assert_eq!(Direction::from_index(0), Some(Direction::Up));
        assert_eq!(Direction::from_index(3), Some(Direction::Right));
        assert_eq!(Direction::from_index(4), None);
    }
}
