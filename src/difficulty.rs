//! Difficulty levels and their tick/score tables.

use crate::constants::{EASY_TICK_MS, HARD_TICK_MS, INSANE_TICK_MS, MEDIUM_TICK_MS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty levels. Higher difficulty ticks faster and scores more per food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Insane,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Insane,
    ];

    /// Look up a difficulty by its declaration index. `None` if undefined.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Insane => "Insane",
        }
    }

    /// Milliseconds between movement ticks (lower = faster).
    pub fn tick_interval_ms(&self) -> u64 {
        match self {
            Self::Easy => EASY_TICK_MS,
            Self::Medium => MEDIUM_TICK_MS,
            Self::Hard => HARD_TICK_MS,
            Self::Insane => INSANE_TICK_MS,
        }
    }

    /// Multiplier applied to base food points.
    pub fn score_multiplier(&self) -> f64 {
        match self {
            Self::Easy => 1.0,
            Self::Medium => 1.5,
            Self::Hard => 2.5,
            Self::Insane => 5.0,
        }
    }

    /// `base` points scaled by the multiplier, rounded to the nearest integer.
    pub fn scaled_points(&self, base: u32) -> u32 {
        (f64::from(base) * self.score_multiplier()).round() as u32
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parameters() {
        assert_eq!(Difficulty::Easy.tick_interval_ms(), 150);
        assert_eq!(Difficulty::Medium.tick_interval_ms(), 100);
        assert_eq!(Difficulty::Hard.tick_interval_ms(), 60);
        assert_eq!(Difficulty::Insane.tick_interval_ms(), 30);

        assert_eq!(Difficulty::Easy.score_multiplier(), 1.0);
        assert_eq!(Difficulty::Medium.score_multiplier(), 1.5);
        assert_eq!(Difficulty::Hard.score_multiplier(), 2.5);
        assert_eq!(Difficulty::Insane.score_multiplier(), 5.0);
    }

    #[test]
    fn test_harder_is_faster_and_richer() {
        for pair in Difficulty::ALL.windows(2) {
            let (easier, harder) = (pair[0], pair[1]);
            assert!(easier.tick_interval_ms() > harder.tick_interval_ms());
            assert!(easier.score_multiplier() < harder.score_multiplier());
        }
    }

    #[test]
    fn test_scaled_points() {
        assert_eq!(Difficulty::Easy.scaled_points(10), 10);
        assert_eq!(Difficulty::Medium.scaled_points(10), 15);
        assert_eq!(Difficulty::Hard.scaled_points(10), 25);
        assert_eq!(Difficulty::Insane.scaled_points(50), 250);
        assert_eq!(Difficulty::Medium.scaled_points(50), 75);
    }

    #[test]
    fn test_difficulty_from_index() {
        assert_eq!(Difficulty::from_index(0), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_index(3), Some(Difficulty::Insane));
        assert_eq!(Difficulty::from_index(99), None);
    }

    #[test]
    fn test_default_and_names() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert_eq!(Difficulty::Insane.name(), "Insane");
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
    }
}
