//! Events produced by the engine for the presentation layer.
//!
//! The engine buffers these between drains; the UI maps them to log lines,
//! sounds, or effects without the engine knowing about any of that.

use crate::geometry::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnakeEventType {
    FoodEaten,
    SpecialFoodEaten,
    Collision,
    DirectionChanged,
    GameStarted,
    GamePaused,
    GameResumed,
    /// Emitted for both collisions and victory; `message` tells them apart.
    GameOver,
    GameReset,
}

/// A single engine event. Immutable once emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnakeGameEvent {
    pub event_type: SnakeEventType,
    /// Milliseconds since game start when the event happened.
    pub timestamp_ms: u64,
    pub position: Option<Position>,
    pub score_gained: Option<u32>,
    pub message: Option<String>,
}

impl SnakeGameEvent {
    pub fn new(event_type: SnakeEventType, timestamp_ms: u64) -> Self {
        Self {
            event_type,
            timestamp_ms,
            position: None,
            score_gained: None,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_score(mut self, score_gained: u32) -> Self {
        self.score_gained = Some(score_gained);
        self
    }
}

impl fmt::Display for SnakeGameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}] {}ms - {}",
            self.event_type,
            self.timestamp_ms,
            self.message.as_deref().unwrap_or("")
        )
    }
}

/// The last `count` events, oldest first. For drivers that show a short feed.
pub fn recent_events(events: &[SnakeGameEvent], count: usize) -> &[SnakeGameEvent] {
    let start = events.len().saturating_sub(count);
    &events[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_EVENTS_DISPLAY;

    #[test]
    fn test_builder_sets_optional_fields() {
        let event = SnakeGameEvent::new(SnakeEventType::FoodEaten, 420)
            .with_position(Position::new(3, 4))
            .with_score(15)
            .with_message("food eaten! +15 points");

        assert_eq!(event.event_type, SnakeEventType::FoodEaten);
        assert_eq!(event.timestamp_ms, 420);
        assert_eq!(event.position, Some(Position::new(3, 4)));
        assert_eq!(event.score_gained, Some(15));
    }

    #[test]
    fn test_display_format() {
        let event = SnakeGameEvent::new(SnakeEventType::GameOver, 1200).with_message("wall collision");
        assert_eq!(event.to_string(), "[GameOver] 1200ms - wall collision");

        let bare = SnakeGameEvent::new(SnakeEventType::GamePaused, 0);
        assert_eq!(bare.to_string(), "[GamePaused] 0ms - ");
    }

    #[test]
    fn test_recent_events_keeps_tail() {
        let events: Vec<_> = (0..8)
            .map(|i| SnakeGameEvent::new(SnakeEventType::DirectionChanged, i))
            .collect();

        let recent = recent_events(&events, MAX_EVENTS_DISPLAY);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].timestamp_ms, 3);
        assert_eq!(recent[4].timestamp_ms, 7);

        assert_eq!(recent_events(&events[..2], 5).len(), 2);
        assert!(recent_events(&[], 5).is_empty());
    }
}
