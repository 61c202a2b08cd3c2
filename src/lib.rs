//! Snake Sim - tick-based grid simulation engine for a snake game.
//!
//! The engine owns the game state and advances it in discrete ticks driven by
//! wall-clock time supplied by the caller. Rendering, input handling, and
//! persistence are left to the embedding application: it polls
//! [`SnakeEngine::current_state`] to draw and drains
//! [`SnakeEngine::events_since_last_update`] to react to what happened.

pub mod config;
pub mod constants;
pub mod difficulty;
pub mod engine;
pub mod events;
pub mod geometry;
pub mod grid;
pub mod helpers;
pub mod state;
pub mod stats;
pub mod validator;

pub use config::EngineConfig;
pub use difficulty::Difficulty;
pub use engine::{GameEngine, SnakeEngine};
pub use events::{SnakeEventType, SnakeGameEvent};
pub use geometry::{Direction, Position};
pub use state::{GameState, GameStatus};
pub use stats::{GameHistory, GameStatistics, HistorySummary};
pub use validator::ValidationError;
