//! Finished-game statistics and the per-session history.

use crate::difficulty::Difficulty;
use crate::state::{GameState, GameStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Summary of one game, captured from its state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStatistics {
    pub final_score: u32,
    pub final_length: usize,
    pub food_eaten: u32,
    pub duration_ms: u64,
    pub difficulty: Difficulty,
    pub final_status: GameStatus,
    pub played_at: DateTime<Utc>,
}

impl GameStatistics {
    pub fn from_state(state: &GameState) -> Self {
        Self::from_state_at(state, Utc::now())
    }

    pub fn from_state_at(state: &GameState, played_at: DateTime<Utc>) -> Self {
        Self {
            final_score: state.score,
            final_length: state.len(),
            food_eaten: state.food_eaten,
            duration_ms: state.elapsed_ms,
            difficulty: state.difficulty,
            final_status: state.status,
            played_at,
        }
    }

    /// Average seconds between meals; 0 if nothing was eaten.
    pub fn average_eating_pace(&self) -> f64 {
        if self.food_eaten == 0 {
            return 0.0;
        }
        self.duration_ms as f64 / 1000.0 / f64::from(self.food_eaten)
    }

    pub fn score_per_second(&self) -> f64 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        f64::from(self.final_score) / (self.duration_ms as f64 / 1000.0)
    }

    /// One-line human-readable summary.
    pub fn summary(&self) -> String {
        let outcome = match self.final_status {
            GameStatus::Victory => "VICTORY",
            GameStatus::GameOver => "GAME OVER",
            _ => "Unfinished",
        };
        format!(
            "{} | Score: {} | Length: {} | Time: {} | Difficulty: {}",
            outcome,
            self.final_score,
            self.final_length,
            format_mm_ss(self.duration_ms),
            self.difficulty
        )
    }
}

/// Aggregate figures over a [`GameHistory`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub games_played: usize,
    pub victories: usize,
    pub average_score: f64,
    pub total_duration_ms: u64,
}

/// Append-only record of finished games.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameHistory {
    games: Vec<GameStatistics>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_game(&mut self, state: &GameState) {
        self.record(GameStatistics::from_state(state));
    }

    /// Append already-captured statistics.
    pub fn record(&mut self, stats: GameStatistics) {
        debug!(
            score = stats.final_score,
            length = stats.final_length,
            status = ?stats.final_status,
            "game recorded"
        );
        self.games.push(stats);
    }

    pub fn games(&self) -> &[GameStatistics] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn best_score(&self) -> Option<u32> {
        self.games.iter().map(|g| g.final_score).max()
    }

    pub fn max_length(&self) -> Option<usize> {
        self.games.iter().map(|g| g.final_length).max()
    }

    pub fn victory_count(&self) -> usize {
        self.games
            .iter()
            .filter(|g| g.final_status == GameStatus::Victory)
            .count()
    }

    /// `None` when no games have been recorded.
    pub fn summary(&self) -> Option<HistorySummary> {
        if self.games.is_empty() {
            return None;
        }
        let total_score: u64 = self.games.iter().map(|g| u64::from(g.final_score)).sum();
        Some(HistorySummary {
            games_played: self.games.len(),
            victories: self.victory_count(),
            average_score: total_score as f64 / self.games.len() as f64,
            total_duration_ms: self.games.iter().map(|g| g.duration_ms).sum(),
        })
    }

    /// Human-readable aggregate line.
    pub fn global_stats(&self) -> String {
        match self.summary() {
            None => "no games played".to_string(),
            Some(s) => format!(
                "Games: {} | Victories: {} | Average score: {:.1} | Total time: {}",
                s.games_played,
                s.victories,
                s.average_score,
                format_hh_mm_ss(s.total_duration_ms)
            ),
        }
    }

    pub fn clear(&mut self) {
        self.games.clear();
    }
}

fn format_mm_ss(ms: u64) -> String {
    let total_secs = ms / 1000;
    format!("{:02}:{:02}", (total_secs / 60) % 60, total_secs % 60)
}

fn format_hh_mm_ss(ms: u64) -> String {
    let total_secs = ms / 1000;
    format!(
        "{:02}:{:02}:{:02}",
        total_secs / 3600,
        (total_secs / 60) % 60,
        total_secs % 60
    )
}
