//! Integration test: recording finished games
//!
//! Plays short games to completion and feeds the terminal states into a
//! history, the way a persistence layer would.

use chrono::{DateTime, Duration, TimeZone, Utc};
use snake_sim::{
    Difficulty, Direction, GameHistory, GameStatistics, GameStatus, Position, SnakeEngine,
};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 9, 9, 0, 0).unwrap()
}

/// Play a game that eats `meals` food straight ahead, then runs into the
/// right-hand wall.
fn play_to_wall(difficulty: Difficulty, meals: usize) -> SnakeEngine {
    let mut engine = SnakeEngine::with_seed(11);
    engine.initialize_at(difficulty, 20, 10, t0()).unwrap();
    engine.start_at(t0());

    let interval = difficulty.tick_interval_ms() as i64;
    let mut now = 0;
    let mut eaten = 0;
    while engine.is_game_active() {
        let mut state = engine.current_state();
        let ahead = state.head().unwrap().moved(Direction::Right);
        state.food = Some(if eaten < meals && state.is_in_bounds(ahead) {
            eaten += 1;
            ahead
        } else {
            Position::new(0, 0)
        });
        engine.load_state(state).unwrap();

        now += interval;
        engine.update(t0() + Duration::milliseconds(now));
    }
    engine
}

#[test]
fn test_history_from_played_games() {
    let mut history = GameHistory::new();

    let easy = play_to_wall(Difficulty::Easy, 2);
    history.add_game(&easy.current_state());

    let insane = play_to_wall(Difficulty::Insane, 4);
    history.add_game(&insane.current_state());

    assert_eq!(history.len(), 2);
    assert_eq!(history.best_score(), Some(200));
    assert_eq!(history.max_length(), Some(7));
    assert_eq!(history.victory_count(), 0);

    let first = &history.games()[0];
    assert_eq!(first.final_score, 20);
    assert_eq!(first.final_length, 5);
    assert_eq!(first.food_eaten, 2);
    assert_eq!(first.final_status, GameStatus::GameOver);
    assert_eq!(first.difficulty, Difficulty::Easy);
    // Head starts at x=10 on a 20-wide grid: 9 moves, the 10th hits the wall.
    assert_eq!(first.duration_ms, 1500);

    let summary = history.summary().unwrap();
    assert_eq!(summary.games_played, 2);
    assert_eq!(summary.average_score, 110.0);
    assert_eq!(summary.total_duration_ms, 1500 + 300);
}

#[test]
fn test_statistics_serialize_for_storage() {
    let engine = play_to_wall(Difficulty::Medium, 1);
    let stats = GameStatistics::from_state(&engine.current_state());

    let json = serde_json::to_string(&stats).unwrap();
    let restored: GameStatistics = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, stats);
    assert!(json.contains("\"final_status\":\"GameOver\""));
}

#[test]
fn test_snapshot_recorded_independently_of_engine() {
    let mut engine = play_to_wall(Difficulty::Hard, 0);
    let mut history = GameHistory::new();
    history.add_game(&engine.current_state());

    engine.reset_at(t0() + Duration::seconds(5));
    assert_eq!(engine.status(), GameStatus::NotStarted);
    assert_eq!(history.games()[0].final_status, GameStatus::GameOver);
    assert_eq!(history.games()[0].final_length, 3);
}
