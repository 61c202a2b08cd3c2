//! The simulation engine: lifecycle state machine, time accumulator, and tick.
//!
//! A driver calls [`SnakeEngine::update`] every frame with the wall-clock
//! time. Elapsed time is accumulated and, once it reaches the difficulty's
//! tick interval, exactly one movement step runs. Leftover time is dropped so
//! a slow frame never produces a burst of catch-up ticks.

use crate::config::EngineConfig;
use crate::constants::{
    MSG_BOARD_FILLED, MSG_GAME_PAUSED, MSG_GAME_RESET, MSG_GAME_RESUMED, MSG_GAME_STARTED,
    MSG_SELF_COLLISION, MSG_VICTORY, MSG_WALL_COLLISION,
};
use crate::difficulty::Difficulty;
use crate::events::{SnakeEventType, SnakeGameEvent};
use crate::geometry::{Direction, Position};
use crate::grid::random_free_position_with_attempts;
use crate::state::{GameState, GameStatus};
use crate::validator::{validate_game_state, validate_grid_dimensions, ValidationError};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

/// Engine surface consumed by UI drivers.
///
/// Lifecycle calls made in the wrong state are silent no-ops; only malformed
/// input to [`GameEngine::initialize`] is an error.
pub trait GameEngine {
    fn initialize(
        &mut self,
        difficulty: Difficulty,
        width: i32,
        height: i32,
    ) -> Result<(), ValidationError>;
    fn start(&mut self);
    fn pause(&mut self);
    fn resume(&mut self);
    fn reset(&mut self);
    fn set_next_direction(&mut self, direction: Direction);
    /// Advance by wall-clock time. Returns true if a tick ran.
    fn update(&mut self, now: DateTime<Utc>) -> bool;
    /// Independent deep copy of the current state.
    fn current_state(&self) -> GameState;
    /// Drain buffered events, oldest first.
    fn events_since_last_update(&mut self) -> Vec<SnakeGameEvent>;
    fn is_game_active(&self) -> bool;
}

/// Outcome of a single movement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepOutcome {
    Moved,
    Ate,
    AteSpecial,
    HitWall,
    HitSelf,
}

pub struct SnakeEngine<R: Rng = StdRng> {
    state: GameState,
    rng: R,
    events: Vec<SnakeGameEvent>,
    /// Milliseconds accumulated toward the next tick.
    accumulated_ms: u64,
    last_update: DateTime<Utc>,
    config: EngineConfig,
}

impl SnakeEngine<StdRng> {
    /// Engine with entropy-seeded randomness and default rules.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Engine whose food placement is reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for SnakeEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SnakeEngine<R> {
    /// Engine with default rules driven by an injected generator.
    pub fn with_rng(rng: R) -> Self {
        Self::build(EngineConfig::default(), rng)
    }

    /// Engine with custom rules. The config is validated first.
    pub fn with_config(config: EngineConfig, rng: R) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: EngineConfig, rng: R) -> Self {
        let now = Utc::now();
        let mut engine = Self {
            state: GameState::default(),
            rng,
            events: Vec::new(),
            accumulated_ms: 0,
            last_update: now,
            config,
        };
        let (difficulty, width, height) = (
            engine.config.default_difficulty,
            engine.config.default_grid_width,
            engine.config.default_grid_height,
        );
        engine.reinitialize(difficulty, width, height, now);
        engine
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn difficulty(&self) -> Difficulty {
        self.state.difficulty
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn is_game_active(&self) -> bool {
        self.state.status == GameStatus::Playing
    }

    /// Independent deep copy of the current state.
    pub fn current_state(&self) -> GameState {
        self.state.snapshot()
    }

    /// Drain buffered events, oldest first. A second call returns nothing
    /// until new events occur.
    pub fn events_since_last_update(&mut self) -> Vec<SnakeGameEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Lifecycle ───────────────────────────────────────────────

    pub fn initialize(
        &mut self,
        difficulty: Difficulty,
        width: i32,
        height: i32,
    ) -> Result<(), ValidationError> {
        self.initialize_at(difficulty, width, height, Utc::now())
    }

    /// Start a fresh NotStarted game. On error the engine is left untouched.
    pub fn initialize_at(
        &mut self,
        difficulty: Difficulty,
        width: i32,
        height: i32,
        now: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        validate_grid_dimensions(width, height)?;
        if self.config.initial_length > (width / 2 + 1) as usize {
            return Err(ValidationError::InvalidState(format!(
                "initial snake length {} does not fit a grid {} wide",
                self.config.initial_length, width
            )));
        }
        self.reinitialize(difficulty, width, height, now);
        Ok(())
    }

    /// Dimensions must already be validated.
    fn reinitialize(&mut self, difficulty: Difficulty, width: i32, height: i32, now: DateTime<Utc>) {
        let head = Position::new(width / 2, height / 2);
        let snake_body = (0..self.config.initial_length as i32)
            .map(|i| head.offset(-i, 0))
            .collect();

        self.state = GameState {
            grid_width: width,
            grid_height: height,
            snake_body,
            food: None,
            special_food: None,
            current_direction: Direction::Right,
            next_direction: Direction::Right,
            score: 0,
            food_eaten: 0,
            status: GameStatus::NotStarted,
            difficulty,
            elapsed_ms: 0,
            start_time: now,
            game_over_time: None,
        };
        self.events.clear();
        self.accumulated_ms = 0;
        self.last_update = now;
        self.spawn_food();

        debug!(?difficulty, width, height, "game initialized");
    }

    pub fn start(&mut self) {
        self.start_at(Utc::now());
    }

    /// NotStarted -> Playing.
    pub fn start_at(&mut self, now: DateTime<Utc>) {
        if self.state.status != GameStatus::NotStarted {
            trace!(status = ?self.state.status, "start ignored");
            return;
        }
        self.state.status = GameStatus::Playing;
        self.state.start_time = now;
        self.last_update = now;
        self.emit(SnakeEventType::GameStarted, MSG_GAME_STARTED);
        debug!("game started");
    }

    /// Playing -> Paused.
    pub fn pause(&mut self) {
        if self.state.status != GameStatus::Playing {
            trace!(status = ?self.state.status, "pause ignored");
            return;
        }
        self.state.status = GameStatus::Paused;
        self.emit(SnakeEventType::GamePaused, MSG_GAME_PAUSED);
        debug!(elapsed_ms = self.state.elapsed_ms, "game paused");
    }

    pub fn resume(&mut self) {
        self.resume_at(Utc::now());
    }

    /// Paused -> Playing. Time spent paused does not count toward the next tick.
    pub fn resume_at(&mut self, now: DateTime<Utc>) {
        if self.state.status != GameStatus::Paused {
            trace!(status = ?self.state.status, "resume ignored");
            return;
        }
        self.state.status = GameStatus::Playing;
        self.last_update = now;
        self.emit(SnakeEventType::GameResumed, MSG_GAME_RESUMED);
        debug!(elapsed_ms = self.state.elapsed_ms, "game resumed");
    }

    pub fn reset(&mut self) {
        self.reset_at(Utc::now());
    }

    /// Re-initialize with the same difficulty and grid, from any state.
    ///
    /// The GameReset event carries the elapsed time of the game being
    /// discarded and is the only event left in the buffer afterwards.
    pub fn reset_at(&mut self, now: DateTime<Utc>) {
        let reset_event = SnakeGameEvent::new(SnakeEventType::GameReset, self.state.elapsed_ms)
            .with_message(MSG_GAME_RESET);
        let (difficulty, width, height) = (
            self.state.difficulty,
            self.state.grid_width,
            self.state.grid_height,
        );

        self.reinitialize(difficulty, width, height, now);
        self.events.push(reset_event);
        debug!("game reset");
    }

    /// Queue the direction for the next tick. A 180-degree reversal of the
    /// current direction is dropped without an event.
    pub fn set_next_direction(&mut self, direction: Direction) {
        if self.state.current_direction.is_opposite(direction) {
            trace!(?direction, "reversal ignored");
            return;
        }
        self.state.next_direction = direction;
        self.emit(
            SnakeEventType::DirectionChanged,
            format!("direction changed to {:?}", direction),
        );
    }

    /// Install an externally prepared state, e.g. a restored or scripted game.
    ///
    /// Buffered events are kept; the tick accumulator starts from zero.
    pub fn load_state(&mut self, state: GameState) -> Result<(), ValidationError> {
        validate_game_state(&state)?;
        validate_grid_dimensions(state.grid_width, state.grid_height)?;

        let elapsed = i64::try_from(state.elapsed_ms).unwrap_or(i64::MAX);
        self.last_update = state
            .start_time
            .checked_add_signed(Duration::milliseconds(elapsed))
            .unwrap_or(state.start_time);
        self.accumulated_ms = 0;
        self.state = state;
        Ok(())
    }

    // ── Time ────────────────────────────────────────────────────

    /// Advance the simulation to `now`. Performs at most one tick and returns
    /// whether it did. Does nothing unless the game is Playing.
    pub fn update(&mut self, now: DateTime<Utc>) -> bool {
        if self.state.status != GameStatus::Playing {
            return false;
        }

        let delta_ms = millis_between(self.last_update, now);
        self.last_update = now;
        self.state.elapsed_ms = millis_between(self.state.start_time, now);
        self.accumulated_ms = self.accumulated_ms.saturating_add(delta_ms);

        if self.accumulated_ms < self.state.difficulty.tick_interval_ms() {
            return false;
        }

        self.tick(now);
        self.accumulated_ms = 0;
        true
    }

    // ── Tick ────────────────────────────────────────────────────

    fn tick(&mut self, now: DateTime<Utc>) {
        let outcome = self.step();
        trace!(?outcome, length = self.state.len(), "tick");

        match outcome {
            StepOutcome::HitWall => self.end_game(now, MSG_WALL_COLLISION),
            StepOutcome::HitSelf => self.end_game(now, MSG_SELF_COLLISION),
            StepOutcome::Moved | StepOutcome::Ate | StepOutcome::AteSpecial => {
                if self.state.len() >= self.config.victory_length {
                    self.declare_victory(now, MSG_VICTORY);
                } else if self.state.food.is_none() {
                    // Small grids fill up before the victory length.
                    self.declare_victory(now, MSG_BOARD_FILLED);
                }
            }
        }
    }

    /// Single movement step: steer, check collisions, move, eat.
    fn step(&mut self) -> StepOutcome {
        self.state.current_direction = self.state.next_direction;

        let Some(head) = self.state.head() else {
            return StepOutcome::HitSelf;
        };
        let new_head = head.moved(self.state.current_direction);

        if !self.state.is_in_bounds(new_head) {
            return StepOutcome::HitWall;
        }
        if self.state.is_occupied_by_snake(new_head) {
            return StepOutcome::HitSelf;
        }

        self.state.snake_body.push_front(new_head);

        if self.state.food == Some(new_head) {
            let gained = self.state.difficulty.scaled_points(self.config.food_points);
            self.award(gained);
            self.emit_event(
                SnakeGameEvent::new(SnakeEventType::FoodEaten, self.state.elapsed_ms)
                    .with_position(new_head)
                    .with_score(gained)
                    .with_message(format!("food eaten! +{} points", gained)),
            );
            self.spawn_food();
            StepOutcome::Ate
        } else if self.state.special_food == Some(new_head) {
            let gained = self
                .state
                .difficulty
                .scaled_points(self.config.special_food_points);
            self.award(gained);
            self.emit_event(
                SnakeGameEvent::new(SnakeEventType::SpecialFoodEaten, self.state.elapsed_ms)
                    .with_position(new_head)
                    .with_score(gained)
                    .with_message(format!("special food eaten! +{} points", gained)),
            );
            self.state.special_food = None;
            if self.rng.gen_range(0..100) < self.config.special_food_chance_percent {
                self.spawn_special_food();
            }
            StepOutcome::AteSpecial
        } else {
            self.state.snake_body.pop_back();
            StepOutcome::Moved
        }
    }

    fn award(&mut self, points: u32) {
        self.state.score += points;
        self.state.food_eaten += 1;
    }

    fn end_game(&mut self, now: DateTime<Utc>, reason: &str) {
        self.state.status = GameStatus::GameOver;
        self.state.game_over_time = Some(now);
        self.emit(SnakeEventType::GameOver, reason);
        debug!(
            reason,
            score = self.state.score,
            length = self.state.len(),
            "game over"
        );
    }

    fn declare_victory(&mut self, now: DateTime<Utc>, reason: &str) {
        self.state.status = GameStatus::Victory;
        self.state.game_over_time = Some(now);
        self.emit(SnakeEventType::GameOver, reason);
        debug!(reason, score = self.state.score, "victory");
    }

    // ── Spawning ────────────────────────────────────────────────

    /// The snake's cells plus `other`, if any.
    fn occupied_cells(&self, other: Option<Position>) -> Vec<Position> {
        let mut occupied: Vec<Position> = self.state.snake_body.iter().copied().collect();
        occupied.extend(other);
        occupied
    }

    fn spawn_food(&mut self) {
        let occupied = self.occupied_cells(self.state.special_food);
        self.state.food = random_free_position_with_attempts(
            &mut self.rng,
            self.state.grid_width,
            self.state.grid_height,
            &occupied,
            self.config.random_attempts,
        );
        if self.state.food.is_none() {
            warn!("no free cell for food");
        }
    }

    fn spawn_special_food(&mut self) {
        let occupied = self.occupied_cells(self.state.food);
        self.state.special_food = random_free_position_with_attempts(
            &mut self.rng,
            self.state.grid_width,
            self.state.grid_height,
            &occupied,
            self.config.random_attempts,
        );
        if self.state.special_food.is_none() {
            warn!("no free cell for special food");
        }
    }

    // ── Events ──────────────────────────────────────────────────

    fn emit(&mut self, event_type: SnakeEventType, message: impl Into<String>) {
        let event = SnakeGameEvent::new(event_type, self.state.elapsed_ms).with_message(message);
        self.emit_event(event);
    }

    fn emit_event(&mut self, event: SnakeGameEvent) {
        self.events.push(event);
    }
}

impl<R: Rng> GameEngine for SnakeEngine<R> {
    fn initialize(
        &mut self,
        difficulty: Difficulty,
        width: i32,
        height: i32,
    ) -> Result<(), ValidationError> {
        self.initialize_at(difficulty, width, height, Utc::now())
    }

    fn start(&mut self) {
        self.start_at(Utc::now());
    }

    fn pause(&mut self) {
        Self::pause(self);
    }

    fn resume(&mut self) {
        self.resume_at(Utc::now());
    }

    fn reset(&mut self) {
        self.reset_at(Utc::now());
    }

    fn set_next_direction(&mut self, direction: Direction) {
        Self::set_next_direction(self, direction);
    }

    fn update(&mut self, now: DateTime<Utc>) -> bool {
        Self::update(self, now)
    }

    fn current_state(&self) -> GameState {
        Self::current_state(self)
    }

    fn events_since_last_update(&mut self) -> Vec<SnakeGameEvent> {
        Self::events_since_last_update(self)
    }

    fn is_game_active(&self) -> bool {
        Self::is_game_active(self)
    }
}

/// Non-negative milliseconds from `from` to `to`.
fn millis_between(from: DateTime<Utc>, to: DateTime<Utc>) -> u64 {
    u64::try_from((to - from).num_milliseconds()).unwrap_or(0)
}
