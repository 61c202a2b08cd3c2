// Grid
pub const DEFAULT_GRID_WIDTH: i32 = 20;
pub const DEFAULT_GRID_HEIGHT: i32 = 15;
pub const MIN_GRID_SIZE: i32 = 5;
pub const MAX_GRID_SIZE: i32 = 100;

// Snake
pub const INITIAL_SNAKE_LENGTH: usize = 3;
pub const VICTORY_LENGTH: usize = 50;

// Scoring (base points before the difficulty multiplier)
pub const NORMAL_FOOD_POINTS: u32 = 10;
pub const SPECIAL_FOOD_POINTS: u32 = 50;

// Special food respawn chance after one is eaten
pub const SPECIAL_FOOD_SPAWN_CHANCE_PERCENT: u32 = 30;

// Random placement attempts before falling back to a full scan
pub const RANDOM_PLACEMENT_ATTEMPTS: usize = 50;

// Tick intervals by difficulty
pub const EASY_TICK_MS: u64 = 150;
pub const MEDIUM_TICK_MS: u64 = 100;
pub const HARD_TICK_MS: u64 = 60;
pub const INSANE_TICK_MS: u64 = 30;

// Driver hints
pub const UPDATE_INTERVAL_MS: u64 = 16; // ~60 FPS
pub const MAX_EVENTS_DISPLAY: usize = 5;

// Event messages
pub const MSG_GAME_STARTED: &str = "game started";
pub const MSG_GAME_PAUSED: &str = "game paused";
pub const MSG_GAME_RESUMED: &str = "game resumed";
pub const MSG_GAME_RESET: &str = "game reset";
pub const MSG_WALL_COLLISION: &str = "wall collision";
pub const MSG_SELF_COLLISION: &str = "self collision";
pub const MSG_VICTORY: &str = "victory! the snake reached its maximum length";
pub const MSG_BOARD_FILLED: &str = "victory! the snake filled the board";
