//! Metro Dash - a three-lane endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, jump physics, spawning, collisions)
//! - `render`: macroquad drawing of the scene and overlays
//! - `tuning`: Data-driven game balance
//! - `highscores`: Session-scoped leaderboard

pub mod highscores;
pub mod render;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz frame loop)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Logical canvas
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Ground line the player stands on
    pub const GROUND_Y: f32 = SCREEN_HEIGHT - 100.0;

    /// Distance of the outer lane centers from the screen edges
    pub const LANE_EDGE_OFFSET: f32 = 150.0;
    /// Tolerance when classifying an x position back to a lane
    pub const LANE_TOLERANCE: f32 = 5.0;

    /// Sprite sizes (the reference art dimensions)
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    pub const TRAIN_WIDTH: f32 = 100.0;
    pub const TRAIN_HEIGHT: f32 = 60.0;
    pub const COIN_SIZE: f32 = 30.0;

    /// Movement defaults, in pixels per second (5/3/10/2 px per frame at 60 Hz)
    pub const TRAIN_SPEED: f32 = 300.0;
    pub const COIN_SPEED: f32 = 180.0;
    pub const LANE_SLIDE_SPEED: f32 = 600.0;
    pub const SCROLL_SPEED: f32 = 120.0;

    /// Jump defaults (15 px/frame launch, 1 px/frame^2 gravity at 60 Hz)
    pub const JUMP_SPEED: f32 = 900.0;
    pub const GRAVITY: f32 = 3600.0;

    /// Obstacle spawn ramp
    pub const SPAWN_INTERVAL_START_MS: f32 = 2000.0;
    pub const SPAWN_INTERVAL_STEP_MS: f32 = 10.0;
    pub const SPAWN_INTERVAL_FLOOR_MS: f32 = 500.0;

    /// Initial entity population
    pub const INITIAL_TRAIN_COUNT: usize = 1;
    pub const INITIAL_COIN_COUNT: usize = 10;

    /// Coins re-enter the screen from a random height in this band
    pub const COIN_DROP_MIN_Y: f32 = -500.0;
    pub const COIN_DROP_MAX_Y: f32 = -50.0;
}
