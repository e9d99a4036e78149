//! Data-driven game balance
//!
//! Every balance constant lives in one struct so a playtest build can adjust
//! speeds and ramps from a `tuning.json` next to the binary, no rebuild
//! needed. Missing fields fall back to the reference constants.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance constants for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Train fall speed, px/s
    pub train_speed: f32,
    /// Coin fall speed, px/s
    pub coin_speed: f32,
    /// Horizontal lane-change slide speed, px/s
    pub lane_slide_speed: f32,
    /// Background scroll speed, px/s
    pub scroll_speed: f32,
    /// Upward launch speed of a jump, px/s
    pub jump_speed: f32,
    /// Downward acceleration while airborne, px/s^2
    pub gravity: f32,
    /// Delay between train spawns at session start, ms
    pub spawn_interval_start_ms: f32,
    /// How much the spawn delay shrinks per spawn event, ms
    pub spawn_interval_step_ms: f32,
    /// Minimum spawn delay, ms
    pub spawn_interval_floor_ms: f32,
    /// Trains present at session start
    pub initial_trains: usize,
    /// Coins present at session start
    pub initial_coins: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            train_speed: TRAIN_SPEED,
            coin_speed: COIN_SPEED,
            lane_slide_speed: LANE_SLIDE_SPEED,
            scroll_speed: SCROLL_SPEED,
            jump_speed: JUMP_SPEED,
            gravity: GRAVITY,
            spawn_interval_start_ms: SPAWN_INTERVAL_START_MS,
            spawn_interval_step_ms: SPAWN_INTERVAL_STEP_MS,
            spawn_interval_floor_ms: SPAWN_INTERVAL_FLOOR_MS,
            initial_trains: INITIAL_TRAIN_COUNT,
            initial_coins: INITIAL_COIN_COUNT,
        }
    }
}

impl Tuning {
    /// Override file, read from the working directory
    const TUNING_PATH: &'static str = "tuning.json";

    /// Load tuning overrides from disk, falling back to the defaults.
    ///
    /// A malformed file is a playtest mistake, not a fatal error: it is
    /// logged and ignored.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::TUNING_PATH) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(tuning) => {
                    log::info!("loaded tuning overrides from {}", Self::TUNING_PATH);
                    tuning
                }
                Err(e) => {
                    log::warn!("ignoring malformed {}: {}", Self::TUNING_PATH, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// No tuning file on the web build
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_constants() {
        let t = Tuning::default();
        assert_eq!(t.spawn_interval_start_ms, 2000.0);
        assert_eq!(t.spawn_interval_floor_ms, 500.0);
        assert_eq!(t.initial_trains, 1);
        assert_eq!(t.initial_coins, 10);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let t: Tuning = serde_json::from_str(r#"{"train_speed": 450.0}"#).unwrap();
        assert_eq!(t.train_speed, 450.0);
        assert_eq!(t.coin_speed, Tuning::default().coin_speed);
        assert_eq!(t.initial_coins, Tuning::default().initial_coins);
    }
}
