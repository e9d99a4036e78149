//! Fixed timestep simulation tick
//!
//! One call advances the whole session by a single frame: entity updates,
//! spawn ramp, collision resolution and scoring.

use super::lane::Lane;
use super::state::{overlapping, Entity, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
///
/// Movement and jump intents are edge-triggered: the shell raises each flag
/// once per key press, so a held key shifts one lane, not one per frame.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Shift one lane left
    pub move_left: bool,
    /// Shift one lane right
    pub move_right: bool,
    /// Start a jump (ignored while airborne)
    pub jump: bool,
    /// Restart after a game over (ignored while playing)
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        GamePhase::GameOver => {
            // Entities are frozen; only the restart command is honored.
            if input.restart {
                state.reset();
            }
        }

        GamePhase::Playing => {
            state.time_ticks += 1;
            state.clock_ms += dt * 1000.0;

            // Update every entity in the registry exactly once
            state
                .registry
                .update_all(input, &state.tuning, dt, &mut state.rng);

            // Background scroll, wrapped at the background width
            state.scroll_x -= state.tuning.scroll_speed * dt;
            if state.scroll_x <= -SCREEN_WIDTH {
                state.scroll_x += SCREEN_WIDTH;
            }

            // Spawn ramp: one train per elapsed interval, and the interval
            // shrinks toward its floor so obstacle density only grows.
            if state.clock_ms - state.last_spawn_ms > state.spawn_interval_ms {
                let lane = Lane::random(&mut state.rng);
                state.registry.spawn_train(lane);
                state.last_spawn_ms = state.clock_ms;
                state.spawn_interval_ms = (state.spawn_interval_ms
                    - state.tuning.spawn_interval_step_ms)
                    .max(state.tuning.spawn_interval_floor_ms);
                log::debug!(
                    "spawned train in {:?}, next interval {:.0} ms",
                    lane,
                    state.spawn_interval_ms
                );
            }

            // Fatal collision: a train overlap only kills when the player is
            // grounded, vulnerable and in the same lane. The first fatal hit
            // ends the run; trains are never removed on contact.
            let player = &state.registry.player;
            if !player.is_jumping && !player.is_invincible {
                let player_box = player.bounds();
                let player_lane = player.lane;
                let fatal = overlapping(player_box, state.registry.trains())
                    .any(|i| state.registry.trains()[i].lane == player_lane);
                if fatal {
                    state.phase = GamePhase::GameOver;
                    log::info!(
                        "run over after {:.1} s with score {}",
                        state.time_ticks as f32 * dt,
                        state.score
                    );
                }
            }

            // Coin collection: every overlapping coin is collected this
            // frame, and each one is replaced immediately so the coin
            // population stays constant.
            let player_box = state.registry.player.bounds();
            let mut hits: Vec<usize> = overlapping(player_box, state.registry.coins()).collect();
            if !hits.is_empty() {
                // Highest index first keeps swap_remove indices valid
                hits.sort_unstable_by(|a, b| b.cmp(a));
                state.score += hits.len() as u64;
                for index in hits {
                    state.registry.collect_coin(index);
                    let lane = Lane::random(&mut state.rng);
                    state.registry.spawn_coin(lane, &mut state.rng);
                }
                // swap_remove perturbs storage order; restore the id sort
                state.registry.normalize_order();
            }
        }
    }
}
