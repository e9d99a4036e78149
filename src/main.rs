//! Metro Dash entry point
//!
//! Owns the window, input polling and frame pacing; the simulation advances
//! in fixed 60 Hz steps under a frame-time accumulator.

use macroquad::prelude::*;

use metro_dash::consts::{MAX_SUBSTEPS, SCREEN_HEIGHT, SCREEN_WIDTH, SIM_DT};
use metro_dash::render;
use metro_dash::sim::{tick, GamePhase, GameState, TickInput};
use metro_dash::{HighScores, Tuning};

fn window_conf() -> Conf {
    Conf {
        window_title: "Metro Dash".to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Edge-triggered key intents for this frame
fn poll_input() -> TickInput {
    TickInput {
        move_left: is_key_pressed(KeyCode::Left),
        move_right: is_key_pressed(KeyCode::Right),
        jump: is_key_pressed(KeyCode::Space),
        restart: is_key_pressed(KeyCode::R),
    }
}

fn merge(into: &mut TickInput, from: TickInput) {
    into.move_left |= from.move_left;
    into.move_right |= from.move_right;
    into.jump |= from.jump;
    into.restart |= from.restart;
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let tuning = Tuning::load();
    let seed = (macroquad::miniquad::date::now() * 1000.0) as u64;
    log::info!("Metro Dash starting with seed {}", seed);

    let mut state = GameState::new(seed, tuning);
    let mut scores = HighScores::new();
    let mut pending = TickInput::default();
    let mut accumulator = 0.0f32;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        // Intents are held until a substep consumes them, so a key pressed
        // during a short frame is not lost.
        merge(&mut pending, poll_input());
        let phase_before = state.phase;

        accumulator += get_frame_time().min(0.25);
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut state, &pending, SIM_DT);
            accumulator -= SIM_DT;
            substeps += 1;
            pending = TickInput::default();
        }

        if phase_before == GamePhase::Playing && state.phase == GamePhase::GameOver {
            match scores.add_score(state.score) {
                Some(1) => log::info!("new session best: {}", state.score),
                Some(rank) => log::info!("run ranked #{} this session", rank),
                None => {}
            }
        }

        render::draw_frame(&state);
        if state.phase == GamePhase::GameOver {
            render::draw_game_over(&state, &scores);
        }

        next_frame().await;
    }

    log::info!("quit requested, exiting");
}
