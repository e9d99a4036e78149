//! Scene drawing
//!
//! Everything visual lives here: the scrolling backdrop, lane dividers,
//! entity sprites, the score HUD and the game-over overlay. The simulation
//! never calls into this module, so it can run headless in tests.

use macroquad::prelude::*;

use crate::consts::*;
use crate::highscores::HighScores;
use crate::sim::GameState;

const BACKDROP: Color = Color::new(0.09, 0.10, 0.13, 1.0);
const BUILDING: Color = Color::new(0.14, 0.15, 0.20, 1.0);
const DIVIDER: Color = Color::new(0.50, 0.50, 0.50, 1.0);
const GROUND: Color = Color::new(0.27, 0.29, 0.34, 1.0);
const TRAIN_BODY: Color = Color::new(0.78, 0.22, 0.22, 1.0);
const TRAIN_TRIM: Color = Color::new(0.55, 0.12, 0.12, 1.0);
const PLAYER_BODY: Color = Color::new(0.35, 0.70, 0.95, 1.0);

/// Draw one complete frame of the play field
pub fn draw_frame(state: &GameState) {
    clear_background(BACKDROP);
    draw_background(state.scroll_x);

    // Lane dividers and the ground line
    draw_line(
        SCREEN_WIDTH / 3.0,
        0.0,
        SCREEN_WIDTH / 3.0,
        SCREEN_HEIGHT,
        3.0,
        DIVIDER,
    );
    draw_line(
        2.0 * SCREEN_WIDTH / 3.0,
        0.0,
        2.0 * SCREEN_WIDTH / 3.0,
        SCREEN_HEIGHT,
        3.0,
        DIVIDER,
    );
    draw_line(0.0, GROUND_Y, SCREEN_WIDTH, GROUND_Y, 2.0, GROUND);

    for train in state.registry.trains() {
        let b = train.rect;
        draw_rectangle(b.left(), b.top(), b.width(), b.height(), TRAIN_BODY);
        draw_rectangle_lines(b.left(), b.top(), b.width(), b.height(), 3.0, TRAIN_TRIM);
    }

    for coin in state.registry.coins() {
        let b = coin.rect;
        draw_circle(b.center_x(), b.center_y(), b.width() / 2.0, GOLD);
    }

    // The player flashes white while the jump invincibility window is open
    let player = &state.registry.player;
    let body = if player.is_invincible {
        WHITE
    } else {
        PLAYER_BODY
    };
    let b = player.rect;
    draw_rectangle(b.left(), b.top(), b.width(), b.height(), body);

    draw_text(&format!("Score: {}", state.score), 10.0, 30.0, 32.0, WHITE);
}

/// Draw the game-over overlay on top of the frozen scene
pub fn draw_game_over(state: &GameState, scores: &HighScores) {
    draw_rectangle(
        0.0,
        0.0,
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        Color::new(0.0, 0.0, 0.0, 0.78),
    );

    draw_centered("Game Over! Press R to Restart", SCREEN_HEIGHT / 2.0 - 50.0, 36.0, WHITE);
    draw_centered(
        &format!("Your Score: {}", state.score),
        SCREEN_HEIGHT / 2.0 + 10.0,
        36.0,
        WHITE,
    );
    if let Some(best) = scores.top_score() {
        draw_centered(
            &format!("Session Best: {}", best),
            SCREEN_HEIGHT / 2.0 + 60.0,
            28.0,
            GRAY,
        );
    }
}

/// Two identical panels drawn back to back wrap seamlessly as they scroll
fn draw_background(scroll_x: f32) {
    for panel in 0..2 {
        let x0 = scroll_x + panel as f32 * SCREEN_WIDTH;
        // A simple skyline: evenly spaced towers of varying heights
        let mut column = 0;
        while column < 8 {
            let height = 120.0 + (column * 37 % 90) as f32;
            let x = x0 + column as f32 * 100.0 + 20.0;
            draw_rectangle(x, GROUND_Y - height, 55.0, height, BUILDING);
            column += 1;
        }
    }
}

fn draw_centered(text: &str, y: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, (SCREEN_WIDTH - dims.width) / 2.0, y, font_size, color);
}
