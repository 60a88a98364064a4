//! Per-frame simulation tick
//!
//! Core game loop step. The host calls `tick` once per displayed frame.

use rand::Rng;

use super::collision::{brick_contact, in_paddle_window, wall_reflection};
use super::state::{GamePhase, GameState, Horizontal, Vertical};
use crate::consts::*;

/// Input snapshot for a single tick
///
/// `left`/`right` are held keys. Every other flag is an edge: true only on
/// the tick the key went down.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Move paddle left (held)
    pub left: bool,
    /// Move paddle right (held)
    pub right: bool,
    /// Pause toggle
    pub pause: bool,
    /// Debug sub-mode toggle
    pub debug_toggle: bool,
    /// Debug: raise speed
    pub speed_up: bool,
    /// Debug: lower speed
    pub speed_down: bool,
    /// Debug: toggle per-tick FPS logging
    pub fps_toggle: bool,
    /// Frames per second measured by the host
    pub fps: f64,
}

/// Advance the game state by one tick
pub fn tick<R: Rng>(state: &mut GameState, input: &TickInput, rng: &mut R) {
    if state.is_over() {
        return;
    }

    if input.pause {
        state.toggle_pause();
    }
    if state.phase != GamePhase::Running {
        return;
    }

    // Left wins when both are held
    if input.left {
        state.move_paddle_left();
    } else if input.right {
        state.move_paddle_right();
    }

    if let Some(wall) = wall_reflection(state.ball.pos) {
        wall.apply(&mut state.ball);
    }

    state.ball.advance(state.speed);

    if in_paddle_window(state.ball.pos, state.paddle_x) {
        state.ball.vertical = Vertical::Up;
        state.ball.horizontal = if rng.random_bool(0.5) {
            Horizontal::Left
        } else {
            Horizontal::Right
        };
    }

    // Every brick in reach takes the hit; there is no early exit
    let ball_pos = state.ball.pos;
    for brick in state.bricks.iter_mut() {
        let Some(face) = brick_contact(ball_pos, brick) else {
            continue;
        };
        state.ball.vertical = face.deflection();
        brick.life -= 1;
        if brick.life == 0 {
            state.score += 1;
            log::debug!("Brick at ({}, {}) destroyed, score {}", brick.pos.x, brick.pos.y, state.score);
        }
    }

    if state.ball.pos.y >= SCREEN_HEIGHT {
        state.lose_life();
        state.reset_ball();
    }

    if input.debug_toggle {
        state.debug.enabled = !state.debug.enabled;
        log::info!("Debug Mode = {}", state.debug.enabled);
    }
    if state.debug.enabled {
        debug_mode(state, input);
    }
}

/// Developer controls, applied after the simulation step
fn debug_mode(state: &mut GameState, input: &TickInput) {
    if input.speed_up {
        state.speed += SPEED_STEP;
        log::info!("Speed = {:.2}", state.speed);
    } else if input.speed_down {
        state.speed = (state.speed - SPEED_STEP).max(MIN_SPEED);
        log::info!("Speed = {:.2}", state.speed);
    }

    if input.fps_toggle {
        state.debug.print_fps = !state.debug.print_fps;
    }
    if state.debug.print_fps {
        log::info!("FPS: {:.0}", input.fps);
    }
}
