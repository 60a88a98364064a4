//! Boar-out - a tiny Breakout clone
//!
//! Core modules:
//! - `sim`: Simulation (ball motion, collisions, lives, score)
//! - `game`: Host-facing update/render/layout object
//! - `renderer`: Drawing surface abstraction and scene emission
//! - `platform`: Host-side input edge tracking and FPS measurement
//! - `settings`: Headless host knobs

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical screen dimensions
    pub const SCREEN_WIDTH: f64 = 30.0;
    pub const SCREEN_HEIGHT: f64 = 40.0;

    /// Paddle geometry. The paddle only moves horizontally.
    pub const PADDLE_WIDTH: f64 = 6.0;
    pub const PADDLE_HEIGHT: f64 = 2.0;
    pub const PADDLE_Y: f64 = 25.0;
    /// Paddle may overshoot the right edge by this much
    pub const PADDLE_OVERSHOOT: f64 = 4.0;
    pub const PADDLE_START_X: f64 = 17.0;

    /// Ball is drawn as a single logical unit
    pub const BALL_SIZE: f64 = 1.0;

    /// Brick geometry and layout
    pub const BRICK_WIDTH: f64 = 2.0;
    pub const BRICK_HEIGHT: f64 = 1.0;
    pub const BRICK_COUNT: usize = 46;
    pub const BRICK_SPACING: f64 = 3.0;
    pub const BRICK_ROW_HEIGHT: f64 = 2.0;
    pub const BRICK_FIRST_X: f64 = 6.0;
    pub const BRICK_FIRST_LIFE: u8 = 4;

    /// Per-tick movement in logical units
    pub const START_SPEED: f64 = 0.85;
    pub const SPEED_STEP: f64 = 0.1;
    pub const MIN_SPEED: f64 = 0.1;

    pub const START_LIVES: u8 = 3;
}

/// Logical canvas size reported to the host, independent of window size.
///
/// Returned as (height, width) of the play field, in that order.
#[inline]
pub fn layout(_outside_width: u32, _outside_height: u32) -> (u32, u32) {
    (consts::SCREEN_HEIGHT as u32, consts::SCREEN_WIDTH as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_ignores_window_size() {
        assert_eq!(layout(640, 480), (40, 30));
        assert_eq!(layout(1, 1), layout(1920, 1080));
    }
}
