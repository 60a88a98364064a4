//! Game state and core simulation types

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation frozen until the pause key is pressed again
    Paused,
    /// Active gameplay
    Running,
    /// Out of lives. Terminal, nothing leaves this phase.
    GameOver,
}

/// Vertical travel direction of the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vertical {
    Up,
    Down,
}

impl Vertical {
    /// Sign applied to the y axis (screen y grows downward)
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Vertical::Up => -1.0,
            Vertical::Down => 1.0,
        }
    }
}

/// Horizontal travel direction of the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Horizontal {
    Left,
    Right,
}

impl Horizontal {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Horizontal::Left => -1.0,
            Horizontal::Right => 1.0,
        }
    }
}

/// The ball. Moves diagonally by `speed` on both axes every running tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: DVec2,
    pub vertical: Vertical,
    pub horizontal: Horizontal,
}

impl Ball {
    /// Serve position: horizontally centered, a third of the way down
    pub fn serve_position() -> DVec2 {
        DVec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 3.0)
    }

    pub fn new() -> Self {
        Self {
            pos: Self::serve_position(),
            vertical: Vertical::Down,
            horizontal: Horizontal::Right,
        }
    }

    /// Advance one step along both axes
    pub fn advance(&mut self, speed: f64) {
        self.pos.y += self.vertical.sign() * speed;
        self.pos.x += self.horizontal.sign() * speed;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// A breakable brick. Spent bricks stay in the collection with `life == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Brick {
    pub pos: DVec2,
    /// Remaining hits
    pub life: u8,
}

impl Brick {
    pub fn new(x: f64, y: f64, life: u8) -> Self {
        Self {
            pos: DVec2::new(x, y),
            life,
        }
    }

    /// Whether the brick still takes part in collisions and rendering
    #[inline]
    pub fn is_active(&self) -> bool {
        self.life > 0
    }
}

/// Lay out the brick wall.
///
/// Bricks are placed left to right `BRICK_SPACING` apart. Whenever the next
/// brick would start past the right edge, a new row begins one row lower and
/// the row's hit count drops by one. The final slot is never assigned and
/// stays a spent brick at the origin.
pub fn create_bricks() -> Vec<Brick> {
    let mut bricks = vec![Brick::default(); BRICK_COUNT];

    let mut height = BRICK_ROW_HEIGHT;
    let mut life = BRICK_FIRST_LIFE;

    bricks[0] = Brick::new(BRICK_FIRST_X, height, life);
    for i in 1..bricks.len() - 1 {
        let prev_x = bricks[i - 1].pos.x;
        let x = if prev_x + BRICK_SPACING > SCREEN_WIDTH {
            height += BRICK_ROW_HEIGHT;
            life = life.saturating_sub(1);
            BRICK_FIRST_X
        } else {
            prev_x + BRICK_SPACING
        };
        bricks[i] = Brick::new(x, height, life);
    }

    bricks
}

/// Developer toggles, only reachable while running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DebugFlags {
    /// Debug sub-mode: enables speed and FPS keys
    pub enabled: bool,
    /// Log measured FPS every tick
    pub print_fps: bool,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Fixed-size brick wall, mutated in place
    pub bricks: Vec<Brick>,
    pub ball: Ball,
    /// Paddle left edge; the paddle's y is fixed at `PADDLE_Y`
    pub paddle_x: f64,
    /// Bricks destroyed
    pub score: u64,
    /// Lives remaining
    pub lives: u8,
    pub phase: GamePhase,
    /// Per-tick movement of paddle and ball
    pub speed: f64,
    pub debug: DebugFlags,
}

impl GameState {
    /// Fresh game: full lives, zero score, waiting on the pause key
    pub fn new() -> Self {
        Self {
            bricks: create_bricks(),
            ball: Ball::new(),
            paddle_x: PADDLE_START_X,
            score: 0,
            lives: START_LIVES,
            phase: GamePhase::Paused,
            speed: START_SPEED,
            debug: DebugFlags::default(),
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Flip between Paused and Running. Has no effect once the game is over.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            GamePhase::GameOver => GamePhase::GameOver,
        };
        log::debug!("Phase -> {:?}", self.phase);
    }

    /// Take away a life, entering GameOver when none remain
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            log::info!("Game over with {} bricks", self.score);
        } else {
            log::info!("Life lost, {} remaining", self.lives);
        }
    }

    /// Put the ball back at the serve position heading up.
    /// Horizontal direction carries over.
    pub fn reset_ball(&mut self) {
        self.ball = Ball {
            pos: Ball::serve_position(),
            vertical: Vertical::Up,
            horizontal: self.ball.horizontal,
        };
    }

    /// Bricks that can still be hit
    pub fn active_bricks(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.is_active())
    }

    /// Move the paddle left by `speed`, never past the left edge
    pub fn move_paddle_left(&mut self) {
        if self.paddle_x > 0.0 {
            self.paddle_x = (self.paddle_x - self.speed).max(0.0);
        }
    }

    /// Move the paddle right by `speed`, allowing a small overshoot
    pub fn move_paddle_right(&mut self) {
        let max_x = SCREEN_WIDTH + PADDLE_OVERSHOOT;
        if self.paddle_x < max_x {
            self.paddle_x = (self.paddle_x + self.speed).min(max_x);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
