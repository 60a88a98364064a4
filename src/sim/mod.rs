//! Simulation module
//!
//! All gameplay logic lives here:
//! - One call to `tick` is one logical step
//! - Randomness only through the injected generator
//! - Bricks are iterated in storage order
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{BrickFace, WallHit, brick_contact, in_paddle_window, wall_reflection};
pub use state::{Ball, Brick, DebugFlags, GamePhase, GameState, Horizontal, Vertical, create_bricks};
pub use tick::{TickInput, tick};
