//! Host-facing game object
//!
//! A host loop calls `update` then `render` once per displayed frame and
//! asks `layout` for the logical canvas size.

use rand::Rng;

use crate::renderer::{Surface, draw_scene};
use crate::sim::{GamePhase, GameState, TickInput, tick};

/// The game plus the random source it bounces the ball with
#[derive(Debug, Clone)]
pub struct Game<R> {
    state: GameState,
    rng: R,
}

impl<R: Rng> Game<R> {
    /// New game using `rng` for paddle bounce directions
    pub fn new(rng: R) -> Self {
        Self::with_state(GameState::new(), rng)
    }

    /// Resume from an existing state
    pub fn with_state(state: GameState, rng: R) -> Self {
        Self { state, rng }
    }

    /// Advance one tick
    pub fn update(&mut self, input: &TickInput) {
        tick(&mut self.state, input, &mut self.rng);
    }

    /// Draw the current frame
    pub fn render(&self, surface: &mut impl Surface) {
        draw_scene(&self.state, surface);
    }

    /// Logical canvas size, whatever the window size
    pub fn layout(&self, outside_width: u32, outside_height: u32) -> (u32, u32) {
        crate::layout(outside_width, outside_height)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for hosts and tests that need to stage a position
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }
}
