//! Platform helpers for hosts
//!
//! Handles the host-side bits the simulation reads but does not own:
//! - Keyboard edge detection
//! - Frame rate measurement

pub mod input;

pub use input::{Key, Keyboard};

/// Frames in the rolling FPS window
const FPS_WINDOW: usize = 60;

/// Rolling frames-per-second estimate over the last 60 frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: f64,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0.0,
        }
    }

    /// Record a frame presented at `time` milliseconds
    pub fn record(&mut self, time: f64) {
        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Slot after the newest is the oldest sample
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time - oldest_time;
            if elapsed > 0.0 {
                self.fps = (FPS_WINDOW as f64 - 1.0) * 1000.0 / elapsed;
            }
        }
    }

    /// Latest estimate, 0 until the window has filled
    pub fn fps(&self) -> f64 {
        self.fps
    }
}
