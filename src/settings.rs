//! Host settings
//!
//! Knobs for the headless host. The game itself is configured entirely by
//! `consts`; nothing here changes simulation rules.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Headless host settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // === Window ===
    /// Window caption
    pub window_title: String,
    /// Initial window size in pixels
    pub window_width: u32,
    pub window_height: u32,

    // === Loop ===
    /// Ticks per second, 0 runs as fast as possible
    pub tick_rate: u32,
    /// Stop after this many ticks even if the game is not over
    pub max_ticks: u64,
    /// Print a frame every N ticks, 0 prints only the final frame
    pub render_interval: u64,

    // === Demo ===
    /// Steer the paddle toward the ball
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Boar-out!".to_string(),
            window_width: 640,
            window_height: 480,

            tick_rate: 60,
            max_ticks: 20_000,
            render_interval: 120,

            autopilot: true,
        }
    }
}

impl Settings {
    /// Time budget per tick, `None` when unthrottled
    pub fn frame_duration(&self) -> Option<Duration> {
        (self.tick_rate > 0).then(|| Duration::from_secs_f64(1.0 / self.tick_rate as f64))
    }

    /// Whether the frame after `ticks` ticks should be printed
    pub fn should_render(&self, ticks: u64) -> bool {
        self.render_interval > 0 && ticks.is_multiple_of(self.render_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.window_title, "Boar-out!");
        assert_eq!((settings.window_width, settings.window_height), (640, 480));
    }

    #[test]
    fn test_frame_duration() {
        let mut settings = Settings::default();
        assert_eq!(settings.frame_duration(), Some(Duration::from_secs_f64(1.0 / 60.0)));
        settings.tick_rate = 0;
        assert_eq!(settings.frame_duration(), None);
    }

    #[test]
    fn test_should_render() {
        let mut settings = Settings::default();
        assert!(settings.should_render(240));
        assert!(!settings.should_render(241));
        settings.render_interval = 0;
        assert!(!settings.should_render(240));
    }
}
