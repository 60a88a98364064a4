//! Keyboard state tracking
//!
//! Hosts report raw key down/up events; `Keyboard` turns them into the
//! held/just-pressed view a `TickInput` needs.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Escape,
    Equal,
    J,
    K,
    F,
}

/// Level and edge view of the keyboard across frames
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    down: HashSet<Key>,
    /// Keys that were down at the end of the previous frame
    previous: HashSet<Key>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.down.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.down.remove(&key);
    }

    /// Key is currently held
    pub fn is_pressed(&self, key: Key) -> bool {
        self.down.contains(&key)
    }

    /// Key went down since the previous frame
    pub fn is_just_pressed(&self, key: Key) -> bool {
        self.down.contains(&key) && !self.previous.contains(&key)
    }

    /// Build this frame's input
    pub fn snapshot(&self, fps: f64) -> TickInput {
        TickInput {
            left: self.is_pressed(Key::Left),
            right: self.is_pressed(Key::Right),
            pause: self.is_just_pressed(Key::Escape),
            debug_toggle: self.is_just_pressed(Key::Equal),
            speed_up: self.is_just_pressed(Key::J),
            speed_down: self.is_just_pressed(Key::K),
            fps_toggle: self.is_just_pressed(Key::F),
            fps,
        }
    }

    /// Roll over to the next frame. Call after the tick consumed the snapshot.
    pub fn end_frame(&mut self) {
        self.previous.clone_from(&self.down);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_reported_once() {
        let mut kb = Keyboard::new();
        kb.press(Key::Escape);
        assert!(kb.snapshot(0.0).pause);
        kb.end_frame();

        // Still held: no new edge
        assert!(!kb.snapshot(0.0).pause);
        kb.end_frame();

        kb.release(Key::Escape);
        kb.end_frame();
        kb.press(Key::Escape);
        assert!(kb.snapshot(0.0).pause);
    }

    #[test]
    fn test_held_keys_are_level() {
        let mut kb = Keyboard::new();
        kb.press(Key::Left);
        for _ in 0..3 {
            let input = kb.snapshot(30.0);
            assert!(input.left);
            assert!(!input.right);
            assert_eq!(input.fps, 30.0);
            kb.end_frame();
        }
        kb.release(Key::Left);
        assert!(!kb.snapshot(30.0).left);
    }

    #[test]
    fn test_debug_keys() {
        let mut kb = Keyboard::new();
        kb.press(Key::Equal);
        kb.press(Key::J);
        kb.press(Key::K);
        kb.press(Key::F);
        let input = kb.snapshot(0.0);
        assert!(input.debug_toggle && input.speed_up && input.speed_down && input.fps_toggle);
        assert!(!input.pause);
    }
}
