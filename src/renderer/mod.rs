//! Rendering seam
//!
//! The game never touches pixels. It describes each frame as rectangle fills
//! and debug text on a `Surface` supplied by the host, in logical units.

pub mod ascii;
pub mod scene;

pub use ascii::AsciiSurface;
pub use scene::draw_scene;

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Normalized components, for hosts that draw with float colors
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Anything the game can draw on
pub trait Surface {
    /// Fill an axis-aligned rectangle. `x`/`y` is the top-left corner.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);

    /// Print diagnostic text in the top-left corner
    fn debug_print(&mut self, text: &str);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    DebugPrint(String),
}

/// Surface that records draw calls in order
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of rectangles filled with `color`
    pub fn count_color(&self, color: Color) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::FillRect { color: fill, .. } if *fill == color))
            .count()
    }
}

impl Surface for CommandBuffer {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn debug_print(&mut self, text: &str) {
        self.commands.push(DrawCommand::DebugPrint(text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_f32() {
        assert_eq!(Color::RED.to_f32(), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(Color::BLUE.to_f32(), [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_command_buffer_records_in_order() {
        let mut buf = CommandBuffer::new();
        buf.fill_rect(1.0, 2.0, 3.0, 4.0, Color::GREEN);
        buf.debug_print("hi");
        assert_eq!(buf.commands.len(), 2);
        assert_eq!(buf.count_color(Color::GREEN), 1);
        assert_eq!(buf.commands[1], DrawCommand::DebugPrint("hi".into()));

        buf.clear();
        assert!(buf.commands.is_empty());
    }
}
