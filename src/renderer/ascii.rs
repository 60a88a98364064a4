//! Text rasterizer for headless hosts
//!
//! One character cell per logical unit. Rectangle edges are rounded to the
//! nearest cell, anything outside the grid is clipped.

use std::fmt::Write as _;

use super::scene::{BALL_COLOR, BRICK_COLOR, PADDLE_COLOR};
use super::{Color, Surface};

const EMPTY: char = ' ';

/// Glyph used for a fill color
fn glyph(color: Color) -> char {
    match color {
        PADDLE_COLOR => '=',
        BALL_COLOR => 'o',
        BRICK_COLOR => '#',
        _ => '*',
    }
}

/// A character grid surface
#[derive(Debug, Clone)]
pub struct AsciiSurface {
    width: usize,
    height: usize,
    cells: Vec<char>,
    text: Option<String>,
}

impl AsciiSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
            text: None,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Wipe the grid and any debug text
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
        self.text = None;
    }

    /// Character at a cell, `None` outside the grid
    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    /// Clamp a logical span to cell indices
    fn span(start: f64, len: f64, limit: usize) -> std::ops::Range<usize> {
        let lo = start.round().max(0.0) as usize;
        let hi = (start + len).round().max(0.0) as usize;
        lo.min(limit)..hi.min(limit)
    }

    /// Render the grid framed by a border, debug text overlaid top-left
    pub fn render(&self) -> String {
        let mut rows: Vec<Vec<char>> = self.cells.chunks(self.width.max(1)).map(|r| r.to_vec()).collect();
        if let Some(text) = &self.text {
            for (row, line) in rows.iter_mut().zip(text.lines()) {
                for (cell, ch) in row.iter_mut().zip(line.chars()) {
                    *cell = ch;
                }
            }
        }

        let border: String = std::iter::repeat_n('-', self.width).collect();
        let mut out = String::with_capacity((self.width + 3) * (self.height + 2));
        let _ = writeln!(out, "+{border}+");
        for row in rows.iter().take(self.height) {
            let line: String = row.iter().collect();
            let _ = writeln!(out, "|{line}|");
        }
        let _ = writeln!(out, "+{border}+");
        out
    }
}

impl Surface for AsciiSurface {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        let ch = glyph(color);
        for row in Self::span(y, height, self.height) {
            for col in Self::span(x, width, self.width) {
                self.cells[row * self.width + col] = ch;
            }
        }
    }

    fn debug_print(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }
}
