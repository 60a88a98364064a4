//! Hit windows for the ball against walls, paddle and bricks
//!
//! Everything here works on the grid-aligned logical coordinates. Windows are
//! inclusive on both ends and deliberately narrower than a full unit, so a
//! ball stepping by `speed` only registers on the ticks it lands inside one.

use glam::DVec2;

use super::state::{Ball, Brick, Horizontal, Vertical};
use crate::consts::*;

/// Vertical extent of the paddle hit window below `PADDLE_Y`
const PADDLE_WINDOW: f64 = 0.9;
/// Horizontal slack on the paddle's left edge
const PADDLE_LEFT_SLACK: f64 = 1.0;
/// Ball must be within this far left of a brick's x to touch it
const BRICK_REACH: f64 = 2.0;
/// Each brick face is a band this tall
const BRICK_FACE_DEPTH: f64 = 0.9;

/// Which boundary the ball is touching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallHit {
    Ceiling,
    LeftWall,
    RightWall,
}

impl WallHit {
    /// Force the ball's direction away from the wall
    pub fn apply(self, ball: &mut Ball) {
        match self {
            WallHit::Ceiling => ball.vertical = Vertical::Down,
            WallHit::LeftWall => ball.horizontal = Horizontal::Right,
            WallHit::RightWall => ball.horizontal = Horizontal::Left,
        }
    }
}

/// Boundary check, first match wins: ceiling, then left, then right.
///
/// Only one wall is reported per tick even in a corner.
pub fn wall_reflection(pos: DVec2) -> Option<WallHit> {
    if pos.y <= 0.0 {
        Some(WallHit::Ceiling)
    } else if pos.x <= 0.0 {
        Some(WallHit::LeftWall)
    } else if pos.x >= SCREEN_WIDTH {
        Some(WallHit::RightWall)
    } else {
        None
    }
}

/// Whether the ball sits in the paddle's hit window
pub fn in_paddle_window(pos: DVec2, paddle_x: f64) -> bool {
    (PADDLE_Y..=PADDLE_Y + PADDLE_WINDOW).contains(&pos.y)
        && (paddle_x - PADDLE_LEFT_SLACK..=paddle_x + PADDLE_WIDTH).contains(&pos.x)
}

/// Band of a brick the ball landed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickFace {
    /// `[y, y + 0.9]`
    Top,
    /// `[y + 1, y + 1.9]`
    Bottom,
}

impl BrickFace {
    /// Vertical direction the ball takes after touching this band
    pub fn deflection(self) -> Vertical {
        match self {
            BrickFace::Top => Vertical::Down,
            BrickFace::Bottom => Vertical::Up,
        }
    }
}

/// Check the ball against one brick. Spent bricks never report contact.
pub fn brick_contact(pos: DVec2, brick: &Brick) -> Option<BrickFace> {
    if !brick.is_active() || !(brick.pos.x - BRICK_REACH..=brick.pos.x).contains(&pos.x) {
        return None;
    }

    let top = brick.pos.y;
    let bottom = brick.pos.y + BRICK_HEIGHT;
    if (top..=top + BRICK_FACE_DEPTH).contains(&pos.y) {
        Some(BrickFace::Top)
    } else if (bottom..=bottom + BRICK_FACE_DEPTH).contains(&pos.y) {
        Some(BrickFace::Bottom)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_priority() {
        // Corner: ceiling wins over left wall
        assert_eq!(wall_reflection(DVec2::new(0.0, 0.0)), Some(WallHit::Ceiling));
        assert_eq!(wall_reflection(DVec2::new(-1.0, 5.0)), Some(WallHit::LeftWall));
        assert_eq!(
            wall_reflection(DVec2::new(SCREEN_WIDTH, 5.0)),
            Some(WallHit::RightWall)
        );
        assert_eq!(wall_reflection(DVec2::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_wall_apply() {
        let mut ball = Ball::new();
        ball.vertical = Vertical::Up;
        ball.horizontal = Horizontal::Left;

        WallHit::Ceiling.apply(&mut ball);
        assert_eq!(ball.vertical, Vertical::Down);
        assert_eq!(ball.horizontal, Horizontal::Left);

        WallHit::LeftWall.apply(&mut ball);
        assert_eq!(ball.horizontal, Horizontal::Right);

        WallHit::RightWall.apply(&mut ball);
        assert_eq!(ball.horizontal, Horizontal::Left);
    }

    #[test]
    fn test_paddle_window() {
        let px = 10.0;
        assert!(in_paddle_window(DVec2::new(10.0, 25.0), px));
        assert!(in_paddle_window(DVec2::new(9.0, 25.9), px));
        assert!(in_paddle_window(DVec2::new(16.0, 25.5), px));
        assert!(!in_paddle_window(DVec2::new(8.9, 25.5), px));
        assert!(!in_paddle_window(DVec2::new(16.1, 25.5), px));
        assert!(!in_paddle_window(DVec2::new(12.0, 24.9), px));
        assert!(!in_paddle_window(DVec2::new(12.0, 26.0), px));
    }

    #[test]
    fn test_brick_faces() {
        let brick = Brick::new(9.0, 4.0, 2);
        assert_eq!(brick_contact(DVec2::new(8.0, 4.5), &brick), Some(BrickFace::Top));
        assert_eq!(brick_contact(DVec2::new(7.0, 5.9), &brick), Some(BrickFace::Bottom));
        // Gap between the bands
        assert_eq!(brick_contact(DVec2::new(8.0, 4.95), &brick), None);
        // Outside horizontal reach
        assert_eq!(brick_contact(DVec2::new(9.5, 4.5), &brick), None);
        assert_eq!(brick_contact(DVec2::new(6.9, 4.5), &brick), None);
    }

    #[test]
    fn test_spent_brick_ignored() {
        let brick = Brick::new(9.0, 4.0, 0);
        assert_eq!(brick_contact(DVec2::new(8.0, 4.5), &brick), None);
    }

    #[test]
    fn test_face_deflection() {
        assert_eq!(BrickFace::Top.deflection(), Vertical::Down);
        assert_eq!(BrickFace::Bottom.deflection(), Vertical::Up);
    }
}
