//! Scene emission: turns a `GameState` into draw calls

use super::{Color, Surface};
use crate::consts::*;
use crate::sim::GameState;

pub const PADDLE_COLOR: Color = Color::RED;
pub const BALL_COLOR: Color = Color::BLUE;
pub const BRICK_COLOR: Color = Color::GREEN;

/// Draw the current frame. Read-only with respect to the state.
///
/// Once the game is over only the final score is shown.
pub fn draw_scene(state: &GameState, surface: &mut impl Surface) {
    if state.is_over() {
        surface.debug_print(&format!("{}\nBricks", state.score));
        return;
    }

    surface.fill_rect(state.paddle_x, PADDLE_Y, PADDLE_WIDTH, PADDLE_HEIGHT, PADDLE_COLOR);

    let ball = state.ball.pos;
    surface.fill_rect(ball.x, ball.y, BALL_SIZE, BALL_SIZE, BALL_COLOR);

    for brick in state.active_bricks() {
        surface.fill_rect(brick.pos.x, brick.pos.y, BRICK_WIDTH, BRICK_HEIGHT, BRICK_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{CommandBuffer, DrawCommand};
    use crate::sim::GamePhase;

    #[test]
    fn test_draw_fresh_game() {
        let state = GameState::new();
        let mut buf = CommandBuffer::new();
        draw_scene(&state, &mut buf);

        assert_eq!(buf.count_color(PADDLE_COLOR), 1);
        assert_eq!(buf.count_color(BALL_COLOR), 1);
        assert_eq!(buf.count_color(BRICK_COLOR), state.active_bricks().count());
        assert_eq!(
            buf.commands[0],
            DrawCommand::FillRect {
                x: PADDLE_START_X,
                y: PADDLE_Y,
                width: PADDLE_WIDTH,
                height: PADDLE_HEIGHT,
                color: PADDLE_COLOR,
            }
        );
    }

    #[test]
    fn test_spent_bricks_not_drawn() {
        let mut state = GameState::new();
        for brick in state.bricks.iter_mut().take(5) {
            brick.life = 0;
        }
        let mut buf = CommandBuffer::new();
        draw_scene(&state, &mut buf);
        assert_eq!(buf.count_color(BRICK_COLOR), 31);
    }

    #[test]
    fn test_game_over_prints_score_only() {
        let mut state = GameState::new();
        state.score = 7;
        state.phase = GamePhase::GameOver;

        let mut buf = CommandBuffer::new();
        draw_scene(&state, &mut buf);
        assert_eq!(buf.commands, vec![DrawCommand::DebugPrint("7\nBricks".into())]);
    }
}
