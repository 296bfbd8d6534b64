//! Reactive opponent controller
//!
//! Tracks the ball's vertical center at a constant speed, and only while the
//! ball is heading toward its own side. No prediction, no re-centering.

use super::state::{Ball, Paddle, Side};
use crate::consts::SCREEN_HEIGHT;

/// Ball velocity points at `side`
pub fn ball_approaching(ball: &Ball, side: Side) -> bool {
    match side {
        Side::Left => ball.vel.x < 0.0,
        Side::Right => ball.vel.x > 0.0,
    }
}

/// Move `paddle` (defending `side`) one step toward the ball, then clamp
pub fn track_ball(paddle: &mut Paddle, ball: &Ball, side: Side, speed: f32) {
    if ball_approaching(ball, side) {
        let paddle_y = paddle.rect.center_y();
        let ball_y = ball.rect.center_y();
        if paddle_y < ball_y {
            paddle.rect.pos.y += speed;
        }
        if paddle_y > ball_y {
            paddle.rect.pos.y -= speed;
        }
    }
    paddle.rect.clamp_vertical(SCREEN_HEIGHT);
}
