//! Collision tests for the ball against the screen edges and paddles
//!
//! Everything is axis-aligned: the ball is treated as its bounding box.

use super::rect::Rect;
use super::state::Side;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Ball touches or passes the top or bottom edge
pub fn hits_horizontal_wall(ball: &Rect) -> bool {
    ball.top() <= 0.0 || ball.bottom() >= SCREEN_HEIGHT
}

/// Side that wins the point if the ball reached a goal line
///
/// Reaching the right edge is a point for the left side and vice versa.
/// The right edge is checked first.
pub fn scoring_side(ball: &Rect) -> Option<Side> {
    if ball.right() >= SCREEN_WIDTH {
        Some(Side::Left)
    } else if ball.left() <= 0.0 {
        Some(Side::Right)
    } else {
        None
    }
}

/// Ball overlaps a paddle (edges touching counts)
pub fn hits_paddle(ball: &Rect, paddle: &Rect) -> bool {
    ball.intersects(paddle)
}
